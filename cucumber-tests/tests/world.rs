use cucumber::World;
use procurely_core::rbac::{Collection, DirectoryUser, User, UserPermissions};
use serde_json::Value;

/// State shared by the steps of one scenario
#[derive(Debug, Default, World)]
pub struct AccessWorld {
    pub user: Option<User>,
    pub permissions: Option<UserPermissions>,
    pub directory: Option<Vec<DirectoryUser>>,
    pub records: Vec<Value>,
    pub collection: Option<Collection>,
    pub visible: Vec<Value>,
}

impl AccessWorld {
    pub fn user(&self) -> &User {
        self.user.as_ref().expect("no user in scenario")
    }

    pub fn permissions(&self) -> &UserPermissions {
        self.permissions.as_ref().expect("permissions were not derived")
    }

    /// Ids of the visible records, in order
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible
            .iter()
            .map(|r| r.get("id").and_then(Value::as_str).unwrap_or("?").to_string())
            .collect()
    }
}
