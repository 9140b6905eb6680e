use anyhow::Result;
use procurely_core::rbac::{derive_permissions, User};
use std::path::Path;

use super::read_json;

/// Where the user comes from: a JSON file or inline flags.
pub enum UserSource<'a> {
    File(&'a Path),
    Inline { role: &'a str, department: &'a str, view_all_departments: bool },
}

/// Resolve and validate the user for a command.
pub fn load_user(source: UserSource<'_>) -> Result<User> {
    match source {
        UserSource::File(path) => Ok(User::from_json(&read_json(path)?)?),
        UserSource::Inline { role, department, view_all_departments } => {
            let mut user = User::new("cli", "cli", role, department);
            if view_all_departments {
                user = user.with_view_all_departments(true);
            }
            Ok(user)
        }
    }
}

/// Print the permission set derived for a user.
pub fn run(source: UserSource<'_>) -> Result<String> {
    let user = load_user(source)?;

    let permissions = derive_permissions(&user);
    log::debug!("Derived permissions for {} ({})", user.id, user.role);
    Ok(serde_json::to_string_pretty(&permissions)?)
}
