//! Authenticated user context
//!
//! The HTTP layer resolves a session into a [`User`] and hands it to the
//! resolver. Anything else that knows a role and a department can take part
//! through [`UserLike`].

use crate::error::AccessError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anything that can be turned into a permission set
pub trait UserLike {
    /// Raw role key (may be unrecognized)
    fn role(&self) -> &str;

    /// Department label
    fn department(&self) -> &str;

    /// Explicit "view all departments" grant, independent of the role
    fn view_all_departments_override(&self) -> bool {
        false
    }
}

/// Lookup entry used to resolve a record's requestor to a department
pub trait DirectoryEntry {
    fn id(&self) -> &str;
    fn department(&self) -> &str;
}

/// Authenticated user, immutable for the lifetime of a request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Role key
    pub role: String,

    /// Department label
    pub department: String,

    /// Capability override granted outside the role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_view_all_departments: Option<bool>,
}

impl User {
    /// Create a user with the given identity
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            department: department.into(),
            can_view_all_departments: None,
        }
    }

    /// Grant or revoke the cross-department override
    pub fn with_view_all_departments(mut self, enabled: bool) -> Self {
        self.can_view_all_departments = Some(enabled);
        self
    }

    /// Validate a loosely-typed user payload
    ///
    /// `role` and `department` must be present strings. `id` and `name`
    /// default to empty; a non-boolean `canViewAllDepartments` is ignored.
    pub fn from_json(value: &Value) -> Result<Self, AccessError> {
        let object = value.as_object().ok_or(AccessError::NotAnObject)?;

        let required = |field: &'static str| -> Result<String, AccessError> {
            object
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(AccessError::MissingField { field })
        };
        let optional = |field: &str| -> String {
            object.get(field).and_then(Value::as_str).unwrap_or_default().to_string()
        };

        Ok(Self {
            id: optional("id"),
            name: optional("name"),
            role: required("role")?,
            department: required("department")?,
            can_view_all_departments: object.get("canViewAllDepartments").and_then(Value::as_bool),
        })
    }

    /// Parse and validate a user from JSON text
    pub fn from_json_str(input: &str) -> Result<Self, AccessError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }
}

impl UserLike for User {
    fn role(&self) -> &str {
        &self.role
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn view_all_departments_override(&self) -> bool {
        self.can_view_all_departments.unwrap_or(false)
    }
}

impl DirectoryEntry for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> &str {
        &self.department
    }
}

/// Directory row: just enough to resolve a requestor to a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub department: String,
}

impl DirectoryUser {
    pub fn new(id: impl Into<String>, department: impl Into<String>) -> Self {
        Self { id: id.into(), department: department.into() }
    }

    /// Read a loosely-typed directory row
    ///
    /// Rows without a string `id` and a string `department` cannot resolve
    /// anyone and yield `None`. Every other member is ignored.
    pub fn from_json(value: &Value) -> Option<Self> {
        let id = value.get("id")?.as_str()?;
        let department = value.get("department")?.as_str()?;
        Some(Self::new(id, department))
    }
}

impl DirectoryEntry for DirectoryUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> &str {
        &self.department
    }
}

impl From<&User> for DirectoryUser {
    fn from(user: &User) -> Self {
        Self::new(user.id.as_str(), user.department.as_str())
    }
}

impl<T: UserLike + ?Sized> UserLike for &T {
    fn role(&self) -> &str {
        (**self).role()
    }

    fn department(&self) -> &str {
        (**self).department()
    }

    fn view_all_departments_override(&self) -> bool {
        (**self).view_all_departments_override()
    }
}
