//! Role catalog for RBAC
//!
//! The catalog is a process-wide constant: it is built once on first access
//! and never mutated. Permission tags listed here are descriptive (they feed
//! role-management screens); visibility decisions are made by
//! [`derive_permissions`](super::derive_permissions) from the [`Role`] alone.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized roles of the procure-to-pay application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Requester with visibility into their own department
    EndUser,
    /// Department manager, approves requisitions
    Manager,
    /// Director, approves high-value requisitions
    Director,
    /// Procurement subject-matter expert
    ProcurementSme,
    /// Finance team member
    Finance,
    /// Legal team member
    Legal,
    /// System administrator
    Admin,
}

impl Role {
    /// All roles, in catalog order
    pub const ALL: [Role; 7] = [
        Role::EndUser,
        Role::Manager,
        Role::Director,
        Role::ProcurementSme,
        Role::Finance,
        Role::Legal,
        Role::Admin,
    ];

    /// Stable key used in user records and JSON payloads
    pub fn key(self) -> &'static str {
        match self {
            Role::EndUser => "end_user",
            Role::Manager => "manager",
            Role::Director => "director",
            Role::ProcurementSme => "procurement_sme",
            Role::Finance => "finance",
            Role::Legal => "legal",
            Role::Admin => "admin",
        }
    }

    /// Parse a role key. Unrecognized keys yield `None`.
    pub fn from_key(key: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Roles with organization-wide visibility
    pub fn is_sme(self) -> bool {
        matches!(self, Role::ProcurementSme | Role::Finance | Role::Legal | Role::Admin)
    }

    /// Approval-chain roles
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager | Role::Director)
    }

    /// Catalog entry for this role
    pub fn definition(self) -> &'static RoleDefinition {
        // ROLE_DEFINITIONS is built from Role::ALL, so every index exists.
        &ROLE_DEFINITIONS[self as usize]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Descriptive catalog entry for a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    /// Role key (e.g. "procurement_sme")
    pub key: &'static str,

    /// Display name
    pub name: &'static str,

    /// What the role is for
    pub description: &'static str,

    /// Nominal permission tags; `*` stands for everything
    pub permissions: &'static [&'static str],
}

impl RoleDefinition {
    /// Check if the definition lists a tag (the `*` tag matches any)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.permissions.iter().any(|p| *p == "*" || *p == tag)
    }

    /// Typed role for this entry
    pub fn role(&self) -> Option<Role> {
        Role::from_key(self.key)
    }
}

fn build_definition(role: Role) -> RoleDefinition {
    let key = role.key();
    match role {
        Role::EndUser => RoleDefinition {
            key,
            name: "End User",
            description: "Creates requisitions and follows them within their own department",
            permissions: &["create_requisition", "view_own_requisitions", "view_department_data"],
        },
        Role::Manager => RoleDefinition {
            key,
            name: "Manager",
            description: "Approves departmental requisitions and oversees purchasing activity",
            permissions: &[
                "create_requisition",
                "approve_requisitions",
                "view_all_approvals",
                "view_all_contracts",
                "view_all_purchase_orders",
                "view_department_data",
            ],
        },
        Role::Director => RoleDefinition {
            key,
            name: "Director",
            description: "Approves high-value requisitions across the approval chain",
            permissions: &[
                "create_requisition",
                "approve_requisitions",
                "approve_high_value",
                "view_all_approvals",
                "view_all_contracts",
                "view_all_purchase_orders",
                "view_department_data",
            ],
        },
        Role::ProcurementSme => RoleDefinition {
            key,
            name: "Procurement SME",
            description: "Runs sourcing, purchase orders and vendor relationships for every department",
            permissions: &[
                "view_all_departments",
                "manage_purchase_orders",
                "manage_vendors",
                "manage_contracts",
                "view_all_invoices",
                "manage_users",
            ],
        },
        Role::Finance => RoleDefinition {
            key,
            name: "Finance",
            description: "Processes invoices and payments, reviews spend analytics",
            permissions: &[
                "view_all_departments",
                "manage_invoices",
                "view_all_invoices",
                "view_analytics",
            ],
        },
        Role::Legal => RoleDefinition {
            key,
            name: "Legal",
            description: "Reviews and maintains contracts",
            permissions: &["view_all_departments", "manage_contracts", "view_all_contracts"],
        },
        Role::Admin => RoleDefinition {
            key,
            name: "Administrator",
            description: "Full access to users, data and system settings",
            permissions: &["*"],
        },
    }
}

lazy_static! {
    /// Role catalog, in `Role::ALL` order
    pub static ref ROLE_DEFINITIONS: Vec<RoleDefinition> =
        Role::ALL.into_iter().map(build_definition).collect();
}

/// Look up a role definition by key
pub fn role_definition(key: &str) -> Option<&'static RoleDefinition> {
    ROLE_DEFINITIONS.iter().find(|def| def.key == key)
}

/// Enumerate the whole catalog
pub fn role_definitions() -> impl Iterator<Item = &'static RoleDefinition> {
    ROLE_DEFINITIONS.iter()
}
