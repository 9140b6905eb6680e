//! Procurely RBAC (Role-Based Access Control) Module
//!
//! Decides, for a user's role and department, which procure-to-pay records
//! they may see and act on.
//!
//! # Features
//! - Static role catalog with descriptive permission tags
//! - Pure permission derivation from role, department and override flag
//! - Department-scoped filtering over any record type
//! - Collection-level "view all" capabilities
//!
//! # Example
//! ```rust,ignore
//! use procurely_core::rbac::{derive_permissions, filter_by_department, User};
//!
//! let user = User::new("u1", "Ada", "manager", "IT");
//! let permissions = derive_permissions(&user);
//! let visible = filter_by_department(requisitions, &permissions, Some(&directory));
//! ```

mod collection;
mod context;
mod filter;
mod permissions;
mod resolver;
mod roles;

// Public exports
pub use collection::{scope_collection, Collection};
pub use context::{DirectoryEntry, DirectoryUser, User, UserLike};
pub use filter::{
    decide, filter_by_department, filter_by_department_audited, is_visible, visible_records,
    DepartmentScoped, Visibility, VisibilityTally,
};
pub use permissions::{derive_permissions, Capability, UserPermissions};
pub use resolver::AccessResolver;
pub use roles::{role_definition, role_definitions, Role, RoleDefinition, ROLE_DEFINITIONS};

/// Trait for checking if a role lists a descriptive permission tag
///
/// Visibility decisions never go through this trait; it backs
/// role-management screens.
pub trait PermissionChecker: Send + Sync {
    /// Check if a given role has the specified permission tag
    ///
    /// # Arguments
    /// * `role` - The role key (e.g., "manager", "finance")
    /// * `permission` - The permission tag (e.g., "approve_requisitions")
    fn has_permission(&self, role: &str, permission: &str) -> bool;
}

/// Permission checker backed by the static role catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPermissionChecker;

impl PermissionChecker for CatalogPermissionChecker {
    fn has_permission(&self, role: &str, permission: &str) -> bool {
        role_definition(role).is_some_and(|def| def.has_tag(permission))
    }
}
