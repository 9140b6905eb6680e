//! Common imports for Procurely consumers

pub use crate::domain::{
    Approval, Contract, Invoice, PurchaseOrder, Requisition, Vendor, WorkflowStatus,
};
pub use crate::error::AccessError;
pub use crate::rbac::{
    derive_permissions, filter_by_department, is_visible, role_definition, role_definitions,
    scope_collection, visible_records, AccessResolver, Capability, Collection, DepartmentScoped,
    DirectoryEntry, DirectoryUser, Role, RoleDefinition, User, UserLike, UserPermissions,
};
