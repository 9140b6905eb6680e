//! Permission derivation for RBAC

use super::context::UserLike;
use super::roles::Role;
use crate::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability bundle derived for one authorization check
///
/// Computed fresh from the user on every request; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub can_view_all_departments: bool,
    pub can_view_all_approvals: bool,
    pub can_view_all_contracts: bool,
    pub can_view_all_purchase_orders: bool,
    pub can_view_all_invoices: bool,
    pub can_manage_users: bool,
    pub can_manage_system: bool,

    /// Department of the user, echoed through
    pub department: String,

    /// Raw role key of the user, echoed through (even when unrecognized)
    pub role: String,
}

/// Individual capability flags of a [`UserPermissions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewAllDepartments,
    ViewAllApprovals,
    ViewAllContracts,
    ViewAllPurchaseOrders,
    ViewAllInvoices,
    ManageUsers,
    ManageSystem,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::ViewAllDepartments,
        Capability::ViewAllApprovals,
        Capability::ViewAllContracts,
        Capability::ViewAllPurchaseOrders,
        Capability::ViewAllInvoices,
        Capability::ManageUsers,
        Capability::ManageSystem,
    ];

    /// Stable identifier (e.g. "manage_users")
    pub fn key(self) -> &'static str {
        match self {
            Capability::ViewAllDepartments => "view_all_departments",
            Capability::ViewAllApprovals => "view_all_approvals",
            Capability::ViewAllContracts => "view_all_contracts",
            Capability::ViewAllPurchaseOrders => "view_all_purchase_orders",
            Capability::ViewAllInvoices => "view_all_invoices",
            Capability::ManageUsers => "manage_users",
            Capability::ManageSystem => "manage_system",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Capability::ViewAllDepartments => "See records of every department",
            Capability::ViewAllApprovals => "See every approval request",
            Capability::ViewAllContracts => "See every contract",
            Capability::ViewAllPurchaseOrders => "See every purchase order",
            Capability::ViewAllInvoices => "See every invoice",
            Capability::ManageUsers => "Create, edit and deactivate user accounts",
            Capability::ManageSystem => "Change system-wide settings",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl UserPermissions {
    /// Check a single capability flag
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAllDepartments => self.can_view_all_departments,
            Capability::ViewAllApprovals => self.can_view_all_approvals,
            Capability::ViewAllContracts => self.can_view_all_contracts,
            Capability::ViewAllPurchaseOrders => self.can_view_all_purchase_orders,
            Capability::ViewAllInvoices => self.can_view_all_invoices,
            Capability::ManageUsers => self.can_manage_users,
            Capability::ManageSystem => self.can_manage_system,
        }
    }

    /// Require a capability before acting on a record
    pub fn require(&self, capability: Capability) -> Result<(), AccessError> {
        if self.has(capability) {
            Ok(())
        } else {
            Err(AccessError::Forbidden { role: self.role.clone(), capability: capability.key() })
        }
    }

    /// Capabilities currently granted, in declaration order
    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(move |c| self.has(*c))
    }
}

/// Derive the permission set of a user from their role and department
///
/// Unknown roles get none of the elevated capabilities; only an explicit
/// override can still open cross-department visibility.
pub fn derive_permissions<U: UserLike + ?Sized>(user: &U) -> UserPermissions {
    let role = Role::from_key(user.role());
    let sme = role.is_some_and(Role::is_sme);
    let manager = role.is_some_and(Role::is_manager);
    let admin = role == Some(Role::Admin);

    let permissions = UserPermissions {
        can_view_all_departments: sme || user.view_all_departments_override(),
        can_view_all_approvals: sme || manager,
        can_view_all_contracts: sme || manager,
        can_view_all_purchase_orders: sme || manager,
        // Managers are scoped to their department for invoices.
        can_view_all_invoices: sme,
        can_manage_users: admin || role == Some(Role::ProcurementSme),
        can_manage_system: admin,
        department: user.department().to_string(),
        role: user.role().to_string(),
    };

    log::trace!(
        "Derived permissions for role '{}' in '{}': {:?}",
        permissions.role,
        permissions.department,
        permissions.granted().map(Capability::key).collect::<Vec<_>>()
    );

    permissions
}
