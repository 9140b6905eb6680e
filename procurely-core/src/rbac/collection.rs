//! Collection-level scoping
//!
//! Some collections have their own "view all" capability. It opens the whole
//! collection; otherwise the department filter decides.

use super::context::DirectoryEntry;
use super::filter::{filter_by_department, DepartmentScoped};
use super::permissions::{Capability, UserPermissions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain collections served to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Requisitions,
    Approvals,
    Contracts,
    PurchaseOrders,
    Invoices,
    Vendors,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Requisitions,
        Collection::Approvals,
        Collection::Contracts,
        Collection::PurchaseOrders,
        Collection::Invoices,
        Collection::Vendors,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Collection::Requisitions => "requisitions",
            Collection::Approvals => "approvals",
            Collection::Contracts => "contracts",
            Collection::PurchaseOrders => "purchase_orders",
            Collection::Invoices => "invoices",
            Collection::Vendors => "vendors",
        }
    }

    /// Capability that opens the whole collection, if any
    pub fn view_all_capability(self) -> Option<Capability> {
        match self {
            Collection::Approvals => Some(Capability::ViewAllApprovals),
            Collection::Contracts => Some(Capability::ViewAllContracts),
            Collection::PurchaseOrders => Some(Capability::ViewAllPurchaseOrders),
            Collection::Invoices => Some(Capability::ViewAllInvoices),
            Collection::Requisitions | Collection::Vendors => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Collection::ALL
            .into_iter()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| format!("unknown collection: \"{}\"", s))
    }
}

/// Apply the permission set to a whole collection
pub fn scope_collection<T, D>(
    collection: Collection,
    records: Vec<T>,
    permissions: &UserPermissions,
    directory: Option<&[D]>,
) -> Vec<T>
where
    T: DepartmentScoped,
    D: DirectoryEntry,
{
    if let Some(capability) = collection.view_all_capability() {
        if permissions.has(capability) {
            log::debug!(
                "Role '{}' sees all {} {} via {}",
                permissions.role,
                records.len(),
                collection,
                capability
            );
            return records;
        }
    }

    filter_by_department(records, permissions, directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::{derive_permissions, User};
    use serde_json::json;

    fn records() -> Vec<serde_json::Value> {
        vec![json!({ "id": "a", "department": "IT" }), json!({ "id": "b", "department": "Legal" })]
    }

    #[test]
    fn test_manager_invoice_asymmetry() {
        let manager = derive_permissions(&User::new("m", "M", "manager", "IT"));
        let none: Option<&[User]> = None;

        assert_eq!(scope_collection(Collection::Invoices, records(), &manager, none).len(), 1);
        assert_eq!(scope_collection(Collection::Contracts, records(), &manager, none).len(), 2);
        assert_eq!(scope_collection(Collection::Approvals, records(), &manager, none).len(), 2);
        assert_eq!(scope_collection(Collection::PurchaseOrders, records(), &manager, none).len(), 2);
        assert_eq!(scope_collection(Collection::Requisitions, records(), &manager, none).len(), 1);
    }

    #[test]
    fn test_end_user_scoped_everywhere() {
        let user = derive_permissions(&User::new("e", "E", "end_user", "IT"));
        for collection in Collection::ALL {
            let visible = scope_collection(collection, records(), &user, None::<&[User]>);
            assert_eq!(visible, vec![json!({ "id": "a", "department": "IT" })], "{collection}");
        }
    }

    #[test]
    fn test_vendors_without_department_are_shared() {
        let user = derive_permissions(&User::new("e", "E", "end_user", "IT"));
        let vendors = vec![json!({ "id": "v1", "name": "Acme" })];
        let visible = scope_collection(Collection::Vendors, vendors.clone(), &user, None::<&[User]>);
        assert_eq!(visible, vendors);
    }

    #[test]
    fn test_parse_collection() {
        assert_eq!("purchase-orders".parse::<Collection>(), Ok(Collection::PurchaseOrders));
        assert_eq!("Invoices".parse::<Collection>(), Ok(Collection::Invoices));
        assert!("widgets".parse::<Collection>().is_err());
    }
}
