//! Access resolver used by request handlers

use super::collection::{scope_collection, Collection};
use super::context::{DirectoryEntry, UserLike};
use super::filter::{filter_by_department, filter_by_department_audited, DepartmentScoped};
use super::permissions::{derive_permissions, Capability, UserPermissions};
use crate::config::AccessConfig;
use crate::error::AccessError;

/// Applies permission sets to collections and actions
///
/// Holds no per-user state; one resolver serves every request.
#[derive(Debug, Clone, Default)]
pub struct AccessResolver {
    audit: bool,
}

impl AccessResolver {
    /// Create a resolver from configuration
    pub fn new(config: &AccessConfig) -> Self {
        Self { audit: config.audit_enabled }
    }

    /// Resolver that logs every decision
    pub fn audited() -> Self {
        Self { audit: true }
    }

    pub fn audit_enabled(&self) -> bool {
        self.audit
    }

    /// Derive the permission set for an authenticated user
    pub fn permissions_for<U: UserLike + ?Sized>(&self, user: &U) -> UserPermissions {
        derive_permissions(user)
    }

    /// Department filter, audited when enabled
    pub fn filter<T, D>(
        &self,
        records: Vec<T>,
        permissions: &UserPermissions,
        directory: Option<&[D]>,
    ) -> Vec<T>
    where
        T: DepartmentScoped,
        D: DirectoryEntry,
    {
        if self.audit {
            filter_by_department_audited(records, permissions, directory)
        } else {
            filter_by_department(records, permissions, directory)
        }
    }

    /// Collection scoping, audited when enabled
    pub fn scope<T, D>(
        &self,
        collection: Collection,
        records: Vec<T>,
        permissions: &UserPermissions,
        directory: Option<&[D]>,
    ) -> Vec<T>
    where
        T: DepartmentScoped,
        D: DirectoryEntry,
    {
        let opened = collection.view_all_capability().is_some_and(|c| permissions.has(c));
        if self.audit && !opened {
            return filter_by_department_audited(records, permissions, directory);
        }
        scope_collection(collection, records, permissions, directory)
    }

    /// Check a capability before a mutation
    pub fn authorize(
        &self,
        permissions: &UserPermissions,
        capability: Capability,
    ) -> Result<(), AccessError> {
        let result = permissions.require(capability);
        if self.audit {
            if let Err(ref e) = result {
                log::warn!(
                    "Audit: denied for '{}' in '{}': {}",
                    permissions.role,
                    permissions.department,
                    e
                );
            }
        }
        result
    }
}
