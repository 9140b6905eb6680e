//! Department-scoped record filtering
//!
//! Rules, first match wins:
//! 1. cross-department permission: everything is visible
//! 2. record carries a non-empty department: visible iff it equals the user's
//! 3. record carries a requestor found in the directory: visible iff the
//!    requestor's department equals the user's
//! 4. otherwise the department is unknown and the record stays visible
//!
//! Rule 4 is fail-open. Existing clients rely on it, so records without
//! department information are never dropped here.

use super::context::DirectoryEntry;
use super::permissions::UserPermissions;
use serde_json::Value;
use std::fmt;

/// Records that may be scoped to a department
pub trait DepartmentScoped {
    /// Department carried directly by the record
    fn department(&self) -> Option<&str>;

    /// Identifier of the user who raised the record
    fn requestor_id(&self) -> Option<&str> {
        None
    }
}

impl<T: DepartmentScoped + ?Sized> DepartmentScoped for &T {
    fn department(&self) -> Option<&str> {
        (**self).department()
    }

    fn requestor_id(&self) -> Option<&str> {
        (**self).requestor_id()
    }
}

/// Untyped JSON records, read through their `department` and `requestorId` members
impl DepartmentScoped for Value {
    fn department(&self) -> Option<&str> {
        self.get("department").and_then(Value::as_str)
    }

    fn requestor_id(&self) -> Option<&str> {
        self.get("requestorId").and_then(Value::as_str)
    }
}

/// Which rule decided a record's visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Caller sees every department
    AllDepartments,
    /// Record department equals the caller's
    DepartmentMatch,
    /// Record department differs from the caller's
    DepartmentMismatch,
    /// Requestor resolved to the caller's department
    RequestorMatch,
    /// Requestor resolved to another department
    RequestorMismatch,
    /// Department could not be determined (fail-open)
    Undetermined,
}

impl Visibility {
    pub const ALL: [Visibility; 6] = [
        Visibility::AllDepartments,
        Visibility::DepartmentMatch,
        Visibility::DepartmentMismatch,
        Visibility::RequestorMatch,
        Visibility::RequestorMismatch,
        Visibility::Undetermined,
    ];

    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::DepartmentMismatch | Visibility::RequestorMismatch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::AllDepartments => "all_departments",
            Visibility::DepartmentMatch => "department_match",
            Visibility::DepartmentMismatch => "department_mismatch",
            Visibility::RequestorMatch => "requestor_match",
            Visibility::RequestorMismatch => "requestor_mismatch",
            Visibility::Undetermined => "undetermined",
        }
    }
}

/// How many records each rule decided during one filtering pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityTally {
    counts: [usize; 6],
}

impl VisibilityTally {
    pub fn record(&mut self, decision: Visibility) {
        self.counts[decision as usize] += 1;
    }

    pub fn count(&self, decision: Visibility) -> usize {
        self.counts[decision as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn kept(&self) -> usize {
        Visibility::ALL.iter().filter(|d| d.is_visible()).map(|d| self.count(*d)).sum()
    }
}

/// Non-zero counts only, e.g. `department_match=2, undetermined=1`
impl fmt::Display for VisibilityTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for decision in Visibility::ALL {
            let count = self.count(decision);
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", decision.as_str(), count)?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Decide the visibility of a single record
pub fn decide<T, D>(
    record: &T,
    permissions: &UserPermissions,
    directory: Option<&[D]>,
) -> Visibility
where
    T: DepartmentScoped + ?Sized,
    D: DirectoryEntry,
{
    if permissions.can_view_all_departments {
        return Visibility::AllDepartments;
    }

    if let Some(department) = record.department().filter(|d| !d.is_empty()) {
        return if department == permissions.department {
            Visibility::DepartmentMatch
        } else {
            Visibility::DepartmentMismatch
        };
    }

    let requestor = record
        .requestor_id()
        .zip(directory)
        .and_then(|(id, entries)| entries.iter().find(|entry| entry.id() == id));

    match requestor {
        Some(entry) if DirectoryEntry::department(entry) == permissions.department => {
            Visibility::RequestorMatch
        }
        Some(_) => Visibility::RequestorMismatch,
        None => Visibility::Undetermined,
    }
}

/// Check whether a single record is visible
pub fn is_visible<T, D>(record: &T, permissions: &UserPermissions, directory: Option<&[D]>) -> bool
where
    T: DepartmentScoped + ?Sized,
    D: DirectoryEntry,
{
    decide(record, permissions, directory).is_visible()
}

/// Keep the records the permission set may see, preserving order
///
/// With cross-department visibility the input is returned untouched.
pub fn filter_by_department<T, D>(
    records: Vec<T>,
    permissions: &UserPermissions,
    directory: Option<&[D]>,
) -> Vec<T>
where
    T: DepartmentScoped,
    D: DirectoryEntry,
{
    if permissions.can_view_all_departments {
        return records;
    }

    let mut tally = VisibilityTally::default();
    let visible: Vec<T> = records
        .into_iter()
        .filter(|record| {
            let decision = decide(record, permissions, directory);
            tally.record(decision);
            decision.is_visible()
        })
        .collect();

    log::debug!(
        "Department filter for '{}' ({}): kept {}/{} records ({})",
        permissions.department,
        permissions.role,
        tally.kept(),
        tally.total(),
        tally
    );

    visible
}

/// Borrowing counterpart of [`filter_by_department`]
pub fn visible_records<'a, T, D>(
    records: &'a [T],
    permissions: &UserPermissions,
    directory: Option<&[D]>,
) -> Vec<&'a T>
where
    T: DepartmentScoped,
    D: DirectoryEntry,
{
    records.iter().filter(|record| is_visible(*record, permissions, directory)).collect()
}

/// Same as [`filter_by_department`], logging the rule behind every decision
pub fn filter_by_department_audited<T, D>(
    records: Vec<T>,
    permissions: &UserPermissions,
    directory: Option<&[D]>,
) -> Vec<T>
where
    T: DepartmentScoped,
    D: DirectoryEntry,
{
    if permissions.can_view_all_departments {
        log::debug!(
            "Audit: role '{}' sees all {} records (all departments)",
            permissions.role,
            records.len()
        );
        return records;
    }

    let mut tally = VisibilityTally::default();
    let visible: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let decision = decide(&record, permissions, directory);
            tally.record(decision);
            log::debug!(
                "Audit: record #{} department={:?} requestor={:?} -> {} ({})",
                index,
                record.department(),
                record.requestor_id(),
                if decision.is_visible() { "visible" } else { "hidden" },
                decision.as_str()
            );
            decision.is_visible().then_some(record)
        })
        .collect();

    log::debug!(
        "Audit: role '{}' in '{}' kept {}/{} records ({})",
        permissions.role,
        permissions.department,
        tally.kept(),
        tally.total(),
        tally
    );

    visible
}
