//! Procure-to-pay domain records
//!
//! These records are owned by the persistence layer. The access-control core
//! only reads their department and requestor to decide visibility.

use crate::rbac::DepartmentScoped;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear workflow status shared by requisitions, approvals and orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Pending,
    Approved,
    InProgress,
    Completed,
    Rejected,
}

impl WorkflowStatus {
    /// Next step of pending -> approved -> in_progress -> completed
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::Pending => Some(WorkflowStatus::Approved),
            WorkflowStatus::Approved => Some(WorkflowStatus::InProgress),
            WorkflowStatus::InProgress => Some(WorkflowStatus::Completed),
            WorkflowStatus::Completed | WorkflowStatus::Rejected => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStatus::Pending => "pending",
            WorkflowStatus::Approved => "approved",
            WorkflowStatus::InProgress => "in_progress",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to purchase goods or services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requestor_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Approval step attached to a requisition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: String,
    pub requisition_id: String,
    #[serde(default)]
    pub approver_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requestor_id: Option<String>,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Purchase order issued to a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: String,
    pub vendor_id: String,
    #[serde(default)]
    pub requisition_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requestor_id: Option<String>,
    pub total: f64,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Vendor invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub vendor_id: String,
    #[serde(default)]
    pub purchase_order_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requestor_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Vendor contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub vendor_id: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requestor_id: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub status: WorkflowStatus,
}

/// Supplier known to the organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

macro_rules! department_scoped {
    ($($record:ty),* $(,)?) => {
        $(
            impl DepartmentScoped for $record {
                fn department(&self) -> Option<&str> {
                    self.department.as_deref()
                }

                fn requestor_id(&self) -> Option<&str> {
                    self.requestor_id.as_deref()
                }
            }
        )*
    };
}

department_scoped!(Requisition, Approval, PurchaseOrder, Invoice, Contract);

impl DepartmentScoped for Vendor {
    fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
}
