//! Procurely Core
//!
//! Role-based data visibility and authorization for a procure-to-pay
//! application: requisitions, approvals, purchase orders, invoices, contracts
//! and vendors.
//!
//! # Overview
//!
//! The HTTP layer authenticates a session and hands the resulting user to
//! [`rbac::derive_permissions`]. The permission set is then applied to the
//! collections fetched from storage with [`rbac::filter_by_department`] or
//! [`rbac::scope_collection`] before anything is returned to the caller.
//!
//! ```rust,ignore
//! use procurely_core::prelude::*;
//!
//! let permissions = derive_permissions(&user);
//! let invoices = scope_collection(Collection::Invoices, invoices, &permissions, Some(&directory));
//! ```
//!
//! # Architecture
//!
//! - [`rbac`] - Role catalog, permission derivation, department filtering
//! - [`domain`] - Procure-to-pay record types
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - `log` backend setup
//!
//! Everything in [`rbac`] is synchronous and pure: no I/O, no shared mutable
//! state, safe to call from any number of request handlers at once.

pub mod config; // Configuration system with TOML support
pub mod domain;
pub mod error;
pub mod logging;
pub mod rbac; // Role-Based Access Control system

// Prelude module for convenient imports
pub mod prelude;

pub use config::ProcurelyConfig;
pub use error::AccessError;
