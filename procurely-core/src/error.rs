//! Errors raised at the edges of the access-control core
//!
//! Permission derivation and department filtering never fail. Only boundary
//! validation of user payloads and explicit capability checks do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("user payload must be a JSON object")]
    NotAnObject,

    #[error("user payload is missing required string field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid user payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("role `{role}` lacks capability `{capability}`")]
    Forbidden { role: String, capability: &'static str },
}
