use thiserror::Error;

use super::DecodeError;
use crate::domain::{Decision, Role};

/// Why the gate refused a visitor. Every kind ends in a redirect.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("no credential present")]
    NoCredential,

    #[error("credential could not be decoded: {0}")]
    MalformedCredential(DecodeError),

    #[error("credential expired at {expired_at}")]
    ExpiredCredential { expired_at: i64 },

    #[error("role {role} does not satisfy the route")]
    InsufficientRole { role: Role },
}

impl GateError {
    /// Malformed and expired credentials are purged so the next evaluation
    /// short-circuits on `NoCredential`.
    pub fn clears_credential(&self) -> bool {
        matches!(
            self,
            GateError::MalformedCredential(_) | GateError::ExpiredCredential { .. }
        )
    }
}

impl From<GateError> for Decision {
    fn from(err: GateError) -> Self {
        match err {
            GateError::InsufficientRole { .. } => Decision::RedirectUnauthorized,
            GateError::NoCredential
            | GateError::MalformedCredential(_)
            | GateError::ExpiredCredential { .. } => Decision::RedirectUnauthenticated,
        }
    }
}
