use crate::domain::AccessClaims;
use crate::errors::DecodeError;

/// Turns a stored token into claims, or fails.
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, token: &str) -> Result<AccessClaims, DecodeError>;
}

/// Networked counterpart of [`TokenDecoder`]. Callers bound it with a timeout.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AccessClaims, DecodeError>;
}
