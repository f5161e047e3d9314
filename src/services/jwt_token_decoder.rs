use std::collections::HashSet;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::{AccessClaims, TokenDecoder};
use crate::errors::DecodeError;
use crate::utils::Config;

/// Verifies HS256 access tokens against the shared secret.
///
/// Expiry is deliberately not validated here: the gate compares `exp` with
/// its injected clock, so a correctly signed but stale token decodes and is
/// then classified as expired rather than malformed.
#[derive(Clone)]
pub struct JwtTokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenDecoder {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        // audience is not part of the credential contract
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::from(["exp".to_owned()]);
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret())
    }
}

impl TokenDecoder for JwtTokenDecoder {
    fn decode(&self, token: &str) -> Result<AccessClaims, DecodeError> {
        decode::<AccessClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(DecodeError::from)
    }
}
