use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::AccessClaims;

use super::Config;

// Mirrors what the sign-in service issues: an HS256 token plus a cookie that
// expires together with the token.

/// Create an access token for `role` valid from `now` for the configured TTL.
pub fn generate_access_token(
    id: Option<i64>,
    role: &str,
    now: i64,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = AccessClaims {
        id,
        role: role.to_owned(),
        exp: now + config.token_ttl_seconds(),
    };
    create_token(&claims, config)
}

/// Sign arbitrary claims with the configured secret.
pub fn create_token(
    claims: &AccessClaims,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(config.jwt_secret()),
    )
}
