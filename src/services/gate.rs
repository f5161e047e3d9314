//! Route authorization gate.
//!
//! Each evaluation walks the same steps in order: read the credential,
//! decode it, compare its expiry with the clock, then match its role
//! against the route's requirement. Every failure resolves to a redirect.
//! Only undecodable and expired credentials are removed from the store;
//! an absent credential or a role mismatch leaves it untouched.
use std::time::Duration;

use crate::domain::{
    AccessClaims, Clock, CredentialStore, Decision, Principal, Role, RoleRequirement,
    TokenDecoder, TokenVerifier,
};
use crate::errors::{DecodeError, GateError};

/// Decide whether the visitor holding `store`'s credential may see a route
/// guarded by `requirement`.
pub fn authorize<S, C, D>(
    store: &mut S,
    clock: &C,
    decoder: &D,
    requirement: &RoleRequirement,
) -> Decision
where
    S: CredentialStore + ?Sized,
    C: Clock + ?Sized,
    D: TokenDecoder + ?Sized,
{
    let outcome = match store.get() {
        None => Err(GateError::NoCredential),
        Some(token) => decoder
            .decode(&token)
            .map_err(GateError::MalformedCredential)
            .and_then(|claims| admit(claims, clock.now(), requirement)),
    };
    settle(store, outcome)
}

/// Like [`authorize`], but the credential is checked by a networked verifier.
///
/// The call is bounded by `timeout`. A timeout is handled exactly like a
/// token that fails to decode.
pub async fn authorize_remote<S, C, V>(
    store: &mut S,
    clock: &C,
    verifier: &V,
    requirement: &RoleRequirement,
    timeout: Duration,
) -> Decision
where
    S: CredentialStore + Send + ?Sized,
    C: Clock + ?Sized,
    V: TokenVerifier + ?Sized,
{
    let outcome = match store.get() {
        None => Err(GateError::NoCredential),
        Some(token) => match tokio::time::timeout(timeout, verifier.verify(&token)).await {
            Ok(verified) => verified
                .map_err(GateError::MalformedCredential)
                .and_then(|claims| admit(claims, clock.now(), requirement)),
            Err(_) => Err(GateError::MalformedCredential(DecodeError::Timeout)),
        },
    };
    settle(store, outcome)
}

fn admit(
    claims: AccessClaims,
    now: i64,
    requirement: &RoleRequirement,
) -> Result<Principal, GateError> {
    if claims.exp <= now {
        return Err(GateError::ExpiredCredential {
            expired_at: claims.exp,
        });
    }

    let role = Role::from_claim(claims.role);
    if !requirement.is_satisfied_by(&role) {
        return Err(GateError::InsufficientRole { role });
    }

    Ok(Principal {
        subject_id: claims.id,
        role,
    })
}

fn settle<S>(store: &mut S, outcome: Result<Principal, GateError>) -> Decision
where
    S: CredentialStore + ?Sized,
{
    match outcome {
        Ok(principal) => {
            log::debug!("gate: allow role={}", principal.role);
            Decision::Allow(principal)
        }
        Err(err) => {
            if err.clears_credential() {
                log::info!("gate: purging credential: {err}");
                store.clear();
            } else {
                log::debug!("gate: refused: {err}");
            }
            Decision::from(err)
        }
    }
}
