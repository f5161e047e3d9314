use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::MethodRouter;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Decision, RoleRequirement};
use crate::services::{authorize, authorize_remote, CookieCredentialStore};

/// Gate configuration for one route.
#[derive(Clone)]
pub struct RouteGuard {
    state: AppState,
    requirement: Arc<RoleRequirement>,
}

impl RouteGuard {
    pub fn new(state: AppState, requirement: RoleRequirement) -> Self {
        Self {
            state,
            requirement: Arc::new(requirement),
        }
    }
}

/// Wrap a single route in its own gate.
///
/// Protection is never inherited from a parent path: every route that must
/// be guarded is declared through here, so reaching it by direct URL is
/// checked the same way.
pub fn protected(route: MethodRouter, state: &AppState, requirement: RoleRequirement) -> MethodRouter {
    route.route_layer(middleware::from_fn_with_state(
        RouteGuard::new(state.clone(), requirement),
        require,
    ))
}

pub async fn require(
    State(guard): State<RouteGuard>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let state = &guard.state;
    let mut store = CookieCredentialStore::new(jar, state.config.access_cookie_name());

    let decision = match &state.token_verifier {
        Some(verifier) => {
            authorize_remote(
                &mut store,
                state.clock.as_ref(),
                verifier.as_ref(),
                &guard.requirement,
                state.config.verify_timeout(),
            )
            .await
        }
        None => authorize(
            &mut store,
            state.clock.as_ref(),
            state.token_decoder.as_ref(),
            &guard.requirement,
        ),
    };

    match decision {
        Decision::Allow(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Decision::RedirectUnauthenticated => (
            store.into_jar(),
            Redirect::to(state.config.signin_path()),
        )
            .into_response(),
        Decision::RedirectUnauthorized => (
            store.into_jar(),
            Redirect::to(state.config.unauthorized_redirect()),
        )
            .into_response(),
    }
}
