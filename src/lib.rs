use axum::{routing::get, Router};
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::services::ServeDir;

use app_state::AppState;
use routes::{protected, views};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let admin = || app_state.config.admin_roles().clone();
    let details = app_state.config.details_roles().clone();

    Router::new()
        // Public pages
        .route("/", get(views::landing))
        .route("/home", get(views::home))
        .route("/contact", get(views::contact))
        .route("/signin", get(views::signin))
        .route("/signup", get(views::signup))
        .route("/forgotpassword", get(views::forgot_password))
        .route("/resetpassword", get(views::reset_password))
        // Protected pages, each guarded on its own
        .route(
            "/details",
            protected(get(views::medical_form), &app_state, details),
        )
        .route("/main", protected(get(views::main_index), &app_state, admin()))
        .route(
            "/main/dashboard",
            protected(get(views::dashboard), &app_state, admin()),
        )
        .route(
            "/main/users",
            protected(get(views::users), &app_state, admin()),
        )
        .fallback_service(ServeDir::new(app_state.config.assets_dir()))
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
