use axum::response::{Html, Redirect};
use axum::Extension;

use crate::domain::Principal;

// Page bodies are placeholders; the front end renders the real views.
fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title} | StrokeCare</title></head><body><main>{body}</main></body></html>"
    ))
}

pub async fn landing() -> Html<String> {
    page("Welcome", "<h1>StrokeCare</h1>")
}

pub async fn home() -> Html<String> {
    page("Home", "<h1>Home</h1>")
}

pub async fn contact() -> Html<String> {
    page("Contact", "<h1>Contact us</h1>")
}

pub async fn signin() -> Html<String> {
    page("Sign in", "<h1>Sign in</h1>")
}

pub async fn signup() -> Html<String> {
    page("Sign up", "<h1>Create an account</h1>")
}

pub async fn forgot_password() -> Html<String> {
    page("Forgot password", "<h1>Forgot password</h1>")
}

pub async fn reset_password() -> Html<String> {
    page("Reset password", "<h1>Reset password</h1>")
}

pub async fn medical_form(Extension(principal): Extension<Principal>) -> Html<String> {
    page(
        "Medical details",
        &format!(
            "<h1>Medical details</h1><p data-role=\"{}\">Stroke risk intake</p>",
            principal.role
        ),
    )
}

/// The admin layout has no content of its own.
pub async fn main_index() -> Redirect {
    Redirect::to("/main/dashboard")
}

pub async fn dashboard(Extension(principal): Extension<Principal>) -> Html<String> {
    page(
        "Dashboard",
        &format!(
            "<h1>Dashboard</h1><p data-role=\"{}\">Signed in</p>",
            principal.role
        ),
    )
}

pub async fn users(Extension(principal): Extension<Principal>) -> Html<String> {
    page(
        "Users",
        &format!(
            "<h1>Users</h1><p data-role=\"{}\">User management</p>",
            principal.role
        ),
    )
}
