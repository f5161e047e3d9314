use crate::helpers::{location, purge_cookie, TestApp, TestContext, NOW};
use strokecare_gate::domain::RoleRequirement;
use strokecare_gate::utils::auth::generate_access_token;
use strokecare_gate::utils::{access_cookie, Config};
use test_context::test_context;

const ADMIN_ROUTES: [&str; 3] = ["/main", "/main/dashboard", "/main/users"];

#[test_context(TestContext)]
#[tokio::test]
async fn should_redirect_to_signin_without_credential(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    for path in ADMIN_ROUTES.iter().chain(["/details"].iter()) {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 303, "{path}");
        assert_eq!(location(&response), "/signin", "{path}");
        assert!(purge_cookie(&response).is_none(), "{path}");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_render_admin_pages_for_admin(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("admin", NOW + 3600);

    for path in ["/main/dashboard", "/main/users", "/details"] {
        let response = app.get_with_token(path, &token).await;
        assert_eq!(response.status().as_u16(), 200, "{path}");
        assert!(response.headers().get("set-cookie").is_none());
        let body = response.text().await.unwrap();
        assert!(body.contains("data-role=\"admin\""), "{path}");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn admin_layout_forwards_to_dashboard(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("admin", NOW + 3600);

    let response = app.get_with_token("/main", &token).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/main/dashboard");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_redirect_user_away_from_admin_pages(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("user", NOW + 3600);

    for path in ADMIN_ROUTES {
        let response = app.get_with_token(path, &token).await;
        assert_eq!(response.status().as_u16(), 303, "{path}");
        assert_eq!(location(&response), "/signin", "{path}");
        // the credential stays valid for routes the user may see
        assert!(purge_cookie(&response).is_none(), "{path}");
    }

    let response = app.get_with_token("/details", &token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn nested_route_is_checked_on_direct_navigation(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("user", NOW + 3600);

    // never visits /main first
    let response = app.get_with_token("/main/users", &token).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/signin");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_purge_expired_credential(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("admin", NOW - 10);

    let response = app.get_with_token("/main/dashboard", &token).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/signin");
    let removal = purge_cookie(&response).expect("expired credential should be purged");
    assert!(removal.contains("Max-Age=0"));
    assert!(removal.contains("Path=/"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_purge_malformed_credential(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_with_token("/details", "not-a-jwt").await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/signin");
    assert!(purge_cookie(&response).is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn only_the_canonical_cookie_is_read(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token("admin", NOW + 3600);

    let response = app
        .get_with_cookie("/main/dashboard", "token", &token)
        .await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/signin");
    assert!(purge_cookie(&response).is_none());
}

#[tokio::test]
async fn unauthorized_target_is_configurable() {
    let app = TestApp::with_config(
        Config::new(vec![0u8; 32]).with_unauthorized_redirect("/home"),
    )
    .await;
    let token = app.token("user", NOW + 3600);

    let response = app.get_with_token("/main/dashboard", &token).await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/home");

    // missing credentials still go to sign in
    let response = app.get("/main/dashboard").await;
    assert_eq!(location(&response), "/signin");
}

#[tokio::test]
async fn cookie_name_is_configurable() {
    let app = TestApp::with_config(
        Config::new(vec![0u8; 32]).with_access_cookie_name("session"),
    )
    .await;
    let token = app.token("admin", NOW + 3600);

    let response = app
        .get_with_cookie("/main/dashboard", "session", &token)
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_with_token("/main/dashboard", &token).await;
    assert_eq!(response.status().as_u16(), 303);
}

#[test_context(TestContext)]
#[tokio::test]
async fn issued_cookie_is_accepted_until_it_expires(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let config = &app.config;
    let token = generate_access_token(Some(3), "admin", NOW, config).unwrap();
    let cookie = access_cookie(config.access_cookie_name(), &token, config.token_ttl_seconds());

    let response = app
        .get_with_cookie("/main/dashboard", cookie.name(), cookie.value())
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("set-cookie").is_none());

    // cookie lifetime and token expiry end together
    let max_age = cookie.max_age().unwrap().whole_seconds();
    assert_eq!(max_age, config.token_ttl_seconds());

    let stale = generate_access_token(Some(3), "admin", NOW - max_age, config).unwrap();
    let response = app.get_with_token("/main/dashboard", &stale).await;
    assert_eq!(response.status().as_u16(), 303);
    assert!(purge_cookie(&response).is_some());
}

#[tokio::test]
async fn route_roles_come_from_config() {
    let app = TestApp::with_config(
        Config::new(vec![0u8; 32])
            .with_details_roles("admin".parse::<RoleRequirement>().unwrap())
            .with_admin_roles("admin,clinician".parse::<RoleRequirement>().unwrap()),
    )
    .await;

    let user = app.token("user", NOW + 3600);
    let response = app.get_with_token("/details", &user).await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/signin");

    let clinician = app.token("clinician", NOW + 3600);
    let response = app.get_with_token("/main/users", &clinician).await;
    assert_eq!(response.status().as_u16(), 200);
}
