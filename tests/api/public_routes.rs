use crate::helpers::TestContext;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn public_pages_need_no_credential(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    for path in [
        "/",
        "/home",
        "/contact",
        "/signin",
        "/signup",
        "/forgotpassword",
        "/resetpassword",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "{path}");
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn public_pages_leave_bad_credentials_alone(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_with_token("/home", "not-a-jwt").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("set-cookie").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn static_assets_are_served(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get("/robots.txt").await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get("/no-such-file.css").await;
    assert_eq!(response.status().as_u16(), 404);
}
