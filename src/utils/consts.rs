pub mod env {
    pub const JWT_SECRET_B64: &str = "JWT_SECRET_B64";
    pub const ACCESS_COOKIE_NAME: &str = "ACCESS_COOKIE_NAME";
    pub const ACCESS_TTL_SECONDS: &str = "ACCESS_TTL_SECONDS";
    pub const SIGNIN_PATH: &str = "SIGNIN_PATH";
    pub const UNAUTHORIZED_REDIRECT: &str = "UNAUTHORIZED_REDIRECT";
    pub const ADMIN_ROLES: &str = "ADMIN_ROLES";
    pub const DETAILS_ROLES: &str = "DETAILS_ROLES";
    pub const TOKEN_VERIFY_URL: &str = "TOKEN_VERIFY_URL";
    pub const TOKEN_VERIFY_TIMEOUT_MS: &str = "TOKEN_VERIFY_TIMEOUT_MS";
    pub const ASSETS_DIR: &str = "ASSETS_DIR";
    pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
}

pub mod defaults {
    /// The one cookie name the app reads and clears.
    pub const ACCESS_COOKIE_NAME: &str = "access_token";
    pub const ACCESS_TTL_SECONDS: i64 = 3600;
    pub const SIGNIN_PATH: &str = "/signin";
    pub const ADMIN_ROLES: &str = "admin";
    pub const DETAILS_ROLES: &str = "user,admin";
    pub const VERIFY_TIMEOUT_MS: u64 = 2000;
    pub const ASSETS_DIR: &str = "assets";
    pub const LISTEN_ADDR: &str = "0.0.0.0:3000";
}
