use std::env;
use std::time::Duration;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{defaults, env as keys};
use crate::domain::{Role, RoleRequirement};

#[derive(Clone)]
pub struct Config {
    jwt_secret: Vec<u8>,
    access_cookie_name: String,
    access_ttl_seconds: i64,
    signin_path: String,
    unauthorized_redirect: String,
    admin_roles: RoleRequirement,
    details_roles: RoleRequirement,
    verify_url: Option<String>,
    verify_timeout: Duration,
    assets_dir: String,
    listen_addr: String,
}

impl Config {
    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }
    pub fn access_cookie_name(&self) -> &str {
        &self.access_cookie_name
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn signin_path(&self) -> &str {
        &self.signin_path
    }
    pub fn unauthorized_redirect(&self) -> &str {
        &self.unauthorized_redirect
    }
    /// Roles admitted to the admin pages under `/main`.
    pub fn admin_roles(&self) -> &RoleRequirement {
        &self.admin_roles
    }
    /// Roles admitted to the medical intake form.
    pub fn details_roles(&self) -> &RoleRequirement {
        &self.details_roles
    }
    pub fn verify_url(&self) -> Option<&str> {
        self.verify_url.as_deref()
    }
    pub fn verify_timeout(&self) -> Duration {
        self.verify_timeout
    }
    pub fn assets_dir(&self) -> &str {
        &self.assets_dir
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Config with defaults for everything but the signing secret.
    pub fn new(jwt_secret: Vec<u8>) -> Self {
        Self {
            jwt_secret,
            access_cookie_name: defaults::ACCESS_COOKIE_NAME.to_owned(),
            access_ttl_seconds: defaults::ACCESS_TTL_SECONDS,
            signin_path: defaults::SIGNIN_PATH.to_owned(),
            unauthorized_redirect: defaults::SIGNIN_PATH.to_owned(),
            admin_roles: RoleRequirement::Role(Role::admin()),
            details_roles: RoleRequirement::AnyOf([Role::user(), Role::admin()].into()),
            verify_url: None,
            verify_timeout: Duration::from_millis(defaults::VERIFY_TIMEOUT_MS),
            assets_dir: defaults::ASSETS_DIR.to_owned(),
            listen_addr: defaults::LISTEN_ADDR.to_owned(),
        }
    }

    pub fn with_access_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.access_cookie_name = name.into();
        self
    }

    pub fn with_unauthorized_redirect(mut self, path: impl Into<String>) -> Self {
        self.unauthorized_redirect = path.into();
        self
    }

    pub fn with_admin_roles(mut self, roles: RoleRequirement) -> Self {
        self.admin_roles = roles;
        self
    }

    pub fn with_details_roles(mut self, roles: RoleRequirement) -> Self {
        self.details_roles = roles;
        self
    }

    pub fn with_verify_url(mut self, url: impl Into<String>, timeout: Duration) -> Self {
        self.verify_url = Some(url.into());
        self.verify_timeout = timeout;
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let secret_b64 = req_var(keys::JWT_SECRET_B64)?;
        let jwt_secret =
            decode_b64_any(&secret_b64).map_err(|_| ConfigError::Decode(keys::JWT_SECRET_B64))?;
        // HS256 secrets shorter than the hash output are rejected
        if jwt_secret.len() < 32 {
            return Err(ConfigError::WrongLen(
                "JWT_SECRET_B64 must decode to at least 32 bytes",
            ));
        }

        let access_cookie_name = opt_var(keys::ACCESS_COOKIE_NAME)
            .unwrap_or_else(|| defaults::ACCESS_COOKIE_NAME.into());
        if access_cookie_name.is_empty() {
            return Err(ConfigError::Invalid(keys::ACCESS_COOKIE_NAME));
        }

        let access_ttl_seconds = match opt_var(keys::ACCESS_TTL_SECONDS) {
            Some(_) => parse_i64(keys::ACCESS_TTL_SECONDS)?,
            None => defaults::ACCESS_TTL_SECONDS,
        };
        if access_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(keys::ACCESS_TTL_SECONDS));
        }

        let signin_path = path_var(keys::SIGNIN_PATH, defaults::SIGNIN_PATH)?;
        let unauthorized_redirect = path_var(keys::UNAUTHORIZED_REDIRECT, &signin_path)?;

        let admin_roles = roles_var(keys::ADMIN_ROLES, defaults::ADMIN_ROLES)?;
        let details_roles = roles_var(keys::DETAILS_ROLES, defaults::DETAILS_ROLES)?;

        let verify_url = opt_var(keys::TOKEN_VERIFY_URL).filter(|url| !url.is_empty());
        let verify_timeout_ms = match opt_var(keys::TOKEN_VERIFY_TIMEOUT_MS) {
            Some(_) => parse_i64(keys::TOKEN_VERIFY_TIMEOUT_MS)?,
            None => defaults::VERIFY_TIMEOUT_MS as i64,
        };
        let verify_timeout_ms: u64 = verify_timeout_ms
            .try_into()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or(ConfigError::Invalid(keys::TOKEN_VERIFY_TIMEOUT_MS))?;

        let assets_dir = opt_var(keys::ASSETS_DIR).unwrap_or_else(|| defaults::ASSETS_DIR.into());
        let listen_addr =
            opt_var(keys::LISTEN_ADDR).unwrap_or_else(|| defaults::LISTEN_ADDR.into());

        Ok(Self {
            jwt_secret,
            access_cookie_name,
            access_ttl_seconds,
            signin_path,
            unauthorized_redirect,
            admin_roles,
            details_roles,
            verify_url,
            verify_timeout: Duration::from_millis(verify_timeout_ms),
            assets_dir,
            listen_addr,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

// Redirect targets are local absolute paths.
fn path_var(key: &'static str, default: &str) -> Result<String, ConfigError> {
    let path = opt_var(key).unwrap_or_else(|| default.to_owned());
    if !path.starts_with('/') || path.starts_with("//") {
        return Err(ConfigError::Invalid(key));
    }
    Ok(path)
}

// `*`, a single role, or a comma-separated role set.
fn roles_var(key: &'static str, default: &str) -> Result<RoleRequirement, ConfigError> {
    opt_var(key)
        .as_deref()
        .unwrap_or(default)
        .parse()
        .map_err(|_| ConfigError::Invalid(key))
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}
