pub mod auth;
pub mod config;
pub mod consts;
pub mod cookie_helpers;

pub use config::Config;
pub use consts::*;
pub use cookie_helpers::*;
