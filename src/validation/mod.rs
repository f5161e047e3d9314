pub mod role;

pub use role::is_valid_role_name;
