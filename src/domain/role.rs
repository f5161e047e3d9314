use std::fmt;

use crate::validation::is_valid_role_name;

pub const ADMIN: &str = "admin";
pub const USER: &str = "user";

/// A role tag. Comparison is exact and case sensitive.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct Role(String);

impl Role {
    /// Parse a configured role name.
    pub fn parse(name: String) -> Result<Role, String> {
        match is_valid_role_name(&name) {
            true => Ok(Role(name)),
            false => Err(format!("Role {:?} is not valid", name)),
        }
    }

    pub fn admin() -> Role {
        Role(ADMIN.to_owned())
    }

    pub fn user() -> Role {
        Role(USER.to_owned())
    }

    /// Take a role from a decoded claim verbatim. The claim is authoritative,
    /// so no normalisation happens here.
    pub fn from_claim(role: String) -> Role {
        Role(role)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
