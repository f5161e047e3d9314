use std::collections::BTreeSet;
use std::str::FromStr;

use super::role::Role;

/// What a protected route asks of the visitor's role.
///
/// Routes may name a single role or a set of roles; both shapes are served by
/// the same gate. `Authenticated` admits any principal holding a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    Authenticated,
    Role(Role),
    AnyOf(BTreeSet<Role>),
}

impl RoleRequirement {
    pub fn role(name: &str) -> Result<Self, String> {
        Role::parse(name.to_owned()).map(RoleRequirement::Role)
    }

    pub fn any_of<'a, I>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let roles = names
            .into_iter()
            .map(|name| Role::parse(name.to_owned()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        if roles.is_empty() {
            return Err("role set must not be empty".to_owned());
        }
        Ok(RoleRequirement::AnyOf(roles))
    }

    pub fn is_satisfied_by(&self, role: &Role) -> bool {
        match self {
            RoleRequirement::Authenticated => true,
            RoleRequirement::Role(required) => required == role,
            RoleRequirement::AnyOf(allowed) => allowed.contains(role),
        }
    }
}

impl FromStr for RoleRequirement {
    type Err = String;

    /// `*` admits any principal, `a,b` is a role set and `a` a single role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(RoleRequirement::Authenticated);
        }
        if s.contains(',') {
            return RoleRequirement::any_of(s.split(',').map(str::trim));
        }
        RoleRequirement::role(s)
    }
}
