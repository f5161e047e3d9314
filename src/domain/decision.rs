use super::role::Role;

/// The visitor admitted by the gate, handed to the wrapped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject_id: Option<i64>,
    pub role: Role,
}

/// Outcome of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the wrapped view.
    Allow(Principal),
    /// No valid credential; send the visitor to sign in.
    RedirectUnauthenticated,
    /// Valid credential whose role does not satisfy the route.
    RedirectUnauthorized,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}
