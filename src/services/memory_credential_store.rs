use crate::domain::CredentialStore;

/// In-process credential store. Counts clears so callers can observe purges.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    token: Option<String>,
    clears: usize,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            clears: 0,
        }
    }

    pub fn set(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.clone().filter(|token| !token.is_empty())
    }

    fn clear(&mut self) {
        self.token = None;
        self.clears += 1;
    }
}
