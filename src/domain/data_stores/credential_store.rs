/// Where the session token lives between requests.
///
/// An empty stored value is reported as absent. `clear` on an empty store is
/// a no-op.
pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn clear(&mut self);
}
