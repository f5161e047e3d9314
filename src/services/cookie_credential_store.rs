use axum_extra::extract::CookieJar;

use crate::domain::CredentialStore;
use crate::utils::cookie_helpers::clear_cookie;

/// Credential store backed by the request's cookies.
///
/// Clearing queues a removal cookie; hand the jar back with [`into_jar`] so
/// the removal reaches the browser.
///
/// [`into_jar`]: CookieCredentialStore::into_jar
pub struct CookieCredentialStore {
    jar: CookieJar,
    name: String,
}

impl CookieCredentialStore {
    pub fn new(jar: CookieJar, name: impl Into<String>) -> Self {
        Self {
            jar,
            name: name.into(),
        }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl CredentialStore for CookieCredentialStore {
    fn get(&self) -> Option<String> {
        self.jar
            .get(&self.name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty())
    }

    fn clear(&mut self) {
        if self.jar.get(&self.name).is_none() {
            return;
        }
        self.jar = self.jar.clone().add(clear_cookie(&self.name, "/"));
    }
}
