use reqwest::Client;

use crate::domain::{AccessClaims, TokenVerifier, VerifyTokenRequestBody};
use crate::errors::DecodeError;

/// Asks a verify-token endpoint to validate the credential.
///
/// A 2xx answer must carry the decoded claims as JSON. Anything else is a
/// decode failure. The caller bounds the call with a timeout.
#[derive(Clone)]
pub struct RemoteTokenVerifier {
    client: Client,
    url: String,
}

impl RemoteTokenVerifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl TokenVerifier for RemoteTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AccessClaims, DecodeError> {
        let response = self
            .client
            .post(&self.url)
            .json(&VerifyTokenRequestBody { token })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DecodeError::Rejected(status.as_u16()));
        }

        Ok(response.json::<AccessClaims>().await?)
    }
}
