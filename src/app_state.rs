use std::sync::Arc;

use crate::domain::{Clock, SystemClock, TokenDecoder, TokenVerifier};
use crate::services::{JwtTokenDecoder, RemoteTokenVerifier};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type ConfigType = Arc<Config>;
pub type ClockType = Arc<dyn Clock>;
pub type TokenDecoderType = Arc<dyn TokenDecoder>;
pub type TokenVerifierType = Arc<dyn TokenVerifier>;

#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub clock: ClockType,
    pub token_decoder: TokenDecoderType,
    /// When set, credentials are checked remotely instead of by `token_decoder`.
    pub token_verifier: Option<TokenVerifierType>,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        clock: ClockType,
        token_decoder: TokenDecoderType,
        token_verifier: Option<TokenVerifierType>,
    ) -> Self {
        Self {
            config,
            clock,
            token_decoder,
            token_verifier,
        }
    }

    /// Wall clock, local HS256 decoding, and the remote verifier if a verify
    /// URL is configured.
    pub fn from_config(config: Config) -> Self {
        let token_decoder: TokenDecoderType = Arc::new(JwtTokenDecoder::from_config(&config));
        let token_verifier = config
            .verify_url()
            .map(|url| Arc::new(RemoteTokenVerifier::new(url)) as TokenVerifierType);
        Self::new(
            Arc::new(config),
            Arc::new(SystemClock),
            token_decoder,
            token_verifier,
        )
    }
}
