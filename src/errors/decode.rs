use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token rejected by verifier (status {0})")]
    Rejected(u16),

    #[error("verifier unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("verifier did not answer in time")]
    Timeout,
}
