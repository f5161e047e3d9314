pub mod credential_store;
pub mod token_decoder;

pub use credential_store::*;
pub use token_decoder::*;
