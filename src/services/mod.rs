pub mod cookie_credential_store;
pub mod gate;
pub mod jwt_token_decoder;
pub mod memory_credential_store;
pub mod remote_token_verifier;

pub use cookie_credential_store::*;
pub use gate::*;
pub use jwt_token_decoder::*;
pub use memory_credential_store::*;
pub use remote_token_verifier::*;
