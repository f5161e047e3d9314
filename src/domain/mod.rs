pub mod access_claims;
pub mod clock;
pub mod data_stores;
pub mod decision;
pub mod role;
pub mod role_requirement;
pub mod verify_token_request;

pub use access_claims::*;
pub use clock::*;
pub use data_stores::*;
pub use decision::*;
pub use role::Role;
pub use role_requirement::*;
pub use verify_token_request::*;
