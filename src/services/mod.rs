// Service exports
pub mod auth;
pub mod firebase;

pub use auth::{AuthClient, AuthError};
pub use firebase::{FirebaseClient, FirebaseError, PublishError, SendError};
