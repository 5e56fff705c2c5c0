//! Access to the credential store.

mod user_client;

#[cfg(any(test, feature = "test-utils"))]
pub use user_client::MockUserServiceClient;
pub use user_client::{LocalUserClient, UserServiceClient};
