//! Resource-specific clients wrapping each actor's [`ResourceClient`](resource_framework::ResourceClient).
//!
//! Every client maps [`FrameworkError`](resource_framework::FrameworkError) back into its
//! resource's error type, so domain failures raised inside the actor reach callers intact.

pub mod credential_client;
pub mod custom_client;
pub mod group_client;
pub mod user_client;

pub use credential_client::CredentialClient;
pub use custom_client::CustomResourceClient;
pub use group_client::GroupClient;
pub use user_client::UserClient;
