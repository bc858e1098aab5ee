//! One module per API resource, each adding methods to [`crate::ApiClient`].

mod conversations;
mod health;
mod intake;
mod personas;
mod projects;
mod requirements;
