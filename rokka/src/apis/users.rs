//! User registration.
//!
//! - `users.create`: public, payload `{"email": "..."}`. The response carries
//!   the `api_key` and `api_secret` of the new user.

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

/// Build the `users` module.
pub fn module(client: &Client) -> Module {
    Module::new("users").with_operation(
        "create",
        Operation::new(client, Method::POST, "users").no_auth(),
    )
}
