//! Rendering operations supported by the server.
//!
//! - `operations.list`: public, no credentials needed.

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

/// Build the `operations` module.
pub fn module(client: &Client) -> Module {
    Module::new("operations").with_operation(
        "list",
        Operation::new(client, Method::GET, "operations").no_auth(),
    )
}
