//! Organizations.
//!
//! - `organizations.get`: params `organization`.
//! - `organizations.create`: params `organization`, payload
//!   `{"billing_email": "...", "display_name": "..."}`.

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

/// Build the `organizations` module.
pub fn module(client: &Client) -> Module {
    Module::new("organizations")
        .with_operation(
            "get",
            Operation::new(client, Method::GET, "organizations/{organization}"),
        )
        .with_operation(
            "create",
            Operation::new(client, Method::PUT, "organizations/{organization}"),
        )
}
