//! Memberships of users in an organization.
//!
//! Params `organization` and `email`. `memberships.create` takes a payload
//! `{"role": "read" | "write" | "admin"}`.

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

const MEMBERSHIP: &str = "organizations/{organization}/memberships/{email}";

/// Build the `memberships` module.
pub fn module(client: &Client) -> Module {
    Module::new("memberships")
        .with_operation("create", Operation::new(client, Method::PUT, MEMBERSHIP))
        .with_operation("delete", Operation::new(client, Method::DELETE, MEMBERSHIP))
}
