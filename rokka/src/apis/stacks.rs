//! Stacks: named chains of rendering operations.
//!
//! `stacks.create` takes the stack definition as payload, e.g.
//! `{"operations": [{"name": "resize", "options": {"width": 200}}]}`.

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

const STACK: &str = "stacks/{organization}/{name}";

/// Build the `stacks` module.
pub fn module(client: &Client) -> Module {
    Module::new("stacks")
        .with_operation(
            "list",
            Operation::new(client, Method::GET, "stacks/{organization}"),
        )
        .with_operation("get", Operation::new(client, Method::GET, STACK))
        .with_operation("create", Operation::new(client, Method::PUT, STACK))
        .with_operation("delete", Operation::new(client, Method::DELETE, STACK))
}
