//! Source images: the uploaded originals every rendition is derived from.
//!
//! | operation | params | notes |
//! |-----------|--------|-------|
//! | `sourceimages.list` | `organization` | query `limit`, `offset` |
//! | `sourceimages.get` | `organization`, `hash` | |
//! | `sourceimages.download` | `organization`, `hash` | body is the original file |
//! | `sourceimages.create` | `organization` | payload is the file, see [`Args::file`](crate::Args::file), sent as `filedata` |
//! | `sourceimages.delete` | `organization`, `hash` | |

use http::Method;
use rokka_core::Client;

use crate::{Module, Operation};

/// Build the `sourceimages` module.
pub fn module(client: &Client) -> Module {
    Module::new("sourceimages")
        .with_operation(
            "list",
            Operation::new(client, Method::GET, "sourceimages/{organization}"),
        )
        .with_operation(
            "get",
            Operation::new(client, Method::GET, "sourceimages/{organization}/{hash}"),
        )
        .with_operation(
            "download",
            Operation::new(
                client,
                Method::GET,
                "sourceimages/{organization}/{hash}/download",
            ),
        )
        .with_operation(
            "create",
            Operation::new(client, Method::POST, "sourceimages/{organization}").file_upload(),
        )
        .with_operation(
            "delete",
            Operation::new(client, Method::DELETE, "sourceimages/{organization}/{hash}"),
        )
}
