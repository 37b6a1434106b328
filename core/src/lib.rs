//! Core components for signed rokka API requests.
//!
//! This crate provides the signed request primitive the rokka API modules
//! are built on.
//!
//! ## Overview
//!
//! - **Config**: credentials, host and api version, immutable once a client is built
//! - **Signature**: [`hash::signature`], a hex encoded HMAC-SHA256 over uri and body
//! - **Client**: assembles the [`Envelope`] of a call and hands it to the transport
//! - **Context**: a container that holds the [`HttpSend`] transport and [`Env`] access
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use rokka_core::{Client, Config, Context, Envelope, HttpSend, RequestOptions, Result};
//!
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, req: Envelope) -> Result<http::Response<Bytes>> {
//!         // Put the envelope on the wire here
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! let config = Config::default()
//!     .with_api_key("apikey")
//!     .with_secret("secret");
//!
//! let client = Client::new(ctx, config);
//! let resp = client
//!     .request(http::Method::GET, "stacks/acme", None, None, RequestOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod constants;

mod error;
pub use error::{CredentialField, Error, ErrorKind, Result};
mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod config;
pub use config::Config;
mod request;
pub use request::{join_uri, Body, Envelope, FormData, Payload, RequestOptions};
mod client;
pub use client::Client;

/// Multipart field name carrying uploaded file content.
pub use constants::FILEDATA_FIELD;
