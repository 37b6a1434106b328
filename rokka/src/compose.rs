//! Module composition.
//!
//! Every API module is a [`ModuleFn`] turning a [`Client`] into a
//! [`Module`]: a name and a set of named [`Operation`]s. [`compose`] builds
//! every module listed in [`MODULES`](crate::apis::MODULES) and merges their
//! operations into one [`Rokka`] registry keyed by `"<module>.<operation>"`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use bytes::Bytes;
use http::Method;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rokka_core::{Client, Config, Context, Error, Payload, RequestOptions, Result};
use serde::de::DeserializeOwned;

use crate::apis::MODULES;

/// Characters kept verbatim in a path param, everything else is escaped so a
/// value always stays a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Constructor of an API module.
pub type ModuleFn = fn(&Client) -> Module;

/// A resource scoped set of operations built from a shared [`Client`].
#[derive(Debug, Clone)]
pub struct Module {
    name: &'static str,
    operations: Vec<(&'static str, Operation)>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            operations: Vec::new(),
        }
    }

    /// Add an operation to this module.
    pub fn with_operation(mut self, name: &'static str, operation: Operation) -> Self {
        self.operations.push((name, operation));
        self
    }

    /// Name of this module.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the operations of this module, in registration order.
    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.iter().map(|(name, _)| *name)
    }
}

/// A single API call bound to a [`Client`].
///
/// `path` is a template like `stacks/{organization}/{name}`, placeholders are
/// filled from the path params of [`Args`].
#[derive(Debug, Clone)]
pub struct Operation {
    client: Client,
    method: Method,
    path: &'static str,
    options: RequestOptions,
}

impl Operation {
    /// Create an authenticated JSON operation.
    pub fn new(client: &Client, method: Method, path: &'static str) -> Self {
        Self {
            client: client.clone(),
            method,
            path,
            options: RequestOptions::default(),
        }
    }

    /// Mark this operation as public, it is sent without auth headers.
    pub fn no_auth(mut self) -> Self {
        self.options.no_auth_headers = true;
        self
    }

    /// Mark this operation as file upload.
    pub fn file_upload(mut self) -> Self {
        self.options.file_upload = true;
        self
    }

    /// HTTP method of this operation.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path template of this operation.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Request options used by this operation.
    pub fn options(&self) -> RequestOptions {
        self.options
    }

    /// Invoke this operation.
    pub async fn call(&self, args: Args) -> Result<http::Response<Bytes>> {
        let path = render_path(self.path, &args.params)?;
        self.client
            .request(
                self.method.clone(),
                &path,
                args.payload,
                args.query,
                self.options,
            )
            .await
    }
}

/// Arguments of an [`Operation`] call.
#[derive(Debug, Clone, Default)]
pub struct Args {
    params: Vec<(String, String)>,
    query: Option<Vec<(String, String)>>,
    payload: Option<Payload>,
}

impl Args {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path param.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Append a query param.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Set the payload.
    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Set a file as payload, uploaded as `file_name`.
    pub fn file(self, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.payload(Payload::file(file_name, content))
    }
}

/// Fill the placeholders of `template`.
///
/// Every placeholder needs a non-empty param and every param must be used.
fn render_path(template: &str, params: &[(String, String)]) -> Result<String> {
    let mut used = vec![false; params.len()];
    let mut path = String::with_capacity(template.len());

    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|i| start + i)
            .ok_or_else(|| Error::request_invalid(format!("unclosed placeholder in `{template}`")))?;
        let name = &rest[start + 1..end];

        let idx = params
            .iter()
            .position(|(k, _)| k == name)
            .ok_or_else(|| {
                Error::request_invalid(format!("missing path param `{name}` for `{template}`"))
            })?;
        let value = &params[idx].1;
        if value.is_empty() {
            return Err(Error::request_invalid(format!(
                "path param `{name}` for `{template}` is empty"
            )));
        }
        used[idx] = true;

        path.push_str(&rest[..start]);
        path.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    if let Some(((name, _), _)) = params.iter().zip(&used).find(|(_, used)| !**used) {
        return Err(Error::request_invalid(format!(
            "unknown path param `{name}` for `{template}`"
        )));
    }

    Ok(path)
}

/// Registry of every operation of every API module.
#[derive(Debug, Clone)]
pub struct Rokka {
    client: Client,
    operations: BTreeMap<String, Operation>,
}

/// Build every module of [`MODULES`](crate::apis::MODULES) and merge their operations.
///
/// # Panics
///
/// Panics if two modules register the same `"<module>.<operation>"` key.
/// The module set is fixed, so this can only be hit by a broken module list.
pub fn compose(client: &Client) -> Rokka {
    compose_modules(client, MODULES)
}

fn compose_modules(client: &Client, modules: &[ModuleFn]) -> Rokka {
    let mut operations = BTreeMap::new();

    for build in modules {
        let module = build(client);
        for (name, operation) in module.operations {
            match operations.entry(format!("{}.{name}", module.name)) {
                Entry::Vacant(e) => {
                    e.insert(operation);
                }
                Entry::Occupied(e) => panic!("operation `{}` is registered twice", e.key()),
            }
        }
    }
    debug!(
        "composed {} operations from {} modules",
        operations.len(),
        modules.len()
    );

    Rokka {
        client: client.clone(),
        operations,
    }
}

impl Rokka {
    /// Create a client from context and config and compose all modules.
    pub fn new(ctx: Context, config: Config) -> Self {
        compose(&Client::new(ctx, config))
    }

    /// The client shared by all operations.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Look up an operation by its `"<module>.<operation>"` key.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// All operation keys, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Invoke the operation registered as `name`.
    pub async fn call(&self, name: &str, args: Args) -> Result<http::Response<Bytes>> {
        let operation = self
            .operation(name)
            .ok_or_else(|| Error::request_invalid(format!("unknown operation `{name}`")))?;
        operation.call(args).await
    }

    /// Invoke the operation registered as `name` and decode its JSON response.
    pub async fn call_json<T: DeserializeOwned>(&self, name: &str, args: Args) -> Result<T> {
        let resp = self.call(name, args).await?;
        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::transport(format!("decode response of `{name}` failed: {e}")).with_source(e)
        })
    }
}
