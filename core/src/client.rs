use std::sync::Arc;

use bytes::Bytes;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use log::debug;
use log::log_enabled;
use log::Level;

use crate::constants::*;
use crate::hash::{hex_sha256, signature};
use crate::request::join_uri;
use crate::{Body, Config, Context, CredentialField, Envelope, Error, FormData, Payload};
use crate::{RequestOptions, Result};

/// Client is the signed request primitive every API module is built on.
///
/// It holds an immutable [`Config`] and the [`Context`] whose transport
/// sends the envelopes. Cloning is cheap and all clones share the same
/// config, so clients with different credentials can coexist.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    config: Arc<Config>,
}

impl Client {
    /// Create a new client.
    ///
    /// An empty host or an api version of `0` falls back to the defaults.
    pub fn new(ctx: Context, mut config: Config) -> Self {
        if config.host.is_empty() {
            config.host = DEFAULT_HOST.to_string();
        }
        if config.api_version == 0 {
            config.api_version = DEFAULT_API_VERSION;
        }

        Self {
            ctx,
            config: Arc::new(config),
        }
    }

    /// The config this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The context used to send requests.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Send a request to `path` below the configured host.
    ///
    /// Fails with [`ErrorKind::MissingCredential`](crate::ErrorKind::MissingCredential)
    /// before the transport is touched if the call needs authentication and
    /// `api_key` or `secret` is not configured. Whatever the transport
    /// returns, response or error, is returned unchanged.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
        query: Option<Vec<(String, String)>>,
        options: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let envelope = self.build_envelope(method, path, payload, query, options)?;
        debug!(
            "sending {} {} (auth: {}, file upload: {})",
            envelope.method,
            envelope.uri,
            !options.no_auth_headers,
            envelope.is_file_upload()
        );

        self.ctx.http_send(envelope).await
    }

    /// Assemble the envelope [`Client::request`] would send.
    pub fn build_envelope(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
        query: Option<Vec<(String, String)>>,
        options: RequestOptions,
    ) -> Result<Envelope> {
        let uri = join_uri(&self.config.host, path);

        let mut headers = HeaderMap::new();
        headers.insert(API_VERSION, HeaderValue::from(self.config.api_version));

        let credentials = if options.no_auth_headers {
            None
        } else {
            Some(self.credentials()?)
        };

        // The payload is reduced to bytes once, these bytes are signed and sent.
        let (body, file_name) = match payload {
            None => (None, None),
            Some(Payload::File { file_name, content }) => (Some(content), Some(file_name)),
            Some(payload) => (Some(payload.into_bytes()?), None),
        };

        if let Some((api_key, secret)) = credentials {
            let signature = signature(secret, &uri, body.as_deref());
            if log_enabled!(Level::Debug) {
                if let Some(bs) = &body {
                    debug!("signing {uri} with payload sha256 {}", hex_sha256(bs));
                }
            }

            headers.insert(API_KEY, {
                let mut value: HeaderValue = api_key.parse()?;
                value.set_sensitive(true);
                value
            });
            headers.insert(API_SIGNATURE, {
                let mut value: HeaderValue = signature.parse()?;
                value.set_sensitive(true);
                value
            });
        }

        let body = if options.file_upload {
            Body::FormData(FormData {
                filedata: body.unwrap_or_default(),
                file_name,
            })
        } else {
            Body::Json(body)
        };

        Ok(Envelope {
            method,
            uri,
            headers,
            query,
            body,
        })
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing_credential(CredentialField::ApiKey))?;
        let secret = self
            .config
            .secret
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing_credential(CredentialField::Secret))?;

        Ok((api_key, secret))
    }
}
