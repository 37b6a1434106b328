use bytes::Bytes;
use http::HeaderMap;
use http::Method;

use crate::Result;

/// Request envelope handed to the [`HttpSend`](crate::HttpSend) transport.
///
/// Built fresh for every call by [`Client::build_envelope`](crate::Client::build_envelope)
/// and moved into the transport.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// HTTP method.
    pub method: Method,
    /// Full request uri, host joined with path, without query string.
    pub uri: String,
    /// `Api-Version` and, for authenticated calls, `Api-Key` and `Api-Signature`.
    pub headers: HeaderMap,
    /// Query parameters, appended by the transport.
    pub query: Option<Vec<(String, String)>>,
    /// Request body.
    pub body: Body,
}

impl Envelope {
    /// Whether the body is sent as JSON.
    pub fn json_mode(&self) -> bool {
        matches!(self.body, Body::Json(_))
    }

    /// Whether the body is a multipart file upload.
    pub fn is_file_upload(&self) -> bool {
        matches!(self.body, Body::FormData(_))
    }
}

/// Body of an [`Envelope`].
///
/// The bytes stored here are the bytes that were signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// JSON body, `None` for calls without payload.
    Json(Option<Bytes>),
    /// Multipart form carrying a file upload.
    FormData(FormData),
}

/// Multipart form of a file upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    /// Content of the `filedata` field.
    pub filedata: Bytes,
    /// Filename of the `filedata` part, the transport picks one if unset.
    pub file_name: Option<String>,
}

/// Payload passed to [`Client::request`](crate::Client::request).
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON document, serialized once right before signing.
    Json(serde_json::Value),
    /// Raw bytes: file content, or an already serialized JSON document.
    Bytes(Bytes),
    /// File content together with the filename it is uploaded as.
    File {
        /// Filename sent in the `Content-Disposition` of the part.
        file_name: String,
        /// File content, signed as is.
        content: Bytes,
    },
}

impl Payload {
    /// Create a file payload.
    pub fn file(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Payload::File {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reduce the payload to the bytes that will be signed and sent.
    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            Payload::Json(value) => Ok(Bytes::from(serde_json::to_vec(&value)?)),
            Payload::Bytes(bs) => Ok(bs),
            Payload::File { content, .. } => Ok(content),
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

impl From<Bytes> for Payload {
    fn from(value: Bytes) -> Self {
        Payload::Bytes(value)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(value))
    }
}

impl From<&'static [u8]> for Payload {
    fn from(value: &'static [u8]) -> Self {
        Payload::Bytes(Bytes::from_static(value))
    }
}

/// Per call options of [`Client::request`](crate::Client::request).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Skip credential checks and omit `Api-Key`/`Api-Signature`.
    pub no_auth_headers: bool,
    /// Send the payload as the `filedata` multipart field instead of JSON.
    pub file_upload: bool,
}

impl RequestOptions {
    /// Options for a public endpoint.
    pub fn no_auth() -> Self {
        Self {
            no_auth_headers: true,
            ..Default::default()
        }
    }

    /// Options for a file upload.
    pub fn file_upload() -> Self {
        Self {
            file_upload: true,
            ..Default::default()
        }
    }
}

/// Join host and path with exactly one `/`.
///
/// Trailing slashes of `host` and leading slashes of `path` are collapsed,
/// everything else is kept as is.
pub fn join_uri(host: &str, path: &str) -> String {
    let host = host.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    let mut uri = String::with_capacity(host.len() + path.len() + 1);
    uri.push_str(host);
    uri.push('/');
    uri.push_str(path);
    uri
}
