//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Request};
use rokka_core::{Body, Envelope, Error, HttpSend, Result, FILEDATA_FIELD};

/// ReqwestHttpSend sends envelopes with a [`reqwest::Client`].
///
/// - JSON bodies are sent as is with `Content-Type: application/json`.
/// - File uploads are sent as `multipart/form-data` with a `filedata` part,
///   named after the payload's filename or `filedata` if there is none.
/// - Non-2xx responses are returned as transport errors.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// Timeouts and connection pooling are configured on the client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn build_request(&self, req: Envelope) -> Result<Request> {
        let mut builder = self.client.request(req.method, &req.uri).headers(req.headers);
        if let Some(query) = &req.query {
            builder = builder.query(query);
        }

        builder = match req.body {
            Body::Json(None) => builder,
            Body::Json(Some(bs)) => builder.header(CONTENT_TYPE, "application/json").body(bs),
            Body::FormData(form) => {
                // Without a filename the part is not treated as an uploaded file.
                let file_name = form.file_name.unwrap_or_else(|| FILEDATA_FIELD.to_string());
                let part = Part::bytes(form.filedata.to_vec()).file_name(file_name);
                builder.multipart(Form::new().part(FILEDATA_FIELD, part))
            }
        };

        builder
            .build()
            .map_err(|e| Error::request_invalid(format!("build request failed: {e}")).with_source(e))
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: Envelope) -> Result<http::Response<Bytes>> {
        let req = self.build_request(req)?;
        let (method, url) = (req.method().clone(), req.url().clone());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(format!("send {method} {url} failed: {e}")).with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let bs = resp.bytes().await.map_err(|e| {
            Error::transport(format!("read response of {method} {url} failed: {e}")).with_source(e)
        })?;
        debug!("{method} {url} responded {status} with {} bytes", bs.len());

        if !status.is_success() {
            return Err(Error::transport(format!(
                "{method} {url} responded {status}: {}",
                String::from_utf8_lossy(&bs)
            )));
        }

        let mut resp = http::Response::new(bs);
        *resp.status_mut() = status;
        *resp.headers_mut() = headers;
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, Method};
    use pretty_assertions::assert_eq;
    use rokka_core::{ErrorKind, FormData};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn envelope(uri: &str, body: Body) -> Envelope {
        let mut headers = HeaderMap::new();
        headers.insert("api-version", HeaderValue::from(1u32));
        Envelope {
            method: Method::POST,
            uri: uri.to_string(),
            headers,
            query: Some(vec![("limit".to_string(), "10".to_string())]),
            body,
        }
    }

    #[test]
    fn test_build_json_request() -> Result<()> {
        let body = Bytes::from_static(br#"{"a":1}"#);
        let req = ReqwestHttpSend::default().build_request(envelope(
            "https://api.rokka.io/stacks/acme",
            Body::Json(Some(body.clone())),
        ))?;

        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.url().as_str(), "https://api.rokka.io/stacks/acme?limit=10");
        assert_eq!(req.headers()["api-version"], "1");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&body[..]));
        Ok(())
    }

    #[test]
    fn test_build_request_without_body() -> Result<()> {
        let req = ReqwestHttpSend::default()
            .build_request(envelope("https://api.rokka.io/operations", Body::Json(None)))?;

        assert!(req.body().is_none());
        assert!(req.headers().get(CONTENT_TYPE).is_none());
        Ok(())
    }

    #[test]
    fn test_build_multipart_request() -> Result<()> {
        let req = ReqwestHttpSend::default().build_request(envelope(
            "https://api.rokka.io/sourceimages/acme",
            Body::FormData(FormData {
                filedata: Bytes::from_static(b"GIF89a"),
                file_name: None,
            }),
        ))?;

        let content_type = req.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        Ok(())
    }

    #[test]
    fn test_build_invalid_uri() {
        let err = ReqwestHttpSend::default()
            .build_request(envelope("not a uri", Body::Json(None)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    /// Serve a single canned response on a local port.
    ///
    /// The handle resolves to the raw request that was received.
    async fn serve_once(response: &'static str) -> (String, JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let received = read_request(&mut stream).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            received
        });
        (format!("http://{addr}"), handle)
    }

    /// Read head and body of one request, the body is delimited by
    /// `Content-Length` or by the last chunk.
    async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
        let mut received = Vec::new();
        let mut buf = [0; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                return received;
            }
            received.extend_from_slice(&buf[..n]);

            let Some(head_end) = find(&received, b"\r\n\r\n").map(|i| i + 4) else {
                continue;
            };
            let head = String::from_utf8_lossy(&received[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok());

            let complete = match content_length {
                Some(len) => received.len() >= head_end + len,
                None if head.contains("transfer-encoding: chunked") => {
                    received.ends_with(b"0\r\n\r\n")
                }
                None => true,
            };
            if complete {
                return received;
            }
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[tokio::test]
    async fn test_http_send_success() -> Result<()> {
        let (host, _) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;

        let resp = ReqwestHttpSend::default()
            .http_send(envelope(&format!("{host}/operations"), Body::Json(None)))
            .await?;

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(resp.body().as_ref(), b"{}");
        Ok(())
    }

    #[tokio::test]
    async fn test_http_send_non_success_status() {
        let (host, _) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
        )
        .await;

        let err = ReqwestHttpSend::default()
            .http_send(envelope(&format!("{host}/stacks/acme/none"), Body::Json(None)))
            .await
            .unwrap_err();

        assert!(err.is_transport_error());
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_http_send_file_upload_carries_file_name() -> Result<()> {
        let (host, received) = serve_once(
            "HTTP/1.1 201 Created\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;

        let upload = envelope(
            &format!("{host}/sourceimages/acme"),
            Body::FormData(FormData {
                filedata: Bytes::from_static(b"GIF89a"),
                file_name: Some("cat.gif".to_string()),
            }),
        );
        let resp = ReqwestHttpSend::default().http_send(upload).await?;
        assert_eq!(resp.status(), http::StatusCode::CREATED);

        let received = String::from_utf8_lossy(&received.await.unwrap()).into_owned();
        assert!(received.starts_with("POST /sourceimages/acme?limit=10 HTTP/1.1\r\n"));
        assert!(
            received.contains(r#"Content-Disposition: form-data; name="filedata"; filename="cat.gif""#),
            "{received}"
        );
        assert!(received.contains("GIF89a"));
        Ok(())
    }
}
