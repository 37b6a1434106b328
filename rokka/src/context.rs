use rokka_core::{Context, OsEnv};
use rokka_http_send_reqwest::ReqwestHttpSend;

/// A context sending requests with a default reqwest client and reading
/// the OS environment.
///
/// Use [`Context::with_http_send`] with a custom
/// [`ReqwestHttpSend::new`] to configure timeouts or pooling.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
