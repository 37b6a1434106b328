use crate::constants::*;
use crate::utils::Redact;
use crate::Context;
use log::warn;
use std::fmt::{Debug, Formatter};

/// Config for a rokka client.
///
/// All properties are optional since certain calls don't require
/// credentials. Missing credentials only fail once an authenticated
/// request is attempted.
#[derive(Clone)]
pub struct Config {
    /// API key sent as `Api-Key`.
    pub api_key: Option<String>,
    /// Shared secret used to sign requests.
    pub secret: Option<String>,
    /// Base url all request paths are joined to.
    pub host: String,
    /// Value of the `Api-Version` header.
    pub api_version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            secret: None,
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &Redact::from(&self.api_key))
            .field("secret", &Redact::from(&self.secret))
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    /// Set the api key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the signing secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Override the default host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the default api version.
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Load config from environment variables.
    ///
    /// - `ROKKA_API_KEY`
    /// - `ROKKA_API_SECRET`
    /// - `ROKKA_HOST`, defaults to `https://api.rokka.io`
    /// - `ROKKA_API_VERSION`, defaults to `1`
    pub fn from_env(ctx: &Context) -> Self {
        let api_version = match ctx.env_var(ROKKA_API_VERSION) {
            None => DEFAULT_API_VERSION,
            Some(v) => v.trim().parse().unwrap_or_else(|_| {
                warn!("{ROKKA_API_VERSION} {v:?} is not a valid version, using {DEFAULT_API_VERSION}");
                DEFAULT_API_VERSION
            }),
        };

        Self {
            api_key: ctx.env_var(ROKKA_API_KEY).filter(|v| !v.is_empty()),
            secret: ctx.env_var(ROKKA_API_SECRET).filter(|v| !v.is_empty()),
            host: ctx
                .env_var(ROKKA_HOST)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            api_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticEnv;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert_eq!(cfg.host, "https://api.rokka.io");
        assert_eq!(cfg.api_version, 1);
        assert!(cfg.api_key.is_none());
        assert!(cfg.secret.is_none());
    }

    #[test]
    fn test_from_env() {
        let ctx = ctx_with(&[
            (ROKKA_API_KEY, "key"),
            (ROKKA_API_SECRET, "secret"),
            (ROKKA_HOST, "http://localhost:8080"),
            (ROKKA_API_VERSION, "2"),
        ]);

        let cfg = Config::from_env(&ctx);
        assert_eq!(cfg.api_key.as_deref(), Some("key"));
        assert_eq!(cfg.secret.as_deref(), Some("secret"));
        assert_eq!(cfg.host, "http://localhost:8080");
        assert_eq!(cfg.api_version, 2);
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let ctx = ctx_with(&[(ROKKA_API_KEY, ""), (ROKKA_API_VERSION, "two")]);

        let cfg = Config::from_env(&ctx);
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let cfg = Config::default()
            .with_api_key("my-api-key")
            .with_secret("a-rather-long-shared-secret");

        let output = format!("{cfg:?}");
        assert!(!output.contains("my-api-key"));
        assert!(!output.contains("a-rather-long-shared-secret"));
        assert_eq!(
            output,
            r#"Config { api_key: ***, secret: a-ra***, host: "https://api.rokka.io", api_version: 1 }"#
        );
    }
}
