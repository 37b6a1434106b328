// Headers
pub const API_VERSION: &str = "api-version";
pub const API_KEY: &str = "api-key";
pub const API_SIGNATURE: &str = "api-signature";

// Defaults
pub const DEFAULT_HOST: &str = "https://api.rokka.io";
pub const DEFAULT_API_VERSION: u32 = 1;

// Env values used in rokka
pub const ROKKA_API_KEY: &str = "ROKKA_API_KEY";
pub const ROKKA_API_SECRET: &str = "ROKKA_API_SECRET";
pub const ROKKA_HOST: &str = "ROKKA_HOST";
pub const ROKKA_API_VERSION: &str = "ROKKA_API_VERSION";

/// Multipart field carrying uploaded file content.
pub const FILEDATA_FIELD: &str = "filedata";
