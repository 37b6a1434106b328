//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Digest;
use sha2::Sha256;

/// Hex encoded SHA256 hash.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    hex_hmac_sha256_parts(key, &[content])
}

fn hex_hmac_sha256_parts(key: &[u8], parts: &[&[u8]]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    for part in parts {
        h.update(part);
    }

    hex::encode(h.finalize().into_bytes())
}

/// Compute the `Api-Signature` of a request.
///
/// The message is the full request uri (without query string) directly
/// followed by the exact body bytes. An absent payload signs the uri alone.
///
/// ```
/// use rokka_core::hash::signature;
///
/// let a = signature("secret", "https://api.rokka.io/stacks/acme", None);
/// let b = signature("secret", "https://api.rokka.io/stacks/acme", Some(&b""[..]));
/// assert_eq!(a, b);
/// ```
pub fn signature(secret: &str, uri: &str, payload: Option<&[u8]>) -> String {
    hex_hmac_sha256_parts(
        secret.as_bytes(),
        &[uri.as_bytes(), payload.unwrap_or_default()],
    )
}
