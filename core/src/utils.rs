//! Utility functions and types.

use std::fmt::Debug;

/// Hides a credential in `Debug` output.
///
/// - Absent or empty values print as `<unset>`, so a missing credential stays
///   visible in logs.
/// - Values shorter than 16 characters are fully masked.
/// - Longer values keep their first four characters, enough to tell two api
///   keys apart.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            None | Some("") => f.write_str("<unset>"),
            Some(v) if v.chars().count() < 16 => f.write_str("***"),
            Some(v) => {
                let prefix: String = v.chars().take(4).collect();
                write!(f, "{prefix}***")
            }
        }
    }
}
