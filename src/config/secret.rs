//! API token handling backed by the secrecy crate
//!
//! Both provider credentials live in configuration as [`SecretString`]
//! values: the memory is zeroized on drop and the Debug representation is
//! redacted, so a token can only reach logs or output through an explicit
//! `expose_secret()` call.
//!
//! # Example
//!
//! ```rust
//! use aeris::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("my-api-token".to_string());
//! assert_eq!(token.expose_secret().as_ref(), "my-api-token");
//! println!("{token:?}"); // prints a redacted placeholder
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A token value wrapped for use inside [`Secret`]
///
/// `secrecy` requires the inner type to opt into cloning, debug redaction,
/// and serialization through its marker traits, which plain `String` does
/// not implement. The newtype carries those impls plus zeroize-on-drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// True when the wrapped token is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Protected API token as it appears in configuration structs
pub type SecretString = Secret<SecretValue>;

/// Wraps a token string in a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Wraps an optional token string, preserving `None`
#[inline]
pub fn secret_string_opt(value: Option<String>) -> Option<SecretString> {
    value.map(secret_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("test-token".to_string());
        assert_eq!(secret.expose_secret(), "test-token");
    }

    #[test]
    fn test_secret_string_opt() {
        let secret = secret_string_opt(Some("test-token".to_string()));
        assert_eq!(secret.unwrap().expose_secret(), "test-token");

        assert!(secret_string_opt(None).is_none());
    }

    #[test]
    fn test_empty_check() {
        let empty = secret_string(String::new());
        assert!(empty.expose_secret().is_empty());

        let token = secret_string("x".to_string());
        assert!(!token.expose_secret().is_empty());
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let secret = secret_string("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-data"));
    }

    #[test]
    fn test_round_trips_through_serde() {
        #[derive(Serialize, Deserialize)]
        struct TokenHolder {
            api_token: SecretString,
        }

        let holder = TokenHolder {
            api_token: secret_string("test123".to_string()),
        };

        let json = serde_json::to_string(&holder).unwrap();
        assert!(json.contains("test123"));

        let restored: TokenHolder = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.api_token.expose_secret(), "test123");
    }
}
