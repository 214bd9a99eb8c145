//! Key identification for the host's input events.

use serde::{Deserialize, Serialize};

/// A host key name, compared by exact match.
///
/// The host decides the naming scheme ("Z", "F5", "NumPad3", ...);
/// fieldglass only compares the released key against the configured
/// trigger key. Serialized transparently so configs read as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub String);

impl KeyCode {
    /// Create a key code from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyCode {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for KeyCode {
    fn from(name: String) -> Self {
        Self(name)
    }
}
