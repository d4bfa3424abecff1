use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Client-side key of a record that has no server identifier yet.
///
/// Used only for list keying and edit targeting in the UI; never serialized
/// into a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientKey(String);

impl ClientKey {
    /// Generate a fresh key (UUID v4)
    pub fn generate() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientKey {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produce a session-unique identifier string
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<ClientKey> = (0..1000).map(|_| ClientKey::generate()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_new_id_is_uuid() {
        let id = new_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
