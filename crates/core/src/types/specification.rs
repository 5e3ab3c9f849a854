//! Product specification key/value pairs.

use serde::{Deserialize, Serialize};

/// A single specification entry (e.g. `Display` / `6.1-inch OLED`).
///
/// Specifications are stored as an ordered sequence; insertion order is
/// preserved for display. The store layer does not require keys to be
/// unique, the admin form rejects duplicates before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub key: String,
    pub value: String,
}

impl Specification {
    /// Create a specification pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_field_names() {
        let spec = Specification::new("Display", "6.1-inch OLED");
        assert_eq!(
            serde_json::to_string(&spec).expect("serialize"),
            r#"{"key":"Display","value":"6.1-inch OLED"}"#
        );
    }
}
