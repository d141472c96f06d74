//! PrincipalId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum length of a principal in textual form.
const MAX_PRINCIPAL_LEN: usize = 63;

/// A type-safe wrapper for member principals.
///
/// The portal identifies members by a textual principal: dash-separated
/// groups of lowercase alphanumeric characters. Validation happens at
/// construction time so an invalid principal can never reach the API.
///
/// # Example
///
/// ```
/// use portal_mcp_server::domain::PrincipalId;
///
/// let principal = PrincipalId::new("w7x7r-cok77-xa").unwrap();
/// assert_eq!(principal.as_str(), "w7x7r-cok77-xa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Create a new PrincipalId, validating the textual format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Must be at most 63 characters long
    /// - Must consist of groups of lowercase ASCII letters and digits
    ///   separated by single dashes (no leading, trailing, or doubled dash)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPrincipal` for an empty string and
    /// `ValidationError::InvalidPrincipal` for any other malformed input.
    pub fn new(principal: impl Into<String>) -> Result<Self, ValidationError> {
        let principal = principal.into();

        if principal.is_empty() {
            return Err(ValidationError::EmptyPrincipal);
        }

        if !Self::is_valid(&principal) {
            return Err(ValidationError::InvalidPrincipal(principal));
        }

        Ok(Self(principal))
    }

    /// Validate the textual principal format.
    fn is_valid(principal: &str) -> bool {
        if principal.len() > MAX_PRINCIPAL_LEN {
            return false;
        }

        for group in principal.split('-') {
            // Rejects leading/trailing/doubled dashes
            if group.is_empty() {
                return false;
            }

            if !group
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return false;
            }
        }

        true
    }

    /// Get the principal as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PrincipalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PrincipalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PrincipalId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_valid() {
        let principal = PrincipalId::new("w7x7r-cok77-xa").unwrap();
        assert_eq!(principal.as_str(), "w7x7r-cok77-xa");
    }

    #[test]
    fn test_principal_rejects_empty() {
        assert_eq!(PrincipalId::new(""), Err(ValidationError::EmptyPrincipal));
    }

    #[test]
    fn test_principal_validates_format() {
        assert!(PrincipalId::new("abc123").is_ok());
        assert!(PrincipalId::new("2vxsx-fae").is_ok());
        assert!(PrincipalId::new("UPPER-case").is_err());
        assert!(PrincipalId::new("-leading").is_err());
        assert!(PrincipalId::new("trailing-").is_err());
        assert!(PrincipalId::new("double--dash").is_err());
        assert!(PrincipalId::new("with space").is_err());
        assert!(PrincipalId::new("under_score").is_err());
    }

    #[test]
    fn test_principal_rejects_too_long() {
        let long = "a".repeat(MAX_PRINCIPAL_LEN + 1);
        assert!(PrincipalId::new(long).is_err());

        let max = "a".repeat(MAX_PRINCIPAL_LEN);
        assert!(PrincipalId::new(max).is_ok());
    }

    #[test]
    fn test_principal_display() {
        let principal = PrincipalId::new("w7x7r-cok77-xa").unwrap();
        assert_eq!(format!("{}", principal), "w7x7r-cok77-xa");
    }

    #[test]
    fn test_principal_serialization() {
        let principal = PrincipalId::new("w7x7r-cok77-xa").unwrap();
        let json = serde_json::to_string(&principal).unwrap();
        assert_eq!(json, "\"w7x7r-cok77-xa\"");
    }

    #[test]
    fn test_principal_deserialization() {
        let principal: PrincipalId = serde_json::from_str("\"w7x7r-cok77-xa\"").unwrap();
        assert_eq!(principal.as_str(), "w7x7r-cok77-xa");
    }

    #[test]
    fn test_principal_deserialization_empty_fails() {
        let result: Result<PrincipalId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
