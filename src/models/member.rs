//! Member models: profiles, roles, and directory records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A member's profile as stored by the portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,
}

impl UserProfile {
    /// Create a new profile with required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Access role of a member.
///
/// Serialized lowercase on the wire ("admin", "user", "guest").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Registered member
    User,
    /// Unregistered or read-only caller
    Guest,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Guest
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
            UserRole::Guest => write!(f, "guest"),
        }
    }
}

/// A directory entry pairing a principal with its profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MemberRecord {
    /// Principal of the member in textual form
    pub principal: String,

    /// The member's profile
    pub profile: UserProfile,
}

/// Request payload for registering a new member.
/// This matches the portal API structure: { "profile": { ... } }
#[derive(Debug, Clone, Serialize)]
pub struct RegisterMemberRequest {
    profile: UserProfile,
}

impl RegisterMemberRequest {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

/// Changes object for updating the caller's profile
#[derive(Debug, Clone, Serialize)]
struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

/// Request payload for updating the caller's profile.
/// This matches the portal API structure: { "changes": { ... } }
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    changes: ProfileChanges,
}

impl UpdateProfileRequest {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            changes: ProfileChanges { name, email },
        }
    }
}

impl From<&UserProfile> for UpdateProfileRequest {
    fn from(profile: &UserProfile) -> Self {
        Self::new(
            if profile.name.is_empty() {
                None
            } else {
                Some(profile.name.clone())
            },
            if profile.email.is_empty() {
                None
            } else {
                Some(profile.email.clone())
            },
        )
    }
}

/// Request payload for assigning a member's role.
/// This matches the portal API structure: { "role": "admin" }
#[derive(Debug, Clone, Serialize)]
pub struct AssignRoleRequest {
    role: UserRole,
}

impl AssignRoleRequest {
    pub fn new(role: UserRole) -> Self {
        Self { role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("USER".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("guest".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_user_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&UserRole::Guest).unwrap(), "\"guest\"");
    }

    #[test]
    fn test_user_role_deserialization() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);

        let result: Result<UserRole, _> = serde_json::from_str("\"owner\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Guest.to_string(), "guest");
    }

    #[test]
    fn test_member_record_deserialization() {
        let json = r#"{
            "principal": "w7x7r-cok77-xa",
            "profile": {"name": "Asha Verma", "email": "asha@example.com"}
        }"#;
        let record: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.principal, "w7x7r-cok77-xa");
        assert_eq!(record.profile.name, "Asha Verma");
        assert_eq!(record.profile.email, "asha@example.com");
    }

    #[test]
    fn test_register_member_request_serialization() {
        let request = RegisterMemberRequest::new(UserProfile::new("Asha Verma", "asha@example.com"));
        let json = serde_json::to_string(&request).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["profile"].is_object(), "profile wrapper should be present");
        assert_eq!(value["profile"]["name"].as_str().unwrap(), "Asha Verma");
    }

    #[test]
    fn test_update_profile_request_skips_missing_fields() {
        let request = UpdateProfileRequest::new(Some("Asha Verma".to_string()), None);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("\"name\":\"Asha Verma\""));
        assert!(!json.contains("email"));
    }

    #[test]
    fn test_assign_role_request_serialization() {
        let request = AssignRoleRequest::new(UserRole::Admin);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, "{\"role\":\"admin\"}");
    }
}
