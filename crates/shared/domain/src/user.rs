//! User profile entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MIN_FIELD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Store-assigned identifier of a user profile.
///
/// Crosses the wire only as its canonical string form: `parse` is the one
/// way in and `Display` is the one way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| DomainError::invalid_identifier(raw))
    }

    /// Underlying UUID as stored in the database
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Client-supplied profile fields.
///
/// Carries no identifier; an `id` or `_id` in the payload is dropped on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub username: String,
    pub location: String,
    pub skills: String,
    pub interests: String,
}

impl UserFields {
    /// Check that every field is present and non-empty.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("username", &self.username),
            ("location", &self.location),
            ("skills", &self.skills),
            ("interests", &self.interests),
        ];

        for (name, value) in fields {
            if value.chars().count() < MIN_FIELD_LENGTH {
                return Err(DomainError::validation(format!("{} cannot be empty", name)));
            }
        }

        Ok(())
    }
}

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    /// Unique user identifier
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "3f2b8c1e-6f0a-4d0b-9a52-4c1f5e7d2a10")
    )]
    pub id: UserId,
    #[cfg_attr(feature = "openapi", schema(example = "ferris"))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "Berlin"))]
    pub location: String,
    #[cfg_attr(feature = "openapi", schema(example = "rust, sql"))]
    pub skills: String,
    #[cfg_attr(feature = "openapi", schema(example = "climbing"))]
    pub interests: String,
}

impl UserRecord {
    /// Attach an identifier to a set of fields
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            username: fields.username,
            location: fields.location,
            skills: fields.skills,
            interests: fields.interests,
        }
    }
}

/// Named container for list responses (never a bare top-level array).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserList {
    pub users: Vec<UserRecord>,
}

impl From<Vec<UserRecord>> for UserList {
    fn from(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}
