use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier type for users. Assigned by the store, starting at 1.
pub type UserId = u64;

/// Longest accepted user name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Highest accepted age.
pub const MAX_AGE: u32 = 150;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload for updating an existing user. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    /// `None`: keep the current age. `Some(None)`: clear it (`"age": null`).
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<Option<u32>>,
    pub is_active: Option<bool>,
}

/// Selects users by activity flag.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}

// Only called for keys present in the input, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UserCreate {
    /// Creates an active user payload without an age.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
            is_active: true,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

impl UserFilter {
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
        }
    }
}
