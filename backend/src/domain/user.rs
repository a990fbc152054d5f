//! User data model.
//!
//! A [`User`] is created by a store, which assigns its [`UserId`] and creation
//! timestamp. Afterwards only the name and age may change.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The name is empty or whitespace.
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// Identifiers start at 1 and are never reused within a store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use user_api::domain::UserId;
    ///
    /// let id = UserId::new(6);
    /// assert_eq!(id.get(), 6);
    /// ```
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Access the raw integer.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    ///
    /// Whitespace-only input counts as empty.
    ///
    /// # Examples
    /// ```
    /// use user_api::domain::{UserName, UserValidationError};
    ///
    /// assert!(UserName::new("Tom").is_ok());
    /// assert_eq!(UserName::new("  "), Err(UserValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Client-supplied user fields, not yet validated.
///
/// Used both as a creation candidate and as an update patch. A missing request
/// body maps to the default draft, whose empty name fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Requested user name.
    pub name: String,
    /// Requested age; the range is not checked.
    pub age: i32,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` and `create_time` never change after construction.
/// - `name` is never empty.
///
/// Serialised with camelCase keys:
/// `{"id":1,"name":"Tom","age":18,"createTime":"2018-05-07T00:00:00Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: UserName,
    age: i32,
    create_time: DateTime<Utc>,
}

impl User {
    /// Construct a user record.
    pub fn new(id: UserId, name: UserName, age: i32, create_time: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            age,
            create_time,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current user name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Current age.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Moment the record was created.
    pub fn create_time(&self) -> DateTime<Utc> {
        self.create_time
    }

    /// Replace the mutable fields, keeping `id` and `create_time`.
    pub fn apply_patch(&mut self, name: UserName, age: i32) {
        self.name = name;
        self.age = age;
    }
}
