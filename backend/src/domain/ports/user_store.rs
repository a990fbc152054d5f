//! Driven port for user record storage.
//!
//! Inbound adapters call this port to create, read, update, delete, and list
//! users. Implementations own their synchronisation; every method is
//! individually atomic and never suspends.

use super::define_port_error;
use crate::domain::{User, UserDraft, UserId};

/// Message reported when a creation candidate lacks a name.
pub const EMPTY_CANDIDATE_MESSAGE: &str = "user or username is empty";
/// Message reported when an update patch lacks a name.
pub const EMPTY_PATCH_MESSAGE: &str = "update payload or username is empty";

define_port_error! {
    /// Failures raised by [`UserStore`] implementations.
    pub enum UserStoreError {
        /// A required field is missing or empty.
        Validation {
            /// Client-facing reason.
            message: String,
        } => "{message}",
        /// No record exists for the requested identifier.
        NotFound {
            /// Identifier that was looked up.
            id: UserId,
        } => "user not found",
        /// Every identifier has been handed out.
        IdsExhausted => "user id space exhausted",
        /// The backing storage cannot serve requests.
        Unavailable {
            /// Underlying cause, kept out of client responses.
            message: String,
        } => "user store unavailable: {message}",
    }
}

/// Shared repository of user records.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use user_api::domain::ports::UserStore;
/// use user_api::domain::{UserDraft, UserId};
/// use user_api::outbound::memory::InMemoryUserStore;
///
/// let store = InMemoryUserStore::seeded(Arc::new(DefaultClock)).expect("seed users");
/// let id = store.create(UserDraft::new("Ann", 30)).expect("create user");
/// assert_eq!(id, UserId::new(6));
/// ```
pub trait UserStore: Send + Sync {
    /// Insert a new user and return its freshly assigned identifier.
    ///
    /// # Errors
    /// [`UserStoreError::Validation`] when the candidate name is empty; the
    /// store is left untouched in that case.
    fn create(&self, candidate: UserDraft) -> Result<UserId, UserStoreError>;

    /// Fetch a user by identifier.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when no record has `id`.
    fn get(&self, id: UserId) -> Result<User, UserStoreError>;

    /// Replace the name and age of an existing user.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when `id` is absent, checked before
    /// [`UserStoreError::Validation`] for an empty patch name.
    fn update(&self, id: UserId, patch: UserDraft) -> Result<User, UserStoreError>;

    /// Remove a user and return the removed identifier.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when `id` is absent.
    fn delete(&self, id: UserId) -> Result<UserId, UserStoreError>;

    /// Snapshot every stored user.
    fn list(&self) -> Result<Vec<User>, UserStoreError>;
}
