//! Process-local [`UserStore`] backed by a lock-guarded map.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{EMPTY_CANDIDATE_MESSAGE, EMPTY_PATCH_MESSAGE, UserStore, UserStoreError};
use crate::domain::{User, UserDraft, UserId, UserName};

/// Users present in a freshly seeded store, in id order.
pub const SEED_USERS: [(&str, i32); 5] = [
    ("Tom", 18),
    ("Jack", 20),
    ("Marry", 24),
    ("Tim", 22),
    ("Dick", 28),
];

const FIRST_ID: u32 = 1;

/// In-memory user store.
///
/// Records live in a `RwLock<BTreeMap<..>>`, so readers clone whole records
/// and never see a half-applied update. Identifiers come from an atomic
/// counter that is only ever incremented; deleting a user does not free its
/// id.
pub struct InMemoryUserStore {
    records: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicU32,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU32::new(FIRST_ID),
            clock,
        }
    }

    /// Create a store holding the [`SEED_USERS`] with ids `1..=5`.
    ///
    /// All seeds share one creation timestamp taken when seeding starts.
    ///
    /// # Errors
    /// Returns [`UserStoreError::Unavailable`] if a seed entry is invalid.
    pub fn seeded(clock: Arc<dyn Clock>) -> Result<Self, UserStoreError> {
        let store = Self::new(clock);
        let seeded_at = store.clock.utc();
        {
            let mut records = store.write_records()?;
            for (name, age) in SEED_USERS {
                let name = UserName::new(name).map_err(|err| {
                    UserStoreError::unavailable(format!("invalid seed user: {err}"))
                })?;
                let id = store.allocate_id()?;
                records.insert(id, User::new(id, name, age, seeded_at));
            }
        }
        info!(count = SEED_USERS.len(), "seeded user store");
        Ok(store)
    }

    fn allocate_id(&self) -> Result<UserId, UserStoreError> {
        // Uniqueness only needs the read-modify-write to be atomic.
        self.next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map(UserId::new)
            .map_err(|_| UserStoreError::IdsExhausted)
    }

    fn read_records(&self) -> Result<RwLockReadGuard<'_, BTreeMap<UserId, User>>, UserStoreError> {
        self.records
            .read()
            .map_err(|_| UserStoreError::unavailable("user records lock poisoned"))
    }

    fn write_records(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<UserId, User>>, UserStoreError> {
        self.records
            .write()
            .map_err(|_| UserStoreError::unavailable("user records lock poisoned"))
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, candidate: UserDraft) -> Result<UserId, UserStoreError> {
        let UserDraft { name, age } = candidate;
        let name =
            UserName::new(name).map_err(|_| UserStoreError::validation(EMPTY_CANDIDATE_MESSAGE))?;

        let mut records = self.write_records()?;
        let id = self.allocate_id()?;
        records.insert(id, User::new(id, name, age, self.clock.utc()));
        debug!(user_id = %id, "user created");
        Ok(id)
    }

    fn get(&self, id: UserId) -> Result<User, UserStoreError> {
        self.read_records()?
            .get(&id)
            .cloned()
            .ok_or_else(|| UserStoreError::not_found(id))
    }

    fn update(&self, id: UserId, patch: UserDraft) -> Result<User, UserStoreError> {
        let mut records = self.write_records()?;
        let user = records
            .get_mut(&id)
            .ok_or_else(|| UserStoreError::not_found(id))?;

        let UserDraft { name, age } = patch;
        let name =
            UserName::new(name).map_err(|_| UserStoreError::validation(EMPTY_PATCH_MESSAGE))?;
        user.apply_patch(name, age);
        debug!(user_id = %id, "user updated");
        Ok(user.clone())
    }

    fn delete(&self, id: UserId) -> Result<UserId, UserStoreError> {
        self.write_records()?
            .remove(&id)
            .map(|removed| {
                debug!(user_id = %id, "user deleted");
                removed.id()
            })
            .ok_or_else(|| UserStoreError::not_found(id))
    }

    fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.read_records()?.values().cloned().collect())
    }
}
