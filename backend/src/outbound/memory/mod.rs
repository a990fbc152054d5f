//! In-memory adapters for domain ports.

mod user_store;

pub use user_store::{InMemoryUserStore, SEED_USERS};
