//! Domain ports: the traits adapters implement or call.

mod macros;
mod user_store;

use macros::define_port_error;

pub use user_store::{EMPTY_CANDIDATE_MESSAGE, EMPTY_PATCH_MESSAGE, UserStore, UserStoreError};
