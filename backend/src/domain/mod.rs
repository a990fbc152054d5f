//! Domain primitives and ports.
//!
//! Purpose: define the user record and the storage contract without any
//! HTTP or framework concerns. Inbound adapters translate these types into
//! responses; outbound adapters implement the ports.
//!
//! Public surface:
//! - User, UserId, UserName, UserDraft: the user record and its parts.
//! - ports::UserStore: the storage contract.

pub mod ports;
pub mod user;

pub use self::user::{User, UserDraft, UserId, UserName, UserValidationError};
