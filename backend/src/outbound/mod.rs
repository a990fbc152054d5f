//! Outbound adapters implementing domain ports.
//!
//! Only an in-memory store exists today; records do not survive a restart.

pub mod memory;
