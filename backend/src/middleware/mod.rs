//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Only tracing lives here.

pub mod trace;

pub use trace::Trace;
