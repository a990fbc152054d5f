//! In-memory user CRUD service.
//!
//! The crate is laid out as ports and adapters: [`domain`] holds the user
//! model and the [`domain::ports::UserStore`] port, [`outbound`] the
//! in-memory store, and [`inbound`] the Actix HTTP adapter. [`server`] wires
//! them into an application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
