//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the [`UserStore`] port and stay testable with any implementation.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User persistence port.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Wrap a user store handle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use user_api::inbound::http::state::HttpState;
    /// use user_api::outbound::memory::InMemoryUserStore;
    ///
    /// let store = InMemoryUserStore::seeded(Arc::new(DefaultClock)).expect("seed users");
    /// let state = HttpState::new(Arc::new(store));
    /// assert_eq!(state.users.list().expect("list").len(), 5);
    /// ```
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
