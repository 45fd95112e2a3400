use std::fmt;
use std::sync::Arc;

use crate::auth::service::AuthorizationService;
use crate::users::UserDirectory;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    /// Introspection and UserInfo are delegated here.
    pub authorization: Arc<dyn AuthorizationService>,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(authorization: Arc<dyn AuthorizationService>, users: UserDirectory) -> Self {
        Self {
            authorization,
            users: Arc::new(users),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}
