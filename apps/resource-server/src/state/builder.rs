use std::sync::Arc;

use crate::auth::service::AuthorizationService;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::users::UserDirectory;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    authorization: Option<Arc<dyn AuthorizationService>>,
    users: UserDirectory,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            authorization: None,
            users: UserDirectory::with_dummy_users(),
        }
    }

    pub fn with_authorization(mut self, service: Arc<dyn AuthorizationService>) -> Self {
        self.authorization = Some(service);
        self
    }

    pub fn with_users(mut self, users: UserDirectory) -> Self {
        self.users = users;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let authorization = self
            .authorization
            .ok_or_else(|| AppError::config("No authorization service configured"))?;
        Ok(AppState::new(authorization, self.users))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
