use crate::config::db::{ConnectionSettings, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    settings: ConnectionSettings,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            settings: ConnectionSettings::default(),
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_settings(mut self, settings: ConnectionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(profile) = self.db_profile {
            // single entrypoint: connect + migrate + seed
            let conn = bootstrap_db(&profile, &self.settings).await?;
            Ok(AppState::new(conn))
        } else {
            Ok(AppState::new_without_db())
        }
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
