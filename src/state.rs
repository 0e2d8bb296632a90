use axum::extract::FromRef;

use crate::{
    activities::ActivityStore,
    config::{APIConfig, SharedConfig},
};

/// State built once per process and handed to every service.
#[derive(Clone, Debug)]
pub struct SharedState {
    activities: ActivityStore,
}

impl SharedState {
    pub fn new(config: &SharedConfig) -> Self {
        tracing::debug!(env = %config.env, "seeding activity catalog");
        Self {
            activities: ActivityStore::seeded(),
        }
    }

    pub fn stub() -> Self {
        Self::new(&SharedConfig::stub())
    }

    pub fn activities(&self) -> &ActivityStore {
        &self.activities
    }
}

#[derive(Clone, FromRef, Debug)]
pub struct APIState {
    secrets: APIConfig,
    shared: SharedState,
}

impl APIState {
    pub fn new(secrets: APIConfig, shared: SharedState) -> Self {
        Self { secrets, shared }
    }
}

impl FromRef<APIState> for ActivityStore {
    fn from_ref(app_state: &APIState) -> ActivityStore {
        app_state.shared.activities.clone()
    }
}
