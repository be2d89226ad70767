use std::sync::Arc;

use crate::config::Config;
use crate::grading::GradingEngine;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GradingEngine>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            engine: Arc::new(config.grading_engine()),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<GradingEngine> {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}
