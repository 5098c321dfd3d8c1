use std::sync::Arc;

use services::TrainerService;

/// Services shared with every view. Provided by the composition root (`crates/app`).
#[derive(Clone)]
pub struct AppContext {
    trainer: Arc<TrainerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(trainer: Arc<TrainerService>) -> Self {
        Self { trainer }
    }

    #[must_use]
    pub fn trainer(&self) -> Arc<TrainerService> {
        Arc::clone(&self.trainer)
    }
}

#[must_use]
pub fn build_app_context(trainer: Arc<TrainerService>) -> AppContext {
    AppContext::new(trainer)
}
