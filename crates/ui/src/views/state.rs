use std::sync::Arc;

use dioxus::prelude::*;
use services::TrainerService;
use swar_core::quiz::SessionState;

/// Session state that follows every trainer transition, timer-driven ones included.
pub fn use_session_state(trainer: &Arc<TrainerService>) -> Signal<SessionState> {
    let mut state = use_signal(|| trainer.snapshot());
    let trainer = Arc::clone(trainer);
    use_future(move || {
        let mut updates = trainer.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                state.set(next);
            }
        }
    });
    state
}
