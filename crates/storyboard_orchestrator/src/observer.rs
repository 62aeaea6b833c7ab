//! Progress observers.

use crate::RunState;
use storyboard_core::StoryboardItem;
use tracing::{error, info};

/// Receives run progress as it happens.
///
/// Called on the executor's task between collaborator calls, so
/// implementations should return quickly.
pub trait RunObserver: Send + Sync {
    /// Called after every state transition.
    fn on_state(&self, state: &RunState);

    /// Called after each completed item. `index` is 0-based.
    fn on_item(&self, index: usize, item: &StoryboardItem) {
        let _ = (index, item);
    }
}

/// Observer that reports progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_state(&self, state: &RunState) {
        match state {
            RunState::Idle => {}
            RunState::Running { .. } => {
                if let Some(message) = state.progress_message() {
                    info!("{}", message);
                }
            }
            RunState::Done { total } => info!(total, "Storyboard complete"),
            RunState::Failed { message } => error!(message = %message, "Storyboard failed"),
        }
    }

    fn on_item(&self, index: usize, item: &StoryboardItem) {
        info!(
            scene = index + 1,
            label = %item.scene().label(),
            bytes = item.image().data().len(),
            "Scene rendered"
        );
    }
}
