//! Result of one storyboard run.

use crate::RunState;
use derive_getters::Getters;
use storyboard_core::StoryboardItem;
use storyboard_error::{StoryboardError, StoryboardResult};

/// Final state, finished items, and the error that stopped the run (if any).
///
/// Items are in scene order. On failure they hold every scene completed
/// before the failing one.
#[derive(Debug, Default, Getters)]
pub struct StoryboardSession {
    /// Where the run ended up
    state: RunState,
    /// Completed items, in scene order
    items: Vec<StoryboardItem>,
    /// The error behind a `Failed` state
    error: Option<StoryboardError>,
}

impl StoryboardSession {
    /// Whether every scene produced an item.
    pub fn is_success(&self) -> bool {
        matches!(self.state, RunState::Done { .. })
    }

    /// Split into items and the stopping error, if any.
    pub fn into_parts(self) -> (Vec<StoryboardItem>, Option<StoryboardError>) {
        (self.items, self.error)
    }

    /// Items on success, otherwise the error that stopped the run.
    ///
    /// Partial items are discarded; use [`into_parts`](Self::into_parts) to keep them.
    pub fn into_result(self) -> StoryboardResult<Vec<StoryboardItem>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.items),
        }
    }

    pub(crate) fn set_state(&mut self, state: RunState) {
        self.state = state;
    }

    pub(crate) fn push_item(&mut self, item: StoryboardItem) {
        self.items.push(item);
    }

    pub(crate) fn fail(&mut self, error: StoryboardError) {
        self.state = RunState::Failed {
            message: error.user_message(),
        };
        self.error = Some(error);
    }
}
