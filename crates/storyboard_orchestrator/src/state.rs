//! Run state machine.

use serde::{Deserialize, Serialize};

/// Step of a scene currently being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// Waiting on the prompt enhancer
    #[display("Creating image prompt...")]
    EnhancingPrompt,
    /// Waiting on the image synthesizer
    #[display("Creating image...")]
    SynthesizingImage,
}

/// Where a storyboard run stands.
///
/// ```text
/// Idle → Running { scene, total, phase } → Done { total }
///                                        ↘ Failed { message }
/// ```
///
/// # Examples
///
/// ```
/// use storyboard_orchestrator::{GenerationPhase, RunState};
///
/// let state = RunState::Running {
///     scene: 2,
///     total: 7,
///     phase: GenerationPhase::SynthesizingImage,
/// };
/// assert_eq!(
///     state.progress_message().as_deref(),
///     Some("Generating scene 2/7: Creating image...")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunState {
    /// Nothing started yet
    #[default]
    Idle,
    /// Working on scene `scene` (1-based) of `total`
    Running {
        /// 1-based index of the current scene
        scene: usize,
        /// Number of scenes in the run
        total: usize,
        /// Step in progress
        phase: GenerationPhase,
    },
    /// Every scene produced an item
    Done {
        /// Number of items produced
        total: usize,
    },
    /// The run stopped early
    Failed {
        /// Message to show whoever started the run
        message: String,
    },
}

impl RunState {
    /// Progress line for a running state, `None` otherwise.
    pub fn progress_message(&self) -> Option<String> {
        match self {
            Self::Running {
                scene,
                total,
                phase,
            } => Some(format!("Generating scene {}/{}: {}", scene, total, phase)),
            _ => None,
        }
    }

    /// Whether a collaborator call is underway.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Whether the run has reached `Done` or `Failed`.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(
            GenerationPhase::EnhancingPrompt.to_string(),
            "Creating image prompt..."
        );
        assert_eq!(
            GenerationPhase::SynthesizingImage.to_string(),
            "Creating image..."
        );
    }

    #[test]
    fn test_progress_message_only_while_running() {
        let running = RunState::Running {
            scene: 1,
            total: 3,
            phase: GenerationPhase::EnhancingPrompt,
        };
        assert_eq!(
            running.progress_message().as_deref(),
            Some("Generating scene 1/3: Creating image prompt...")
        );
        assert!(running.is_running());
        assert!(!running.is_finished());

        assert_eq!(RunState::Idle.progress_message(), None);
        assert_eq!(RunState::Done { total: 3 }.progress_message(), None);
        assert!(RunState::Done { total: 3 }.is_finished());
        assert!(
            RunState::Failed {
                message: "boom".into()
            }
            .is_finished()
        );
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let json = serde_json::to_value(RunState::Running {
            scene: 2,
            total: 5,
            phase: GenerationPhase::SynthesizingImage,
        })
        .unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["phase"], "synthesizing_image");
        assert_eq!(json["scene"], 2);
    }
}
