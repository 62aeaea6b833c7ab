//! Sequential storyboard executor.

use crate::{GenerationPhase, RunObserver, RunState, StoryboardSession};
use storyboard_core::{SceneDescriptor, StoryboardItem};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::StoryboardDriver;
use storyboard_script::ScriptParser;
use tracing::{debug, error, info, instrument, warn};

/// Turns a script into storyboard items, one scene at a time.
///
/// Each scene costs exactly two collaborator calls, enhance then synthesize.
/// Scenes are processed in order and never concurrently. Every call to
/// [`execute`](Self::execute) starts from a fresh [`StoryboardSession`].
pub struct StoryboardExecutor<D: StoryboardDriver> {
    driver: D,
    parser: ScriptParser,
    observer: Option<Box<dyn RunObserver>>,
}

impl<D: StoryboardDriver> StoryboardExecutor<D> {
    /// Create an executor using the standard annotation tags.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            parser: ScriptParser::default(),
            observer: None,
        }
    }

    /// Use a parser with a different tag vocabulary.
    pub fn with_parser(mut self, parser: ScriptParser) -> Self {
        self.parser = parser;
        self
    }

    /// Report progress to `observer`.
    pub fn with_observer(mut self, observer: Box<dyn RunObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The driver making collaborator calls.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Parse `script` and render every scene it contains.
    ///
    /// Never returns an error directly: a script without scenes, or a
    /// collaborator failure, yields a session in the `Failed` state.
    #[instrument(
        skip_all,
        fields(provider = self.driver.provider_name(), script_len = script.len())
    )]
    pub async fn execute(&self, script: &str) -> StoryboardSession {
        let scenes = self.parser.parse(script);
        self.execute_scenes(scenes).await
    }

    /// Render already-parsed scenes.
    #[instrument(
        skip_all,
        fields(provider = self.driver.provider_name(), total = scenes.len())
    )]
    pub async fn execute_scenes(&self, scenes: Vec<SceneDescriptor>) -> StoryboardSession {
        let mut session = StoryboardSession::default();
        let total = scenes.len();

        if total == 0 {
            warn!("Script contains no usable scenes");
            session.fail(GenerationError::new(GenerationErrorKind::NoScenes).into());
            self.notify_state(&session);
            return session;
        }

        info!(total, "Starting storyboard run");

        for (index, scene) in scenes.into_iter().enumerate() {
            match self.render_scene(&mut session, index + 1, total, scene).await {
                Ok(item) => {
                    if let Some(observer) = &self.observer {
                        observer.on_item(index, &item);
                    }
                    session.push_item(item);
                }
                Err(e) => {
                    error!(scene = index + 1, total, error = %e, "Scene failed, stopping run");
                    session.fail(e);
                    self.notify_state(&session);
                    return session;
                }
            }
        }

        self.transition(&mut session, RunState::Done { total });
        info!(total, "Storyboard run complete");
        session
    }

    async fn render_scene(
        &self,
        session: &mut StoryboardSession,
        scene_number: usize,
        total: usize,
        scene: SceneDescriptor,
    ) -> StoryboardResult<StoryboardItem> {
        self.transition(
            session,
            RunState::Running {
                scene: scene_number,
                total,
                phase: GenerationPhase::EnhancingPrompt,
            },
        );
        let prompt = self.driver.enhance(scene.description()).await?;
        debug!(scene = scene_number, prompt_len = prompt.len(), "Prompt ready");

        self.transition(
            session,
            RunState::Running {
                scene: scene_number,
                total,
                phase: GenerationPhase::SynthesizingImage,
            },
        );
        let image = self.driver.synthesize(&prompt).await?;

        Ok(StoryboardItem::from_scene(scene, prompt, image))
    }

    fn transition(&self, session: &mut StoryboardSession, state: RunState) {
        session.set_state(state);
        if let Some(message) = session.state().progress_message() {
            debug!("{}", message);
        }
        self.notify_state(session);
    }

    fn notify_state(&self, session: &StoryboardSession) {
        if let Some(observer) = &self.observer {
            observer.on_state(session.state());
        }
    }
}
