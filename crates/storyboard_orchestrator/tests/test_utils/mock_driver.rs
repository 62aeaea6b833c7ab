//! Scripted storyboard driver for deterministic tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storyboard_core::{GeneratedImage, StoryboardItem};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardResult};
use storyboard_interface::{ImageSynthesizer, PromptEnhancer, StoryboardDriver};
use storyboard_orchestrator::{RunObserver, RunState};

/// One collaborator call seen by [`MockDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Enhance(String),
    Synthesize(String),
}

/// Driver that echoes its inputs and can fail on a chosen call.
///
/// `enhance(d)` returns `"prompt: d"`; `synthesize(p)` returns PNG bytes of `p`.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_on: Option<(usize, GeminiErrorKind)>,
}

impl MockDriver {
    /// Driver whose calls all succeed.
    pub fn new_success() -> Self {
        Self::default()
    }

    /// Driver whose `call`-th collaborator call (1-based, counting both kinds) fails.
    pub fn new_fail_on(call: usize, kind: GeminiErrorKind) -> Self {
        Self {
            calls: Arc::default(),
            fail_on: Some((call, kind)),
        }
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) -> StoryboardResult<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        match &self.fail_on {
            Some((n, kind)) if *n == calls.len() => Err(GeminiError::new(kind.clone()).into()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PromptEnhancer for MockDriver {
    async fn enhance(&self, description: &str) -> StoryboardResult<String> {
        self.record(Call::Enhance(description.to_string()))?;
        Ok(format!("prompt: {}", description))
    }
}

#[async_trait]
impl ImageSynthesizer for MockDriver {
    async fn synthesize(&self, prompt: &str) -> StoryboardResult<GeneratedImage> {
        self.record(Call::Synthesize(prompt.to_string()))?;
        Ok(GeneratedImage::png(prompt.as_bytes().to_vec()))
    }
}

impl StoryboardDriver for MockDriver {
    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Observer that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    states: Arc<Mutex<Vec<RunState>>>,
    items: Arc<Mutex<Vec<(usize, String)>>>,
}

impl RecordingObserver {
    /// States seen, in order.
    pub fn states(&self) -> Vec<RunState> {
        self.states.lock().unwrap().clone()
    }

    /// `(index, label)` of every completed item, in order.
    pub fn items(&self) -> Vec<(usize, String)> {
        self.items.lock().unwrap().clone()
    }

    /// Progress messages of the running states seen, in order.
    pub fn messages(&self) -> Vec<String> {
        self.states()
            .iter()
            .filter_map(RunState::progress_message)
            .collect()
    }
}

impl RunObserver for RecordingObserver {
    fn on_state(&self, state: &RunState) {
        self.states.lock().unwrap().push(state.clone());
    }

    fn on_item(&self, index: usize, item: &StoryboardItem) {
        self.items
            .lock()
            .unwrap()
            .push((index, item.scene().label().to_string()));
    }
}
