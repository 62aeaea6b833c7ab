//! Storyboard executor tests using a scripted driver.

mod test_utils;

use std::sync::Arc;

use storyboard_error::{
    GeminiErrorKind, GenerationErrorKind, NO_SCENES_GUIDANCE, StoryboardErrorKind,
};
use storyboard_orchestrator::{GenerationPhase, RunState, StoryboardExecutor};
use storyboard_script::{SAMPLE_SCRIPT, ScriptParser, parse_script};
use test_utils::{Call, MockDriver, RecordingObserver};

const TWO_SCENES: &str = "**1. A**\n[画面：cat]\n**2. B**\n[画面：dog] extra [特写:close]";

#[tokio::test]
async fn test_calls_alternate_in_scene_order() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success());
    let executor = StoryboardExecutor::new(Arc::clone(&driver));

    let session = executor.execute(TWO_SCENES).await;

    assert!(session.is_success());
    assert_eq!(session.state(), &RunState::Done { total: 2 });
    assert_eq!(
        driver.calls(),
        vec![
            Call::Enhance("cat".into()),
            Call::Synthesize("prompt: cat".into()),
            Call::Enhance("dog close".into()),
            Call::Synthesize("prompt: dog close".into()),
        ]
    );

    let items = session.into_result()?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].scene().label(), "1. A");
    assert_eq!(items[0].prompt(), "prompt: cat");
    assert_eq!(items[1].image().data(), b"prompt: dog close");
    Ok(())
}

#[tokio::test]
async fn test_no_scenes_fails_without_calls() {
    let driver = Arc::new(MockDriver::new_success());
    let observer = RecordingObserver::default();
    let executor = StoryboardExecutor::new(Arc::clone(&driver))
        .with_observer(Box::new(observer.clone()));

    let session = executor.execute("FADE IN.\n[画面：no heading]").await;

    assert_eq!(driver.call_count(), 0);
    assert_eq!(
        session.state(),
        &RunState::Failed {
            message: NO_SCENES_GUIDANCE.to_string()
        }
    );
    assert!(session.items().is_empty());
    match session.error().as_ref().map(|e| e.kind()) {
        Some(StoryboardErrorKind::Generation(e)) => {
            assert_eq!(e.kind, GenerationErrorKind::NoScenes)
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(observer.states(), vec![session.state().clone()]);
}

#[tokio::test]
async fn test_enhance_failure_keeps_earlier_items() {
    // Call 3 is the second scene's enhance
    let driver = Arc::new(MockDriver::new_fail_on(
        3,
        GeminiErrorKind::HttpError {
            status_code: 429,
            message: "quota exceeded".to_string(),
        },
    ));
    let executor = StoryboardExecutor::new(Arc::clone(&driver));

    let session = executor.execute(&format!("{}\n**3. C**\n[画面：bird]", TWO_SCENES)).await;

    assert_eq!(driver.call_count(), 3);
    assert_eq!(
        session.state(),
        &RunState::Failed {
            message: "HTTP 429 error: quota exceeded".to_string()
        }
    );
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].scene().label(), "1. A");

    let (items, error) = session.into_parts();
    assert_eq!(items.len(), 1);
    assert!(error.is_some());
}

#[tokio::test]
async fn test_synthesize_failure_on_first_scene() {
    let driver = Arc::new(MockDriver::new_fail_on(
        2,
        GeminiErrorKind::NoImageReturned("imagen-3.0-generate-002".to_string()),
    ));
    let executor = StoryboardExecutor::new(Arc::clone(&driver));

    let session = executor.execute(TWO_SCENES).await;

    assert_eq!(
        driver.calls(),
        vec![
            Call::Enhance("cat".into()),
            Call::Synthesize("prompt: cat".into())
        ]
    );
    assert!(session.items().is_empty());
    assert!(!session.is_success());
    assert!(session.into_result().is_err());
}

#[tokio::test]
async fn test_observer_sees_progress_in_order() {
    let observer = RecordingObserver::default();
    let executor =
        StoryboardExecutor::new(MockDriver::new_success()).with_observer(Box::new(observer.clone()));

    executor.execute(TWO_SCENES).await;

    assert_eq!(
        observer.messages(),
        vec![
            "Generating scene 1/2: Creating image prompt...",
            "Generating scene 1/2: Creating image...",
            "Generating scene 2/2: Creating image prompt...",
            "Generating scene 2/2: Creating image...",
        ]
    );
    assert_eq!(observer.states().last(), Some(&RunState::Done { total: 2 }));
    assert_eq!(
        observer.items(),
        vec![(0, "1. A".to_string()), (1, "2. B".to_string())]
    );
}

#[tokio::test]
async fn test_failed_run_reports_last_running_phase() {
    let observer = RecordingObserver::default();
    let driver = MockDriver::new_fail_on(2, GeminiErrorKind::Base64Decode("bad".into()));
    let executor = StoryboardExecutor::new(driver).with_observer(Box::new(observer.clone()));

    executor.execute(TWO_SCENES).await;

    let states = observer.states();
    assert_eq!(
        states[states.len() - 2],
        RunState::Running {
            scene: 1,
            total: 2,
            phase: GenerationPhase::SynthesizingImage
        }
    );
    assert!(matches!(states.last(), Some(RunState::Failed { .. })));
    assert!(observer.items().is_empty());
}

#[tokio::test]
async fn test_each_execute_starts_fresh() {
    let executor = StoryboardExecutor::new(MockDriver::new_success());

    let first = executor.execute(TWO_SCENES).await;
    let second = executor.execute("**9. Z**\n[蒙太奇：years pass]").await;

    assert_eq!(first.items().len(), 2);
    assert_eq!(second.items().len(), 1);
    assert_eq!(second.state(), &RunState::Done { total: 1 });
    assert_eq!(executor.driver().call_count(), 6);
}

#[tokio::test]
async fn test_custom_parser_tags() -> anyhow::Result<()> {
    let executor = StoryboardExecutor::new(MockDriver::new_success())
        .with_parser(ScriptParser::with_tags(["SHOT"])?);

    let session = executor.execute("**1. A**\n[SHOT: wide]\n[画面：ignored]").await;

    assert_eq!(
        executor.driver().calls()[0],
        Call::Enhance("wide".to_string())
    );
    assert!(session.is_success());
    Ok(())
}

#[tokio::test]
async fn test_sample_script_renders_every_scene() -> anyhow::Result<()> {
    let executor = StoryboardExecutor::new(MockDriver::new_success());

    let session = executor.execute(SAMPLE_SCRIPT).await;
    let expected = parse_script(SAMPLE_SCRIPT);

    assert_eq!(executor.driver().call_count(), expected.len() * 2);
    let items = session.into_result()?;
    let scenes: Vec<_> = items.iter().map(|item| item.scene().clone()).collect();
    assert_eq!(scenes, expected);
    Ok(())
}
