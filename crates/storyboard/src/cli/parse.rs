//! `storyboard parse` command handler.

use crate::cli::{OutputFormat, ScriptSource, load_script};
use storyboard::{JsonError, NO_SCENES_GUIDANCE, SceneDescriptor, StoryboardResult, parse_script};

/// Print the scenes found in a script.
///
/// A script without scenes prints the guidance message: on stdout for human
/// output, on stderr for JSON so the `[]` on stdout stays machine readable.
pub async fn parse_command(source: &ScriptSource, format: OutputFormat) -> StoryboardResult<()> {
    let script = load_script(source).await?;
    let scenes = parse_script(&script);

    if scenes.is_empty() && format == OutputFormat::Json {
        eprintln!("{}", NO_SCENES_GUIDANCE);
    }
    println!("{}", render_scenes(&scenes, format)?);

    Ok(())
}

/// Format parsed scenes for display.
pub fn render_scenes(scenes: &[SceneDescriptor], format: OutputFormat) -> StoryboardResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(scenes)
            .map_err(|e| JsonError::new(format!("Failed to serialize scenes: {}", e)).into()),
        OutputFormat::Human => {
            if scenes.is_empty() {
                return Ok(NO_SCENES_GUIDANCE.to_string());
            }

            let mut out = format!("{} scene(s)\n", scenes.len());
            for scene in scenes {
                out.push_str(&format!("\n{}\n  {}\n", scene.label(), scene.description()));
            }
            Ok(out)
        }
    }
}
