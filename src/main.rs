use anyhow::{Context, Result};
use clap::Parser;
use glam::Mat4;
use std::fs;
use std::path::Path;

use bubble_ar::cli::Cli;
use bubble_ar::{
    CaptionSession, PlacementSettings, ScriptedSpeech, SpeechEvent, SpeechSource, TranscriptUpdate,
};

// === Constants ===

/// Yaw step per simulated frame, radians
const FRAME_YAW_STEP: f32 = 0.02;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    let updates = load_script(cli.script.as_deref())?;

    println!(
        "bubble-ar demo: {} transcript updates, wrap {:?}, style {:?}, policy {:?}",
        updates.len(),
        settings.wrap_mode,
        settings.style,
        settings.policy
    );

    let mut session = CaptionSession::new(settings);
    let mut source = ScriptedSpeech::new(updates);

    // Simulated render loop: the camera yaws a little each frame, and one
    // recognizer event arrives between frames. The first frame is missing,
    // as it is on a device while tracking warms up.
    session.on_frame(None);

    let mut frame = 0u32;
    while let Some(event) = source.next_event() {
        let yaw = frame as f32 * FRAME_YAW_STEP;
        session.on_frame(Some(&Mat4::from_rotation_y(yaw)));
        frame += 1;

        if let SpeechEvent::Transcript(ref update) = event {
            if !cli.quiet {
                println!("transcript: {:?} (final: {})", update.text, update.is_final);
            }
        }
        if let Some(placement) = session.on_event(event) {
            if !cli.quiet {
                let total = placement.total_bounds();
                println!(
                    "  bubble at ({:.2}, {:.2}, {:.2}), {:.1} x {:.1} units",
                    placement.anchor.x,
                    placement.anchor.y,
                    placement.anchor.z,
                    total.width(),
                    total.height()
                );
            }
        }
    }

    println!(
        "done: {} bubble node(s) in scene, session halted: {}",
        session.scene().count(bubble_ar::BUBBLE_NODE),
        session.is_halted()
    );
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<PlacementSettings> {
    if let Some(path) = &cli.settings {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read settings file: {:?}", path))?;
        return serde_json::from_str(&contents)
            .context(format!("Failed to parse settings file: {:?}", path));
    }
    Ok(PlacementSettings {
        wrap_mode: cli.wrap_mode.into(),
        line_width: cli.line_width,
        style: cli.style.into(),
        policy: cli.policy.into(),
        distance: cli.distance,
        ..Default::default()
    })
}

fn load_script(path: Option<&Path>) -> Result<Vec<TranscriptUpdate>> {
    if let Some(path) = path {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read script file: {:?}", path))?;
        return serde_json::from_str(&contents)
            .context(format!("Failed to parse script file: {:?}", path));
    }
    // Built-in script mimicking incremental recognizer output
    let script = [
        ("hello", false),
        ("hello every", false),
        ("hello everyone out", false),
        ("hello everyone out there in the room", true),
    ];
    Ok(script
        .into_iter()
        .map(|(text, is_final)| TranscriptUpdate {
            text: text.to_string(),
            is_final,
        })
        .collect())
}
