use std::collections::VecDeque;
use std::fmt;

use glam::Mat4;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPose, OrientationTracker};
use crate::placement::{BubblePlacementEngine, Placement, PlacementSettings};
use crate::scene::Scene;

/// One incremental transcript from the recognizer. Each update carries the
/// full text so far; the display replaces wholesale, no diffing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptUpdate {
    pub text: String,
    #[serde(default)]
    pub is_final: bool,
}

/// Unrecoverable recognizer failures. Restart policy lives with the
/// platform speech collaborator, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    DeviceUnavailable,
    PermissionRevoked,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::DeviceUnavailable => write!(f, "audio device unavailable"),
            SessionError::PermissionRevoked => write!(f, "speech permission revoked"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Clone, Debug, PartialEq)]
pub enum SpeechEvent {
    Transcript(TranscriptUpdate),
    EndOfUtterance,
    Error(SessionError),
}

/// Serialized stream of recognizer events. The placement core only
/// consumes; microphone lifecycle and authorization belong to the
/// implementor.
pub trait SpeechSource {
    fn next_event(&mut self) -> Option<SpeechEvent>;
}

/// A `SpeechSource` replaying a fixed script, for the demo binary and
/// tests. Scripts load from the same JSON shape `TranscriptUpdate`
/// serializes to.
#[derive(Debug, Default)]
pub struct ScriptedSpeech {
    events: VecDeque<SpeechEvent>,
}

impl ScriptedSpeech {
    pub fn new(updates: Vec<TranscriptUpdate>) -> Self {
        let mut events: VecDeque<SpeechEvent> =
            updates.into_iter().map(SpeechEvent::Transcript).collect();
        events.push_back(SpeechEvent::EndOfUtterance);
        Self { events }
    }

    pub fn with_events(events: Vec<SpeechEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl SpeechSource for ScriptedSpeech {
    fn next_event(&mut self) -> Option<SpeechEvent> {
        self.events.pop_front()
    }
}

/// Wires the orientation tracker, placement engine, and scene together:
/// the per-frame path latches the baseline and re-aims the billboard, the
/// event path places transcripts in delivery order, one at a time.
///
/// After an unrecoverable speech error the session stops accepting
/// updates; the last bubble stays attached rather than being cleared.
pub struct CaptionSession {
    tracker: OrientationTracker,
    engine: BubblePlacementEngine,
    scene: Scene,
    last_pose: Option<CameraPose>,
    halted: bool,
}

impl CaptionSession {
    pub fn new(settings: PlacementSettings) -> Self {
        Self {
            tracker: OrientationTracker::new(),
            engine: BubblePlacementEngine::new(settings),
            scene: Scene::new(),
            last_pose: None,
            halted: false,
        }
    }

    /// Per-frame callback. Reads camera state only; never touches bubble
    /// geometry beyond the yaw-only billboard pass. A `None` transform
    /// (tracking not ready) is skipped and retried next frame.
    pub fn on_frame(&mut self, camera_transform: Option<&Mat4>) {
        self.tracker.capture_baseline(camera_transform);
        if let Some(transform) = camera_transform {
            let pose = CameraPose::from_transform(transform);
            self.last_pose = Some(pose);
            self.scene.apply_billboard(pose.position);
        }
    }

    /// Consume one recognizer event. Placements run to completion before
    /// the next event is read; a partial result superseded by the next one
    /// is simply overwritten.
    pub fn on_event(&mut self, event: SpeechEvent) -> Option<Placement> {
        if self.halted {
            return None;
        }
        match event {
            SpeechEvent::Transcript(update) => {
                // No camera frame yet: skip, the next update retries
                let Some(pose) = self.last_pose else {
                    warn!("transcript before first camera frame, skipping");
                    return None;
                };
                if update.is_final {
                    info!("final transcript: {:?}", update.text);
                }
                let baseline = self.tracker.baseline();
                Some(self.engine.place(&mut self.scene, &update.text, &pose, baseline))
            }
            SpeechEvent::EndOfUtterance => None,
            SpeechEvent::Error(err) => {
                warn!("speech session failed: {err}; keeping last bubble");
                self.halted = true;
                None
            }
        }
    }

    /// Drain a speech source to completion.
    pub fn run<S: SpeechSource>(&mut self, source: &mut S) -> usize {
        let mut placed = 0;
        while let Some(event) = source.next_event() {
            if self.on_event(event).is_some() {
                placed += 1;
            }
        }
        placed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
