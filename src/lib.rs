pub mod camera;
pub mod cli;
pub mod math;
pub mod placement;
pub mod scene;
pub mod session;
pub mod text;
pub mod wrap;

pub use camera::{CameraPose, OrientationTracker};
pub use placement::{
    BubblePlacementEngine, BubbleStyle, Placement, PlacementPolicy, PlacementSettings, BUBBLE_NODE,
};
pub use scene::{Geometry, Node, Scene};
pub use session::{
    CaptionSession, ScriptedSpeech, SessionError, SpeechEvent, SpeechSource, TranscriptUpdate,
};
pub use wrap::{wrap_text, WrapMode};
