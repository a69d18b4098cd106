// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::placement::{BubbleStyle, PlacementPolicy};
use crate::wrap::WrapMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "bubble-ar")]
#[command(about = "AR speech-bubble placement demo", long_about = None)]
pub struct Cli {
    /// Line wrap policy: char-break or word-wrap
    #[arg(long, value_enum, default_value = "char-break")]
    pub wrap_mode: WrapModeArg,

    /// Max characters per caption line
    #[arg(long, default_value = "20")]
    pub line_width: usize,

    /// Background style: panel or mesh
    #[arg(long, value_enum, default_value = "panel")]
    pub style: StyleArg,

    /// Anchor placement policy
    #[arg(long, value_enum, default_value = "direction-offset")]
    pub policy: PolicyArg,

    /// Distance from camera to bubble, world units
    #[arg(long, default_value = "2.0")]
    pub distance: f32,

    /// JSON settings file overriding the flags above
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// JSON transcript script to replay (array of {text, is_final})
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Suppress per-placement output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
pub enum WrapModeArg {
    CharBreak,
    WordWrap,
}

impl From<WrapModeArg> for WrapMode {
    fn from(arg: WrapModeArg) -> Self {
        match arg {
            WrapModeArg::CharBreak => WrapMode::CharBreak,
            WrapModeArg::WordWrap => WrapMode::WordWrap,
        }
    }
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
pub enum StyleArg {
    Panel,
    Mesh,
}

impl From<StyleArg> for BubbleStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Panel => BubbleStyle::Panel,
            StyleArg::Mesh => BubbleStyle::Mesh,
        }
    }
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
pub enum PolicyArg {
    DirectionOffset,
    RelativeRotation,
}

impl From<PolicyArg> for PlacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::DirectionOffset => PlacementPolicy::DirectionOffset,
            PolicyArg::RelativeRotation => PlacementPolicy::RelativeRotation,
        }
    }
}
