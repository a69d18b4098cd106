use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::math::{angle_between, rotation_sign, Aabb};
use crate::scene::{Geometry, Node, Scene};
use crate::text::TextGeometry;
use crate::wrap::{wrap_text, WrapMode};

/// Name of the single live caption node under the scene root.
pub const BUBBLE_NODE: &str = "bubble";

/// Background visual behind the text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleStyle {
    /// Flat panel sized to text bounds plus padding
    #[default]
    Panel,
    /// Pre-authored bubble mesh stretched to the text bounds
    Mesh,
}

/// How the anchor position is derived from the camera. The two policies
/// are mutually exclusive; pick one in `PlacementSettings`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Anchor a fixed distance along the camera direction, projected onto
    /// the ground plane (pitch deliberately ignored)
    #[default]
    DirectionOffset,
    /// Anchor the baseline-direction offset rotated about +Y by the signed
    /// yaw between the latched baseline and the current direction
    RelativeRotation,
}

/// All placement knobs in one place: wrap strategy, padding, background
/// style, anchor policy.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    pub wrap_mode: WrapMode,
    /// Max characters per caption line
    pub line_width: usize,
    pub padding_width: f32,
    pub padding_height: f32,
    pub style: BubbleStyle,
    pub policy: PlacementPolicy,
    /// Distance from the camera to the anchor, in world units
    pub distance: f32,
    /// Text geometry units are large; the node is scaled down to world size
    pub text_scale: f32,
    pub extrusion_depth: f32,
    /// Authored bounds of the bubble mesh asset, used by `BubbleStyle::Mesh`
    pub bubble_authored_width: f32,
    pub bubble_authored_height: f32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            wrap_mode: WrapMode::CharBreak,
            line_width: 20,
            padding_width: 5.0,
            padding_height: 3.0,
            style: BubbleStyle::Panel,
            policy: PlacementPolicy::DirectionOffset,
            distance: 2.0,
            text_scale: 0.01,
            extrusion_depth: 1.0,
            bubble_authored_width: 10.0,
            bubble_authored_height: 10.0,
        }
    }
}

/// Summary of one placement, for logging and assertions.
#[derive(Copy, Clone, Debug)]
pub struct Placement {
    pub anchor: Vec3,
    pub text_bounds: Aabb,
    pub background_bounds: Aabb,
}

impl Placement {
    /// Combined local bounds of the caption subtree
    pub fn total_bounds(&self) -> Aabb {
        self.text_bounds.union(&self.background_bounds)
    }
}

/// Builds the caption subtree for each transcript update and swaps it into
/// the scene. One live bubble at a time; every update replaces the previous
/// node wholesale rather than mutating it.
#[derive(Debug)]
pub struct BubblePlacementEngine {
    settings: PlacementSettings,
}

impl BubblePlacementEngine {
    pub fn new(settings: PlacementSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    /// Place `text` ahead of the camera, replacing any existing bubble.
    /// `baseline` is the latched reference direction; only the
    /// relative-rotation policy reads it. Text is never rejected: empty
    /// input produces a degenerate bubble.
    pub fn place(
        &self,
        scene: &mut Scene,
        text: &str,
        pose: &CameraPose,
        baseline: Option<Vec3>,
    ) -> Placement {
        let anchor = self.anchor_position(pose, baseline);

        let wrapped = wrap_text(text, self.settings.line_width, self.settings.wrap_mode);
        let text_geometry = TextGeometry::new(&wrapped, self.settings.extrusion_depth);
        let text_bounds = text_geometry.bounds();

        let background = self.build_background(&text_bounds);
        let background_bounds = background_bounds(&background);

        let mut node = Node::new(BUBBLE_NODE).with_geometry(Geometry::Text(text_geometry));
        node.position = anchor;
        node.scale = Vec3::splat(self.settings.text_scale);
        node.billboard_y = true;
        node.add_child(background);

        // Remove-old-then-insert-new; in-place mutation is not supported
        scene.detach(BUBBLE_NODE);
        scene.attach(node);

        let placement = Placement {
            anchor,
            text_bounds,
            background_bounds,
        };
        debug!(
            "placed bubble at {:?}, text {}x{}, background {}x{}",
            anchor,
            text_bounds.width(),
            text_bounds.height(),
            background_bounds.width(),
            background_bounds.height()
        );
        placement
    }

    /// Anchor a fixed distance ahead of the camera, on the ground plane.
    /// Y is held at zero: the camera's vertical look angle never moves the
    /// bubble up or down.
    fn anchor_position(&self, pose: &CameraPose, baseline: Option<Vec3>) -> Vec3 {
        let d = self.settings.distance;
        match (self.settings.policy, baseline) {
            (PlacementPolicy::RelativeRotation, Some(baseline)) => {
                let signed_yaw = angle_between(baseline, pose.direction)
                    * rotation_sign(baseline, pose.direction);
                let base_anchor = Vec3::new(baseline.x * d, 0.0, baseline.z * d);
                Quat::from_rotation_y(signed_yaw) * base_anchor
            }
            // No baseline latched yet: fall back to the direct offset
            _ => Vec3::new(pose.direction.x * d, 0.0, pose.direction.z * d),
        }
    }

    fn build_background(&self, text_bounds: &Aabb) -> Node {
        match self.settings.style {
            BubbleStyle::Panel => {
                let padded =
                    text_bounds.expand(self.settings.padding_width, self.settings.padding_height);
                let mut node = Node::new("background").with_geometry(Geometry::Panel {
                    width: padded.width(),
                    height: padded.height(),
                });
                // Centered behind the text
                let center = text_bounds.center();
                node.position = Vec3::new(center.x, center.y, text_bounds.min.z);
                node
            }
            BubbleStyle::Mesh => {
                let authored = Aabb::new(
                    Vec3::ZERO,
                    Vec3::new(
                        self.settings.bubble_authored_width,
                        self.settings.bubble_authored_height,
                        1.0,
                    ),
                );
                let mut node = Node::new("background")
                    .with_geometry(Geometry::BubbleMesh { authored });
                // Non-uniform stretch from authored size to text size; a
                // degenerate text box collapses the mesh, which is fine
                node.scale = Vec3::new(
                    text_bounds.width() / authored.width(),
                    text_bounds.height() / authored.height(),
                    0.03,
                );
                // Pivot at the authored top edge so scaling grows downward
                // from the anchor instead of out from the center
                node.pivot = Vec3::new(0.0, authored.max.y, 0.0);
                node.position = Vec3::new(
                    text_bounds.width() * 0.5,
                    text_bounds.min.y,
                    text_bounds.min.z,
                );
                node
            }
        }
    }
}

fn background_bounds(node: &Node) -> Aabb {
    match node.geometry {
        Some(Geometry::Panel { width, height }) => {
            let half = Vec3::new(width * 0.5, height * 0.5, 0.0);
            Aabb::new(node.position - half, node.position + half)
        }
        Some(Geometry::BubbleMesh { authored }) => {
            let size = authored.size() * node.scale;
            let top = node.position;
            Aabb::new(
                Vec3::new(top.x - size.x * 0.5, top.y - size.y, top.z),
                Vec3::new(top.x + size.x * 0.5, top.y, top.z + size.z),
            )
        }
        _ => Aabb::zero(),
    }
}
