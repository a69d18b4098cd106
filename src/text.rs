use glam::Vec3;

use crate::math::Aabb;

/// Height of one text line in geometry units. Matches the scale the
/// platform text mesh reports for a single line.
pub const LINE_HEIGHT: f32 = 10.0;
/// Advance width of one glyph cell in geometry units (monospace model).
pub const GLYPH_WIDTH: f32 = 6.0;

/// Measured text geometry. Built purely to obtain a bounding box before the
/// background is sized; the actual glyph mesh is owned by the renderer.
/// Bounds grow right and down from the top-left origin, extruded on +Z.
#[derive(Clone, Debug)]
pub struct TextGeometry {
    text: String,
    bounds: Aabb,
}

impl TextGeometry {
    pub fn new(wrapped_text: &str, extrusion_depth: f32) -> Self {
        let mut max_cols = 0usize;
        let mut rows = 0usize;
        for line in wrapped_text.lines() {
            rows += 1;
            max_cols = max_cols.max(line.chars().count());
        }

        let width = max_cols as f32 * GLYPH_WIDTH;
        let height = rows as f32 * LINE_HEIGHT;
        // Empty text measures as a zero-size box, which is still valid
        let bounds = if wrapped_text.is_empty() {
            Aabb::zero()
        } else {
            Aabb::new(
                Vec3::new(0.0, -height, 0.0),
                Vec3::new(width, 0.0, extrusion_depth),
            )
        };

        Self {
            text: wrapped_text.to_string(),
            bounds,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }
}
