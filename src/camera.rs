use glam::{Mat4, Vec3};

/// Camera state sampled once per rendered frame. Rebuilt from the tracking
/// transform every frame, never stored across frames.
#[derive(Copy, Clone, Debug)]
pub struct CameraPose {
    /// Unit vector the camera is looking along, in world space
    pub direction: Vec3,
    /// Camera location in world space
    pub position: Vec3,
}

impl CameraPose {
    /// Extract pose from a 4x4 world-space camera transform. The camera
    /// looks down its local -Z, so the forward direction is the negated
    /// third basis vector of the rotation part.
    pub fn from_transform(transform: &Mat4) -> Self {
        let z_axis = transform.z_axis.truncate();
        let direction = (-z_axis).normalize_or_zero();
        let position = transform.w_axis.truncate();
        Self {
            direction,
            position,
        }
    }
}

/// Latches the camera's facing direction the first time a frame is
/// available. Set-once: every later call is a no-op that returns the stored
/// baseline. Used as the reference direction for relative-rotation
/// placement.
#[derive(Default, Debug)]
pub struct OrientationTracker {
    baseline: Option<Vec3>,
}

impl OrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the baseline direction if none is stored yet. A missing
    /// transform (tracking not ready) is skipped silently; the next frame
    /// retries.
    pub fn capture_baseline(&mut self, transform: Option<&Mat4>) -> Option<Vec3> {
        if self.baseline.is_none() {
            if let Some(transform) = transform {
                self.baseline = Some(CameraPose::from_transform(transform).direction);
            }
        }
        self.baseline
    }

    pub fn baseline(&self) -> Option<Vec3> {
        self.baseline
    }
}
