use glam::Vec3;

/// Yaw (radians about +Y) that turns a node's -Z axis toward the camera,
/// ignoring pitch and roll. This is the vertical-axis-restricted billboard:
/// the node swivels to face the viewer but never tilts.
pub fn yaw_to_face(node_position: Vec3, camera_position: Vec3) -> f32 {
    let to_camera = camera_position - node_position;
    // Coincident XZ positions would make atan2 meaningless
    if to_camera.x.abs() < f32::EPSILON && to_camera.z.abs() < f32::EPSILON {
        return 0.0;
    }
    to_camera.x.atan2(to_camera.z)
}

/// Unsigned angle between two vectors, in radians.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom < f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Sign of the yaw rotation carrying `baseline` onto `current`: +1.0 for
/// counter-clockwise (viewed from above), -1.0 for clockwise, 0.0 when the
/// vectors are parallel in the XZ plane. Taken from the Y component of the
/// cross product.
pub fn rotation_sign(baseline: Vec3, current: Vec3) -> f32 {
    let cross_y = baseline.z * current.x - baseline.x * current.z;
    if cross_y.abs() < f32::EPSILON {
        0.0
    } else {
        cross_y.signum()
    }
}
