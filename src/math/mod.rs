mod aabb;
mod billboard;

pub use aabb::Aabb;
pub use billboard::{angle_between, rotation_sign, yaw_to_face};
