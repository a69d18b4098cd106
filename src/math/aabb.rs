use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Zero-size box at the origin (valid, used for empty text)
    pub fn zero() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Grow the box symmetrically on X and Y. Negative margins are clamped
    /// to zero so padding can never shrink the box below its contents.
    pub fn expand(&self, margin_x: f32, margin_y: f32) -> Aabb {
        let mx = margin_x.max(0.0) * 0.5;
        let my = margin_y.max(0.0) * 0.5;
        Aabb {
            min: self.min - Vec3::new(mx, my, 0.0),
            max: self.max + Vec3::new(mx, my, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = Aabb::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_center() {
        let aabb = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_size_and_extents() {
        let aabb = Aabb::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(aabb.size(), Vec3::new(4.0, 4.0, 1.0));
        assert_eq!(aabb.width(), 4.0);
        assert_eq!(aabb.height(), 4.0);
    }

    #[test]
    fn test_aabb_zero_is_degenerate_but_valid() {
        let aabb = Aabb::zero();
        assert_eq!(aabb.width(), 0.0);
        assert_eq!(aabb.height(), 0.0);
        assert_eq!(aabb.center(), Vec3::ZERO);
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let aabb1 = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = Aabb::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_aabb_union_contained() {
        let aabb1 = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 5.0, 5.0));
        let aabb2 = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, aabb1.min);
        assert_eq!(union.max, aabb1.max);
    }

    #[test]
    fn test_aabb_expand_grows_symmetrically() {
        let aabb = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 1.0));
        let padded = aabb.expand(5.0, 3.0);
        assert_eq!(padded.width(), 7.0);
        assert_eq!(padded.height(), 5.0);
        // Depth untouched
        assert_eq!(padded.min.z, 0.0);
        assert_eq!(padded.max.z, 1.0);
        // Same center
        assert_eq!(padded.center().x, aabb.center().x);
        assert_eq!(padded.center().y, aabb.center().y);
    }

    #[test]
    fn test_aabb_expand_clamps_negative_margins() {
        let aabb = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 1.0));
        let padded = aabb.expand(-4.0, -4.0);
        assert_eq!(padded, aabb);
    }
}
