use glam::Vec3;

use crate::math::{yaw_to_face, Aabb};
use crate::text::TextGeometry;

/// Geometry attached to a scene node. The renderer owns meshes and
/// materials; this is only the data the placement core needs.
#[derive(Clone, Debug)]
pub enum Geometry {
    Text(TextGeometry),
    /// Flat background panel sized to the padded text bounds
    Panel { width: f32, height: f32 },
    /// Pre-authored bubble mesh, referenced by its authored bounds and
    /// stretched into place via the node's scale
    BubbleMesh { authored: Aabb },
}

/// A node in the retained scene graph. `pivot` relocates the local origin
/// so scale grows away from an anchor point instead of the mesh center.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub position: Vec3,
    pub scale: Vec3,
    pub pivot: Vec3,
    /// Rotation about +Y, radians. The only rotation a caption node gets.
    pub yaw: f32,
    /// Yaw toward the camera every frame, never tilt
    pub billboard_y: bool,
    pub geometry: Option<Geometry>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            pivot: Vec3::ZERO,
            yaw: 0.0,
            billboard_y: false,
            geometry: None,
            children: Vec::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

/// Root of the node tree the renderer draws. Mutated only from the single
/// update queue; per-frame passes read camera state and adjust yaw.
#[derive(Debug)]
pub struct Scene {
    root: Node,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            root: Node::new("root"),
        }
    }

    pub fn attach(&mut self, node: Node) {
        self.root.add_child(node);
    }

    /// Remove the first child with the given name, returning it if found.
    pub fn detach(&mut self, name: &str) -> Option<Node> {
        let index = self.root.children.iter().position(|n| n.name == name)?;
        Some(self.root.children.remove(index))
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.root.children.iter().find(|n| n.name == name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.root.children.iter().filter(|n| n.name == name).count()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Per-frame billboard pass: every billboarded root child yaws to face
    /// the camera. Children inherit the parent's rotation, so the whole
    /// caption subtree turns together.
    pub fn apply_billboard(&mut self, camera_position: Vec3) {
        for node in &mut self.root.children {
            if node.billboard_y {
                node.yaw = yaw_to_face(node.position, camera_position);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
