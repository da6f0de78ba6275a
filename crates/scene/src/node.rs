//! Scene-graph nodes and their capability slots.

use glam::Mat4;
use vantage_core::Handle;
use vantage_resources::{Material, MeshHandle};

use crate::camera::{Camera, CameraRig};
use crate::light::Light;
use crate::pick::PickVolume;
use crate::transform::Transform;

/// Handle to a node stored in a [`Scene`](crate::Scene).
pub type NodeId = Handle<Node>;

/// What makes a node visible: the mesh it draws and the material (shader
/// binding plus inputs) it draws with.
#[derive(Clone, Debug)]
pub struct RenderPayload {
    pub mesh: MeshHandle,
    pub material: Material,
}

impl RenderPayload {
    /// Create a payload drawing `mesh` with `material`.
    pub fn new(mesh: MeshHandle, material: Material) -> Self {
        Self { mesh, material }
    }
}

/// A vertex of the scene graph.
///
/// Every node has an optional name and five independent capability slots:
/// transform, render payload, camera, camera rig, pick volume, and light.
/// Each slot is single-valued; attaching replaces any previous value and
/// detaching clears it. Reading an empty slot is not an error.
///
/// Parent and child links are maintained by the owning
/// [`Scene`](crate::Scene); a node never owns its children, and the parent
/// link is a lookup-only back-reference.
#[derive(Debug, Default)]
pub struct Node {
    name: String,
    transform: Option<Transform>,
    payload: Option<RenderPayload>,
    camera: Option<Camera>,
    camera_rig: Option<CameraRig>,
    pick_volume: Option<PickVolume>,
    light: Option<Light>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) world_matrix: Mat4,
}

impl Node {
    pub(crate) fn with_default_transform() -> Self {
        Self {
            transform: Some(Transform::default()),
            world_matrix: Mat4::IDENTITY,
            ..Self::default()
        }
    }

    /// Get the node's name; empty when none has been assigned.
    ///
    /// Names are advisory metadata only; traversal ignores them.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the node's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the current transform.
    pub fn attach_transform(&mut self, transform: Transform) {
        self.transform = Some(transform);
    }

    /// Remove the node's transform, returning it. After this call the node
    /// has no transformations associated with it and contributes identity
    /// to the world-matrix update.
    pub fn detach_transform(&mut self) -> Option<Transform> {
        self.transform.take()
    }

    /// The current transform, if any.
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Mutable access to the current transform, if any.
    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.transform.as_mut()
    }

    /// Attach a render payload, replacing any current one.
    pub fn attach_render_payload(&mut self, payload: RenderPayload) {
        self.payload = Some(payload);
    }

    /// Detach the current render payload. A node without one is invisible.
    pub fn detach_render_payload(&mut self) -> Option<RenderPayload> {
        self.payload.take()
    }

    /// The current render payload, if any.
    pub fn render_payload(&self) -> Option<&RenderPayload> {
        self.payload.as_ref()
    }

    /// Mutable access to the current render payload, if any.
    pub fn render_payload_mut(&mut self) -> Option<&mut RenderPayload> {
        self.payload.as_mut()
    }

    /// Attach a camera, replacing any current one.
    pub fn attach_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// Detach the current camera.
    pub fn detach_camera(&mut self) -> Option<Camera> {
        self.camera.take()
    }

    /// The attached camera, if any.
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Attach a camera rig, replacing any current one.
    pub fn attach_camera_rig(&mut self, rig: CameraRig) {
        self.camera_rig = Some(rig);
    }

    /// Detach the current camera rig.
    pub fn detach_camera_rig(&mut self) -> Option<CameraRig> {
        self.camera_rig.take()
    }

    /// The attached camera rig, if any.
    pub fn camera_rig(&self) -> Option<&CameraRig> {
        self.camera_rig.as_ref()
    }

    /// Attach a pick volume, replacing any current one.
    pub fn attach_pick_volume(&mut self, volume: PickVolume) {
        self.pick_volume = Some(volume);
    }

    /// Detach the current pick volume.
    pub fn detach_pick_volume(&mut self) -> Option<PickVolume> {
        self.pick_volume.take()
    }

    /// The attached pick volume, if any.
    pub fn pick_volume(&self) -> Option<&PickVolume> {
        self.pick_volume.as_ref()
    }

    /// Attach a light, replacing any current one.
    pub fn attach_light(&mut self, light: Light) {
        self.light = Some(light);
    }

    /// Detach the current light.
    pub fn detach_light(&mut self) -> Option<Light> {
        self.light.take()
    }

    /// The attached light, if any.
    pub fn light(&self) -> Option<&Light> {
        self.light.as_ref()
    }

    /// The node's parent, or `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True when the node would be drawn by a rendering traversal that
    /// reaches it: a payload is attached. Reachability itself is the
    /// traversal's concern.
    pub fn is_renderable(&self) -> bool {
        self.payload.is_some()
    }

    /// World matrix from the most recent [`Scene::update`](crate::Scene).
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_node_slots() {
        let node = Node::with_default_transform();

        assert!(node.transform().is_some(), "transform is auto-attached");
        assert_eq!(node.transform(), Some(&Transform::default()));
        assert!(node.render_payload().is_none());
        assert!(node.camera().is_none());
        assert!(node.camera_rig().is_none());
        assert!(node.pick_volume().is_none());
        assert!(node.light().is_none());
        assert_eq!(node.name(), "");
        assert_eq!(node.child_count(), 0);
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_attach_replaces_slot() {
        let mut node = Node::with_default_transform();
        node.attach_camera(Camera::default());

        let mut moved = Camera::default();
        moved.position = Vec3::new(1.0, 2.0, 3.0);
        node.attach_camera(moved.clone());

        assert_eq!(node.camera(), Some(&moved));
    }

    #[test]
    fn test_detach_clears_slot() {
        let mut node = Node::with_default_transform();
        node.attach_pick_volume(PickVolume::Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        });

        assert!(node.detach_pick_volume().is_some());
        assert!(node.pick_volume().is_none());
        assert!(node.detach_pick_volume().is_none(), "second detach is empty");
    }

    #[test]
    fn test_detach_transform() {
        let mut node = Node::with_default_transform();
        assert!(node.detach_transform().is_some());
        assert!(node.transform().is_none());
    }

    #[test]
    fn test_renderable_is_derived_from_payload() {
        let node = Node::with_default_transform();
        assert!(!node.is_renderable());
    }

    #[test]
    fn test_name_roundtrip() {
        let mut node = Node::with_default_transform();
        node.set_name("avatar");
        assert_eq!(node.name(), "avatar");
    }
}
