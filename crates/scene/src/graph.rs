//! The scene: node storage and graph operations.

use glam::Mat4;
use tracing::{debug, trace};
use vantage_core::Arena;
use vantage_resources::{Material, Mesh, MeshHandle, Texture, TextureHandle};
use vantage_shader::{ShaderId, ShaderRegistry, TemplateKind};

use crate::error::{SceneError, SceneResult};
use crate::node::{Node, NodeId, RenderPayload};
use crate::transform::Transform;

/// The scene graph: an arena of nodes plus the mesh and texture assets
/// their payloads reference.
///
/// Every mutation takes `&mut self`, so the graph has a single logical
/// owner; cross-thread sharing needs external synchronization just like any
/// other `&mut`-mutated value.
///
/// Structural invariants maintained by the graph operations:
/// - a node is a child of at most one parent at any time;
/// - child order is insertion order, stable until a structural change;
/// - the parent link is a back-reference only, never an ownership edge.
#[derive(Default)]
pub struct Scene {
    nodes: Arena<Node>,
    meshes: Arena<Mesh>,
    textures: Arena<Texture>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- nodes ----

    /// Create an empty node with a default [`Transform`] attached, no
    /// children, no other capability slots set, and no name.
    pub fn create_node(&mut self) -> NodeId {
        let id = self.nodes.insert(Node::with_default_transform());
        trace!(?id, "created node");
        id
    }

    /// Resolve a node id, or `None` when it is stale.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Resolve a node id mutably, or `None` when it is stale.
    ///
    /// Capability-slot operations ([`Node::attach_camera`] and friends) go
    /// through this accessor; structural operations stay on the scene.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Number of live nodes in the scene.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn try_node(&self, id: NodeId) -> SceneResult<&Node> {
        self.nodes.get(id).ok_or(SceneError::StaleHandle)
    }

    fn try_node_mut(&mut self, id: NodeId) -> SceneResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(SceneError::StaleHandle)
    }

    /// Release a node.
    ///
    /// The node is detached from its parent, and its children become roots;
    /// children are never destroyed with their parent. Handles to the freed
    /// node go stale.
    pub fn free_node(&mut self, id: NodeId) -> SceneResult<()> {
        self.try_node(id)?;
        self.detach_from_parent(id);

        let node = self.nodes.remove(id).ok_or(SceneError::StaleHandle)?;
        for child in node.children {
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = None;
            }
        }
        trace!(?id, "freed node");
        Ok(())
    }

    // ---- hierarchy ----

    /// Add `child` to the end of `parent`'s child sequence and point the
    /// child's parent back-reference at `parent`.
    ///
    /// A child that already has a parent (including `parent` itself) is
    /// detached from it first, so the one-parent invariant always holds;
    /// re-adding an existing child thus moves it to the end.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleHandle`] when either id is stale, and
    /// [`SceneError::SelfParent`] when `parent == child`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        if parent == child {
            return Err(SceneError::SelfParent);
        }
        self.try_node(parent)?;
        self.try_node(child)?;

        self.detach_from_parent(child);
        self.try_node_mut(child)?.parent = Some(parent);
        self.try_node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Remove the first occurrence of `child` from `parent`'s child
    /// sequence and clear the child's back-reference if it pointed here.
    ///
    /// A `child` that is not currently a child of `parent` is a silent
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleHandle`] when `parent` is stale.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        let parent_node = self.try_node_mut(parent)?;
        let Some(position) = parent_node.children.iter().position(|&c| c == child) else {
            return Ok(());
        };
        parent_node.children.remove(position);
        if let Some(child_node) = self.nodes.get_mut(child) {
            if child_node.parent == Some(parent) {
                child_node.parent = None;
            }
        }
        Ok(())
    }

    fn detach_from_parent(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = None;
        }
    }

    /// Number of children of `node`.
    pub fn child_count(&self, node: NodeId) -> SceneResult<usize> {
        Ok(self.try_node(node)?.child_count())
    }

    /// The child at position `index`.
    ///
    /// # Errors
    ///
    /// [`SceneError::ChildIndexOutOfBounds`] when `index` is not in
    /// `[0, child_count)`.
    pub fn child_at(&self, node: NodeId, index: usize) -> SceneResult<NodeId> {
        let node = self.try_node(node)?;
        node.children
            .get(index)
            .copied()
            .ok_or(SceneError::ChildIndexOutOfBounds {
                index,
                count: node.child_count(),
            })
    }

    /// The parent of `node`, or `None` when it is a root (or stale).
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Iterate over the children of `node`.
    ///
    /// The iterator snapshots the child sequence when created: it is
    /// read-only, unaffected by later mutation, and calling `children`
    /// again restarts over the then-current sequence.
    pub fn children(&self, node: NodeId) -> SceneResult<Children> {
        Ok(Children {
            ids: self.try_node(node)?.children.clone(),
            index: 0,
        })
    }

    // ---- assets ----

    /// Store a mesh, returning its handle.
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.insert(mesh)
    }

    /// Resolve a mesh handle.
    pub fn mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle)
    }

    /// Store a texture, returning its handle.
    pub fn add_texture(&mut self, texture: Texture) -> TextureHandle {
        self.textures.insert(texture)
    }

    /// Resolve a texture handle.
    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle)
    }

    // ---- convenience constructors ----

    /// Create a node drawing `mesh` with a default material on the standard
    /// (unlit) shader.
    pub fn create_node_with_mesh(
        &mut self,
        registry: &mut ShaderRegistry,
        mesh: MeshHandle,
    ) -> NodeId {
        let shader = registry.template_shader(TemplateKind::Unlit);
        self.create_node_with_shader(mesh, None, shader)
    }

    /// Create a node drawing `mesh` with `texture` on the standard (unlit)
    /// shader.
    pub fn create_node_with_texture(
        &mut self,
        registry: &mut ShaderRegistry,
        mesh: MeshHandle,
        texture: TextureHandle,
    ) -> NodeId {
        let shader = registry.template_shader(TemplateKind::Unlit);
        self.create_node_with_shader(mesh, Some(texture), shader)
    }

    /// Create a node drawing `mesh` with an explicit shader variant and
    /// optional texture.
    pub fn create_node_with_shader(
        &mut self,
        mesh: MeshHandle,
        texture: Option<TextureHandle>,
        shader: ShaderId,
    ) -> NodeId {
        let mut material = Material::new(shader);
        material.main_texture = texture;
        let id = self.create_node();
        if let Some(node) = self.nodes.get_mut(id) {
            node.attach_render_payload(RenderPayload::new(mesh, material));
        }
        debug!(?id, shader = shader.raw(), "created renderable node");
        id
    }

    /// Create a rectangular node whose geometry is a `width` x `height`
    /// quad, on the standard (unlit) shader.
    pub fn create_quad_node(
        &mut self,
        registry: &mut ShaderRegistry,
        width: f32,
        height: f32,
    ) -> NodeId {
        let mesh = self.add_mesh(Mesh::quad(width, height));
        self.create_node_with_mesh(registry, mesh)
    }

    /// Create a textured `width` x `height` quad node on the standard
    /// (unlit) shader.
    pub fn create_quad_node_with_texture(
        &mut self,
        registry: &mut ShaderRegistry,
        width: f32,
        height: f32,
        texture: TextureHandle,
    ) -> NodeId {
        let mesh = self.add_mesh(Mesh::quad(width, height));
        self.create_node_with_texture(registry, mesh, texture)
    }

    /// Create a textured `width` x `height` quad node with an explicit
    /// shader variant.
    pub fn create_quad_node_with_shader(
        &mut self,
        width: f32,
        height: f32,
        texture: TextureHandle,
        shader: ShaderId,
    ) -> NodeId {
        let mesh = self.add_mesh(Mesh::quad(width, height));
        self.create_node_with_shader(mesh, Some(texture), shader)
    }

    // ---- traversal ----

    /// Recompute world matrices for every node, top-down from the roots.
    ///
    /// A node without a transform contributes identity, so it groups its
    /// children without moving them.
    pub fn update(&mut self) {
        let roots: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
            .collect();

        let mut stack: Vec<(NodeId, Mat4)> = roots
            .into_iter()
            .map(|id| (id, Mat4::IDENTITY))
            .collect();

        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };
            let local = node
                .transform()
                .map(Transform::local_matrix)
                .unwrap_or(Mat4::IDENTITY);
            node.world_matrix = parent_world * local;
            let world = node.world_matrix;
            for &child in &node.children {
                stack.push((child, world));
            }
        }
    }

    /// Iterate over the nodes a rendering traversal would draw: those with
    /// a render payload attached.
    pub fn renderables(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().filter(|(_, node)| node.is_renderable())
    }
}

/// Snapshot iterator over a node's children.
///
/// Created by [`Scene::children`]; yields the child ids in insertion order
/// exactly once. Mutating the scene while iterating affects neither the
/// sequence nor its validity, because the ids were captured up front.
#[derive(Debug, Clone)]
pub struct Children {
    ids: Vec<NodeId>,
    index: usize,
}

impl Iterator for Children {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.ids.get(self.index).copied()?;
        self.index += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ids.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Children {}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_create_node_defaults() {
        let mut scene = Scene::new();
        let n = scene.create_node();

        let node = scene.node(n).unwrap();
        assert_eq!(node.transform(), Some(&Transform::default()));
        assert_eq!(scene.child_count(n).unwrap(), 0);
        assert!(scene.parent(n).is_none());
    }

    #[test]
    fn test_add_child_links_both_ends() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let c = scene.create_node();

        scene.add_child(p, c).unwrap();

        assert_eq!(scene.parent(c), Some(p));
        let count = scene.child_count(p).unwrap();
        assert_eq!(scene.child_at(p, count - 1).unwrap(), c);
    }

    #[test]
    fn test_remove_child_clears_back_reference() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let c = scene.create_node();
        scene.add_child(p, c).unwrap();
        scene.remove_child(p, c).unwrap();

        assert!(scene.parent(c).is_none());
        assert_eq!(scene.child_count(p).unwrap(), 0);
    }

    #[test]
    fn test_remove_non_child_is_noop() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let stranger = scene.create_node();

        scene.remove_child(p, stranger).unwrap();
        assert_eq!(scene.child_count(p).unwrap(), 0);
    }

    #[test]
    fn test_child_at_bounds() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let c = scene.create_node();
        scene.add_child(p, c).unwrap();

        assert_eq!(scene.child_at(p, 0).unwrap(), c);
        assert_eq!(
            scene.child_at(p, 1),
            Err(SceneError::ChildIndexOutOfBounds { index: 1, count: 1 })
        );
        assert_eq!(
            scene.child_at(p, usize::MAX),
            Err(SceneError::ChildIndexOutOfBounds {
                index: usize::MAX,
                count: 1
            })
        );
    }

    #[test]
    fn test_reparenting_detaches_first() {
        let mut scene = Scene::new();
        let p1 = scene.create_node();
        let p2 = scene.create_node();
        let c = scene.create_node();

        scene.add_child(p1, c).unwrap();
        scene.add_child(p2, c).unwrap();

        assert_eq!(scene.parent(c), Some(p2));
        assert_eq!(scene.child_count(p1).unwrap(), 0, "old parent lost the child");
        assert_eq!(scene.child_count(p2).unwrap(), 1);
    }

    #[test]
    fn test_re_adding_child_moves_to_end() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let a = scene.create_node();
        let b = scene.create_node();
        scene.add_child(p, a).unwrap();
        scene.add_child(p, b).unwrap();
        scene.add_child(p, a).unwrap();

        let order: Vec<_> = scene.children(p).unwrap().collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn test_self_parent_rejected() {
        let mut scene = Scene::new();
        let n = scene.create_node();
        assert_eq!(scene.add_child(n, n), Err(SceneError::SelfParent));
    }

    #[test]
    fn test_children_iteration_order_and_restart() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let ids: Vec<_> = (0..3).map(|_| scene.create_node()).collect();
        for &c in &ids {
            scene.add_child(p, c).unwrap();
        }

        let first: Vec<_> = scene.children(p).unwrap().collect();
        assert_eq!(first, ids, "children iterate in insertion order, once");

        let second: Vec<_> = scene.children(p).unwrap().collect();
        assert_eq!(second, ids, "a new iterator restarts the sequence");
    }

    #[test]
    fn test_children_snapshot_survives_mutation() {
        let mut scene = Scene::new();
        let p = scene.create_node();
        let a = scene.create_node();
        let b = scene.create_node();
        scene.add_child(p, a).unwrap();
        scene.add_child(p, b).unwrap();

        let mut iter = scene.children(p).unwrap();
        assert_eq!(iter.next(), Some(a));
        scene.remove_child(p, b).unwrap();
        assert_eq!(iter.next(), Some(b), "snapshot is unaffected by mutation");
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_scenario_root_two_children_remove_one() {
        let mut scene = Scene::new();
        let root = scene.create_node();
        let a = scene.create_node();
        let b = scene.create_node();
        scene.add_child(root, a).unwrap();
        scene.add_child(root, b).unwrap();
        scene.remove_child(root, a).unwrap();

        assert_eq!(scene.child_count(root).unwrap(), 1);
        assert_eq!(scene.child_at(root, 0).unwrap(), b);
        assert!(scene.parent(a).is_none());
    }

    #[test]
    fn test_free_node_orphans_children() {
        let mut scene = Scene::new();
        let root = scene.create_node();
        let mid = scene.create_node();
        let leaf = scene.create_node();
        scene.add_child(root, mid).unwrap();
        scene.add_child(mid, leaf).unwrap();

        scene.free_node(mid).unwrap();

        assert!(scene.node(mid).is_none());
        assert_eq!(scene.child_count(root).unwrap(), 0);
        assert!(scene.parent(leaf).is_none(), "children become roots");
        assert!(scene.node(leaf).is_some(), "children are not destroyed");
    }

    #[test]
    fn test_stale_handles_rejected() {
        let mut scene = Scene::new();
        let n = scene.create_node();
        let other = scene.create_node();
        scene.free_node(n).unwrap();

        assert_eq!(scene.child_count(n), Err(SceneError::StaleHandle));
        assert_eq!(scene.add_child(other, n), Err(SceneError::StaleHandle));
        assert_eq!(scene.free_node(n), Err(SceneError::StaleHandle));
        assert!(scene.node(n).is_none());
    }

    #[test]
    fn test_payload_replacement() {
        let mut scene = Scene::new();
        let mut registry = ShaderRegistry::new();
        let mesh = scene.add_mesh(Mesh::quad(1.0, 1.0));
        let shader = registry.template_shader(TemplateKind::Unlit);
        let n = scene.create_node();

        let first = RenderPayload::new(mesh, Material::new(shader));
        let second_mesh = scene.add_mesh(Mesh::quad(2.0, 2.0));
        let second = RenderPayload::new(second_mesh, Material::new(shader));

        let node = scene.node_mut(n).unwrap();
        node.attach_render_payload(first);
        node.attach_render_payload(second);

        assert_eq!(
            scene.node(n).unwrap().render_payload().unwrap().mesh,
            second_mesh,
            "second attach replaces the first payload"
        );
    }

    #[test]
    fn test_update_composes_world_matrices() {
        let mut scene = Scene::new();
        let root = scene.create_node();
        let mid = scene.create_node();
        let leaf = scene.create_node();
        scene.add_child(root, mid).unwrap();
        scene.add_child(mid, leaf).unwrap();

        for (id, x) in [(root, 100.0), (mid, 10.0), (leaf, 1.0)] {
            scene
                .node_mut(id)
                .unwrap()
                .attach_transform(Transform::new().with_position(Vec3::new(x, 0.0, 0.0)));
        }
        scene.update();

        let world = scene.node(leaf).unwrap().world_matrix();
        let pos = world.transform_point3(Vec3::ZERO);
        assert!(
            (pos - Vec3::new(111.0, 0.0, 0.0)).length() < 1e-4,
            "expected (111, 0, 0), got {pos:?}"
        );
    }

    #[test]
    fn test_update_treats_missing_transform_as_identity() {
        let mut scene = Scene::new();
        let root = scene.create_node();
        let child = scene.create_node();
        scene.add_child(root, child).unwrap();

        scene.node_mut(root).unwrap().detach_transform();
        scene
            .node_mut(child)
            .unwrap()
            .attach_transform(Transform::new().with_position(Vec3::X));
        scene.update();

        let pos = scene
            .node(child)
            .unwrap()
            .world_matrix()
            .transform_point3(Vec3::ZERO);
        assert!((pos - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_quad_node_is_renderable() {
        let mut scene = Scene::new();
        let mut registry = ShaderRegistry::new();
        let n = scene.create_quad_node(&mut registry, 2.0, 1.0);

        let unlit = registry.template_shader(TemplateKind::Unlit);
        let node = scene.node(n).unwrap();
        assert!(node.is_renderable());
        let payload = node.render_payload().unwrap();
        assert_eq!(scene.mesh(payload.mesh).unwrap().vertex_count(), 4);
        assert_eq!(
            payload.material.shader, unlit,
            "material binds the unlit template variant"
        );
        assert_eq!(scene.renderables().count(), 1);
    }

    #[test]
    fn test_textured_quad_node() {
        let mut scene = Scene::new();
        let mut registry = ShaderRegistry::new();
        let texture = scene.add_texture(Texture::solid([255, 255, 255, 255]));
        let n = scene.create_quad_node_with_texture(&mut registry, 1.0, 1.0, texture);

        let payload = scene.node(n).unwrap().render_payload().unwrap();
        assert_eq!(payload.material.main_texture, Some(texture));
    }
}
