use na::{Matrix4, UnitQuaternion};

use crate::math::{Point, Real, Vector};
use crate::scene::InvalidParent;
use crate::utils::trs;

/// The identifier of a node inside a [`SceneGraph`].
///
/// Ids are plain indices into the graph's arena and stay valid until the
/// node is removed. Accessing a removed node's id panics; a removed slot
/// may be reused by a later [`SceneGraph::spawn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

struct Node {
    local_position: Vector,
    local_rotation: UnitQuaternion<Real>,
    local_scale: Vector,
    local_matrix: Matrix4<Real>,
    world_matrix: Matrix4<Real>,
    local_dirty: bool,
    world_dirty: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    user_data: u64,
}

impl Node {
    fn new() -> Node {
        Node {
            local_position: Vector::zeros(),
            local_rotation: UnitQuaternion::identity(),
            local_scale: Vector::repeat(1.0),
            local_matrix: Matrix4::identity(),
            world_matrix: Matrix4::identity(),
            local_dirty: true,
            world_dirty: true,
            parent: None,
            children: Vec::new(),
            user_data: 0,
        }
    }
}

/// An arena of transform nodes forming a forest of trees.
///
/// Each node stores a local translation-rotation-scale relative to its
/// parent, and lazily caches both its local matrix and its world matrix
/// (`parent_world · local`). Mutators invalidate the world matrices of the
/// whole affected subtree; accessors recompute only what is dirty.
///
/// Scale components are expected to be non-negative: decomposition of
/// negative scales is undefined (see [`crate::utils::trs`]).
pub struct SceneGraph {
    nodes: Vec<Option<Node>>,
    free: Vec<u32>,
}

impl Default for SceneGraph {
    fn default() -> SceneGraph {
        SceneGraph::new()
    }
}

impl SceneGraph {
    /// Creates an empty scene graph.
    pub fn new() -> SceneGraph {
        SceneGraph {
            nodes: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates a new root node with an identity local transform.
    pub fn spawn(&mut self) -> NodeId {
        let node = Node::new();
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot as usize] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() as u32 - 1)
            }
        }
    }

    /// Removes a node.
    ///
    /// The node is detached from its parent, and its children become root
    /// nodes, keeping the world pose they had under the removed node.
    pub fn remove(&mut self, id: NodeId) {
        let children = self.node(id).children.clone();
        for child in children {
            let _ = self.set_parent(child, None);
        }

        if let Some(parent) = self.node(id).parent {
            self.detach_child(parent, id);
        }

        self.nodes[id.index()] = None;
        self.free.push(id.0);
    }

    /// The number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Tests whether this graph has no node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tests whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index())
            .map_or(false, |slot| slot.is_some())
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.index()]
            .as_ref()
            .expect("accessed a node that was removed from the scene graph")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.index()]
            .as_mut()
            .expect("accessed a node that was removed from the scene graph")
    }

    /*
     * User data.
     */

    /// The opaque user data attached to a node (zero by default).
    pub fn user_data(&self, id: NodeId) -> u64 {
        self.node(id).user_data
    }

    /// Attaches opaque user data to a node. It is round-tripped without
    /// interpretation.
    pub fn set_user_data(&mut self, id: NodeId, user_data: u64) {
        self.node_mut(id).user_data = user_data;
    }

    /*
     * Local state.
     */

    /// The node's position relative to its parent.
    pub fn local_position(&self, id: NodeId) -> Vector {
        self.node(id).local_position
    }

    /// The node's rotation relative to its parent.
    pub fn local_rotation(&self, id: NodeId) -> UnitQuaternion<Real> {
        self.node(id).local_rotation
    }

    /// The node's scale relative to its parent.
    pub fn local_scale(&self, id: NodeId) -> Vector {
        self.node(id).local_scale
    }

    /// Sets the node's position relative to its parent.
    pub fn set_local_position(&mut self, id: NodeId, position: Vector) {
        let node = self.node_mut(id);
        node.local_position = position;
        node.local_dirty = true;
        self.mark_world_dirty(id);
    }

    /// Sets the node's rotation relative to its parent.
    pub fn set_local_rotation(&mut self, id: NodeId, rotation: UnitQuaternion<Real>) {
        let node = self.node_mut(id);
        node.local_rotation = rotation;
        node.local_dirty = true;
        self.mark_world_dirty(id);
    }

    /// Sets the node's scale relative to its parent.
    pub fn set_local_scale(&mut self, id: NodeId, scale: Vector) {
        let node = self.node_mut(id);
        node.local_scale = scale;
        node.local_dirty = true;
        self.mark_world_dirty(id);
    }

    /*
     * Matrices.
     */

    /// The node's local transform matrix `T · R · S`, recomputed if a local
    /// component changed since the last call.
    pub fn local_matrix(&mut self, id: NodeId) -> Matrix4<Real> {
        let node = self.node_mut(id);
        if node.local_dirty {
            node.local_matrix = trs::compose(
                &node.local_position,
                &node.local_rotation,
                &node.local_scale,
            );
            node.local_dirty = false;
        }

        node.local_matrix
    }

    /// Overwrites the node's local matrix, decomposing it back into the
    /// node's translation, rotation, and scale components.
    pub fn set_local_matrix(&mut self, id: NodeId, matrix: &Matrix4<Real>) {
        let (translation, rotation, scale) = trs::decompose(matrix);

        let node = self.node_mut(id);
        node.local_matrix = *matrix;
        node.local_position = translation;
        node.local_rotation = rotation;
        node.local_scale = scale;
        node.local_dirty = false;
        self.mark_world_dirty(id);
    }

    /// The node's world transform matrix, recomputing any dirty matrix on
    /// the path to the root.
    pub fn world_matrix(&mut self, id: NodeId) -> Matrix4<Real> {
        self.refresh_world_matrix(id);
        self.node(id).world_matrix
    }

    /// The node's world-space position.
    pub fn world_position(&mut self, id: NodeId) -> Vector {
        trs::translation(&self.world_matrix(id))
    }

    /// The node's world-space rotation.
    pub fn world_rotation(&mut self, id: NodeId) -> UnitQuaternion<Real> {
        trs::rotation(&self.world_matrix(id))
    }

    /// The node's world-space scale.
    pub fn world_scale(&mut self, id: NodeId) -> Vector {
        trs::scale(&self.world_matrix(id))
    }

    /*
     * Translation and rotation helpers.
     */

    /// Translates the node along a vector expressed in its own local frame.
    pub fn translate_local(&mut self, id: NodeId, delta: &Vector) {
        let node = self.node_mut(id);
        node.local_position += node.local_rotation * *delta;
        node.local_dirty = true;
        self.mark_world_dirty(id);
    }

    /// Translates the node along a world-space vector.
    pub fn translate_world(&mut self, id: NodeId, delta: &Vector) {
        let world_position = self.world_position(id) + delta;

        match self.node(id).parent {
            Some(parent) => {
                let inv_parent = trs::inverse(&self.world_matrix(parent));
                let local = inv_parent.transform_point(&Point::from(world_position));
                self.set_local_position(id, local.coords);
            }
            None => self.set_local_position(id, world_position),
        }
    }

    /// Applies a rotation in the node's local frame.
    pub fn rotate_local(&mut self, id: NodeId, delta: &UnitQuaternion<Real>) {
        let mut rotation = self.node(id).local_rotation * delta;
        rotation.renormalize();
        self.set_local_rotation(id, rotation);
    }

    /// Applies a world-space rotation to the node.
    pub fn rotate_world(&mut self, id: NodeId, delta: &UnitQuaternion<Real>) {
        let new_world_rotation = delta * self.world_rotation(id);

        match self.node(id).parent {
            Some(parent) => {
                let mut local = self.world_rotation(parent).inverse() * new_world_rotation;
                local.renormalize();
                self.set_local_rotation(id, local);
            }
            None => self.set_local_rotation(id, new_world_rotation),
        }
    }

    /*
     * Hierarchy.
     */

    /// The node's parent, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's children, in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The number of children of a node.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// The `index`-th child of a node, or `None` if out of range.
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// Re-parents a node, keeping its world pose.
    ///
    /// The node is appended at the end of the new parent's child list, and
    /// its local transform is recomputed as `parent_world⁻¹ · world` (or
    /// the world matrix itself when detaching) so nothing moves. Passing
    /// the current parent is a no-op; making a node an ancestor of itself
    /// fails with [`InvalidParent`].
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<(), InvalidParent> {
        if self.node(id).parent == parent {
            return Ok(());
        }

        if let Some(new_parent) = parent {
            if new_parent == id || self.is_ancestor(id, new_parent) {
                return Err(InvalidParent);
            }
        }

        self.refresh_world_matrix(id);
        let world = self.node(id).world_matrix;

        if let Some(old_parent) = self.node(id).parent {
            self.detach_child(old_parent, id);
        }
        self.node_mut(id).parent = parent;

        match parent {
            Some(new_parent) => {
                self.node_mut(new_parent).children.push(id);
                let parent_world = self.world_matrix(new_parent);
                self.set_local_matrix(id, &(trs::inverse(&parent_world) * world));
            }
            None => self.set_local_matrix(id, &world),
        }

        Ok(())
    }

    /// Moves the child at position `from` to position `to` in the node's
    /// child list. Out-of-range or equal indices leave the list untouched.
    pub fn reorder_child(&mut self, id: NodeId, from: usize, to: usize) {
        let children = &mut self.node_mut(id).children;
        if from >= children.len() || to >= children.len() || from == to {
            return;
        }

        let child = children.remove(from);
        children.insert(to, child);
    }

    /*
     * Space conversions.
     */

    /// The node's world-space forward direction: local `+Z` transformed by
    /// the world matrix (scale included).
    pub fn forward(&mut self, id: NodeId) -> Vector {
        self.transform_direction(id, &Vector::z())
    }

    /// The node's world-space up direction: local `+Y` transformed by the
    /// world matrix (scale included).
    pub fn up(&mut self, id: NodeId) -> Vector {
        self.transform_direction(id, &Vector::y())
    }

    /// The node's world-space right direction: local `+X` transformed by
    /// the world matrix (scale included).
    pub fn right(&mut self, id: NodeId) -> Vector {
        self.transform_direction(id, &Vector::x())
    }

    /// Maps a point from the node's local space to world space.
    pub fn transform_point(&mut self, id: NodeId, point: &Point) -> Point {
        self.world_matrix(id).transform_point(point)
    }

    /// Maps a direction from the node's local space to world space. The
    /// world matrix's scale applies; no translation does.
    pub fn transform_direction(&mut self, id: NodeId, direction: &Vector) -> Vector {
        self.world_matrix(id).transform_vector(direction)
    }

    /// Maps a world-space point to the node's local space.
    pub fn inverse_transform_point(&mut self, id: NodeId, point: &Point) -> Point {
        trs::inverse(&self.world_matrix(id)).transform_point(point)
    }

    /// Maps a world-space direction to the node's local space.
    pub fn inverse_transform_direction(&mut self, id: NodeId, direction: &Vector) -> Vector {
        trs::inverse(&self.world_matrix(id)).transform_vector(direction)
    }

    /*
     * Internals.
     */

    fn detach_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.node_mut(parent).children;
        if let Some(position) = children.iter().position(|c| *c == child) {
            let _ = children.remove(position);
        }
    }

    /// Whether `ancestor` appears on the parent chain of `id`.
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.node(id).parent;
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.node(node).parent;
        }

        false
    }

    fn mark_world_dirty(&mut self, id: NodeId) {
        self.node_mut(id).world_dirty = true;

        for i in 0..self.node(id).children.len() {
            let child = self.node(id).children[i];
            self.mark_world_dirty(child);
        }
    }

    fn refresh_world_matrix(&mut self, id: NodeId) {
        if !self.node(id).world_dirty {
            return;
        }

        let local = self.local_matrix(id);
        let world = match self.node(id).parent {
            Some(parent) => {
                self.refresh_world_matrix(parent);
                self.node(parent).world_matrix * local
            }
            None => local,
        };

        let node = self.node_mut(id);
        node.world_matrix = world;
        node.world_dirty = false;
    }
}
