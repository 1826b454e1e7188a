use std::collections::HashMap;
use std::fmt;

use crate::dispatch::Listener;
use crate::transform::{Orientation, Translate};

/// Handle to a node in a [`Tree`].
///
/// Handles are only meaningful for the tree that created them. Nodes are never
/// freed, so a handle stays valid after its node is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual state of the surface associated with a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    /// Resting (or target) transform. Renderers interpolate toward it while a
    /// transition is in flight.
    pub transform: Translate,
    /// When set, transform changes apply immediately instead of animating.
    pub frozen: bool,
    pub z_index: i16,
    pub visible: bool,
    /// Laid out width in pixels, supplied by the host.
    pub width: f64,
    /// Laid out height in pixels, supplied by the host.
    pub height: f64,
}

impl Default for Pane {
    fn default() -> Self {
        Self {
            transform: Translate::ZERO,
            frozen: false,
            z_index: 0,
            visible: true,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Pane {
    /// Size of the pane along the given axis.
    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

pub(crate) struct NodeData {
    key: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub(crate) listeners: HashMap<String, Vec<Listener>>,
    pane: Pane,
}

/// Arena of panes with parent links, ordered children and listener tables.
///
/// A node is a child of at most one parent at a time: attaching a node that
/// already has a parent detaches it first.
#[derive(Default)]
pub struct Tree {
    pub(crate) nodes: Vec<NodeData>,
    /// Registered listener count per event type, across all nodes.
    pub(crate) counts: HashMap<String, usize>,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("listened_types", &self.counts.len())
            .finish()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    pub fn create(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            key: format!("pane-{}", id.0),
            parent: None,
            children: Vec::new(),
            listeners: HashMap::new(),
            pane: Pane::default(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Human readable key used in log output.
    pub fn key(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].key
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn pane(&self, id: NodeId) -> &Pane {
        &self.nodes[id.index()].pane
    }

    pub fn pane_mut(&mut self, id: NodeId) -> &mut Pane {
        &mut self.nodes[id.index()].pane
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let index = self.children(parent).len();
        self.insert(parent, index, child);
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        self.insert(parent, 0, child);
    }

    /// Insert `child` at `index` among the children of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` is `parent` or one of its ancestors.
    pub fn insert(&mut self, parent: NodeId, index: usize, child: NodeId) {
        assert!(
            child != parent && !self.is_ancestor(child, parent),
            "cannot attach {child} beneath its own descendant {parent}"
        );
        self.detach(child);
        let children = &mut self.nodes[parent.index()].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Remove `child` from `parent`. Returns false if it was not a child.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child).is_some()
    }

    /// Detach `id` from its parent, returning the former parent.
    pub fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id.index()].parent.take()?;
        self.nodes[parent.index()].children.retain(|c| *c != id);
        Some(parent)
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }
}
