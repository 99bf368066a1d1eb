//! Node storage: `NodeId` handles and the `FileNode` arena slot

use indexmap::IndexMap;

/// Identifier for a node within its owning [`FileTree`](crate::tree::FileTree).
///
/// Internally an index into the tree's node arena. Ids are handed out by
/// insertion operations and remain valid for the lifetime of the tree that
/// produced them; they carry no meaning for any other tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) const fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A single named entry in the hierarchy.
///
/// Owns the insertion-ordered mapping from child name to child id, and
/// optionally an attached data payload when the node corresponds to a
/// terminal path entry (a file in the caller's domain). Intermediate
/// directory nodes carry no payload unless a path was inserted ending
/// exactly at that segment.
#[derive(Debug, Clone)]
pub struct FileNode<T> {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: IndexMap<String, NodeId>,
    pub(crate) data: Option<T>,
}

impl<T> FileNode<T> {
    /// Create a detached node with the given name, no children, and no data.
    ///
    /// Any string is accepted, including the empty string; the tree's
    /// insertion algorithm never produces empty-named nodes because empty
    /// path segments are skipped.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: IndexMap::new(),
            data: None,
        }
    }

    /// The segment naming this node within its parent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached payload, if this node terminates an inserted path.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to the attached payload.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Id of the parent node; `None` for the root and for detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Look up a child by exact name.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Iterate children as `(name, id)` pairs in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
