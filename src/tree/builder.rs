//! The tree container and its insertion algorithm

use crate::tree::node::{FileNode, NodeId};
use crate::tree::path;
use crate::tree::walker::Walk;
use tracing::{debug, trace, warn};

/// A hierarchy of named nodes built from a flat list of slash-delimited
/// paths, one tree per inspected layer.
///
/// The tree owns all of its nodes in an arena; relationships between nodes
/// are expressed as [`NodeId`] indices, so there is no sharing and no cycle
/// can be formed. [`add_path`](FileTree::add_path) is the only entry point
/// that grows the hierarchy from caller input; everything else is read-only
/// navigation for the consuming renderer.
///
/// A tree is constructed fresh per query, populated in one pass, then handed
/// to a read-only consumer and dropped with the view that displayed it.
#[derive(Debug, Clone)]
pub struct FileTree<T> {
    name: String,
    nodes: Vec<FileNode<T>>,
    file_size: i64,
}

impl<T> FileTree<T> {
    /// Create an empty tree with the given display name and a fresh root
    /// node named `"/"`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: vec![FileNode::new("/")],
            file_size: 0,
        }
    }

    /// Build a tree from an iterator of `(path, entry)` pairs, inserting
    /// each pair via [`add_path`](FileTree::add_path).
    ///
    /// This is the bulk form of the population pass a caller performs after
    /// an external enumerator reports a layer's contents. The aggregate
    /// size counter is untouched; feed it separately through
    /// [`add_file_size`](FileTree::add_file_size).
    pub fn from_entries<P, I>(name: impl Into<String>, entries: I) -> Self
    where
        P: AsRef<str>,
        I: IntoIterator<Item = (P, T)>,
    {
        let mut tree = Self::new(name);
        tree.extend(entries);
        tree
    }

    /// Insert every `(path, entry)` pair into this tree, returning the
    /// number of entries inserted.
    pub fn extend<P, I>(&mut self, entries: I) -> usize
    where
        P: AsRef<str>,
        I: IntoIterator<Item = (P, T)>,
    {
        let mut inserted = 0;
        for (entry_path, entry) in entries {
            self.add_path(entry_path.as_ref(), entry);
            inserted += 1;
        }
        debug!(
            tree = %self.name,
            entries = inserted,
            nodes = self.nodes.len(),
            "populated file tree"
        );
        inserted
    }

    /// The human-readable label for the whole tree, e.g. a layer identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The running aggregate size in bytes.
    ///
    /// This counter is mutated only by [`add_file_size`](FileTree::add_file_size);
    /// it is never derived from inserted entries, so a caller that wants an
    /// accurate total must maintain it alongside the insertion pass.
    pub fn file_size(&self) -> i64 {
        self.file_size
    }

    /// Add `bytes` to the aggregate size counter.
    ///
    /// No bounds checking is performed; negative values decrease the total.
    pub fn add_file_size(&mut self, bytes: i64) {
        self.file_size += bytes;
    }

    /// Id of the root node. The root always exists and is named `"/"`.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by id. Returns `None` for ids that did not come from this
    /// tree.
    pub fn get(&self, id: NodeId) -> Option<&FileNode<T>> {
        self.nodes.get(id.index())
    }

    /// Mutable access to a node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut FileNode<T>> {
        self.nodes.get_mut(id.index())
    }

    /// Total number of nodes allocated in the arena, root included.
    ///
    /// Equals the number of reachable nodes as long as no subtree has been
    /// detached by a clobbering [`add_child`](FileTree::add_child) call.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been inserted: no node besides the root and no
    /// payload attached to it.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].data.is_none()
    }

    /// Allocate a new child of `parent` named `name` and return its id.
    ///
    /// Any existing child with the same name is replaced in the parent's
    /// children mapping, detaching its entire subtree; callers that want to
    /// extend an existing subtree must check [`FileNode::child`] first, as
    /// [`add_path`](FileTree::add_path) does. Detached slots are not
    /// reclaimed — a tree is built once and dropped.
    ///
    /// `parent` must be an id handed out by this tree; out-of-range ids
    /// panic.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let id = NodeId::new(self.nodes.len());
        let mut node = FileNode::new(name.clone());
        node.parent = Some(parent);
        self.nodes.push(node);
        if self.nodes[parent.index()].children.insert(name, id).is_some() {
            warn!(parent = parent.index(), "replaced existing child, detaching its subtree");
        }
        id
    }

    /// Insert `entry` at the position described by `path`, creating
    /// intermediate nodes as needed, and return the id of the node that
    /// received it.
    ///
    /// The path is split on `/`; for each non-empty segment the walk
    /// descends into the existing child of that name or creates one. Empty
    /// segments — from a leading slash, a trailing slash, or repeated
    /// slashes — are skipped entirely, so `"/a//b/"` inserts at the same
    /// node as `"a/b"`. The final node's payload is set to `entry`,
    /// overwriting whatever was stored at that exact path before.
    ///
    /// Malformed input never fails: a path with no non-empty segments
    /// attaches `entry` directly to the root.
    pub fn add_path(&mut self, entry_path: &str, entry: T) -> NodeId {
        trace!(path = entry_path, "inserting entry");
        let mut current = NodeId::ROOT;
        for segment in path::segments(entry_path) {
            current = match self.nodes[current.index()].child(segment) {
                Some(child) => child,
                None => self.add_child(current, segment),
            };
        }
        self.nodes[current.index()].data = Some(entry);
        current
    }

    /// Resolve a slash-delimited path to a node id, applying the same
    /// segment rules as [`add_path`](FileTree::add_path).
    ///
    /// Returns `None` if any segment has no matching child. A path with no
    /// non-empty segments resolves to the root.
    pub fn find(&self, entry_path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for segment in path::segments(entry_path) {
            current = self.get(current)?.child(segment)?;
        }
        Some(current)
    }

    /// Id of the parent of `id`; `None` for the root or for foreign ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    /// Number of edges between `id` and the root. The root has depth 0;
    /// foreign ids report 0 as well.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Full `/`-joined path of a node from the root.
    ///
    /// The root renders as `"/"`; deeper nodes as `"/bin/busybox"`. Foreign
    /// ids produce the empty string.
    pub fn path(&self, id: NodeId) -> String {
        if self.get(id).is_none() {
            return String::new();
        }
        let mut names = Vec::new();
        let mut current = id;
        while current != NodeId::ROOT {
            match self.get(current) {
                Some(node) => {
                    names.push(node.name());
                    match node.parent() {
                        Some(parent) => current = parent,
                        None => break,
                    }
                }
                None => break,
            }
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Depth-first pre-order traversal of the whole tree, root first,
    /// children in insertion order.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(self, self.root())
    }

    /// Depth-first pre-order traversal of the subtree rooted at `start`.
    /// Foreign ids yield an empty traversal.
    pub fn walk_from(&self, start: NodeId) -> Walk<'_, T> {
        Walk::new(self, start)
    }

    /// Ids of all nodes carrying a payload (the files of the layer), in
    /// traversal order.
    pub fn files(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk()
            .filter(move |id| self.get(*id).map(|node| node.data().is_some()).unwrap_or(false))
    }

    /// Recursively reorder every node's children by name.
    ///
    /// Insertion order is the default and is what the enumerator reported;
    /// renderers that want a deterministic listing independent of that order
    /// call this once after population.
    pub fn sort_children(&mut self) {
        for node in &mut self.nodes {
            node.children.sort_keys();
        }
    }
}
