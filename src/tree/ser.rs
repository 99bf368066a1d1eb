//! Serialized tree form for renderers across an IPC boundary
//!
//! A populated tree serializes to the nested shape a tree-view component
//! consumes directly: each node carries its `name`, its payload under `data`
//! when present, and a `children` map in insertion order when non-empty.
//! There is no matching deserializer; trees are rebuilt from entry listings,
//! not from stored form.

use crate::tree::builder::FileTree;
use crate::tree::node::NodeId;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

impl<T: Serialize> Serialize for FileTree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FileTree", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("file_size", &self.file_size())?;
        state.serialize_field(
            "root",
            &NodeRef {
                tree: self,
                id: self.root(),
            },
        )?;
        state.end()
    }
}

/// One node position within a tree, serialized as the nested node object.
struct NodeRef<'a, T> {
    tree: &'a FileTree<T>,
    id: NodeId,
}

impl<'a, T: Serialize> Serialize for NodeRef<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(node) = self.tree.get(self.id) else {
            // Unreachable through the public API; ids are produced by the
            // tree being serialized.
            return serializer.serialize_none();
        };

        let fields =
            1 + usize::from(node.data().is_some()) + usize::from(node.has_children());
        let mut state = serializer.serialize_struct("FileNode", fields)?;
        state.serialize_field("name", node.name())?;
        if let Some(data) = node.data() {
            state.serialize_field("data", data)?;
        }
        if node.has_children() {
            state.serialize_field(
                "children",
                &ChildrenRef {
                    tree: self.tree,
                    id: self.id,
                },
            )?;
        }
        state.end()
    }
}

/// The children of one node, serialized as a name-to-node map in insertion
/// order.
struct ChildrenRef<'a, T> {
    tree: &'a FileTree<T>,
    id: NodeId,
}

impl<'a, T: Serialize> Serialize for ChildrenRef<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(node) = self.tree.get(self.id) else {
            return serializer.serialize_none();
        };

        let mut map = serializer.serialize_map(Some(node.child_count()))?;
        for (name, child) in node.children() {
            map.serialize_entry(
                name,
                &NodeRef {
                    tree: self.tree,
                    id: child,
                },
            )?;
        }
        map.end()
    }
}
