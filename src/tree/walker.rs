//! Depth-first traversal over a populated tree

use crate::tree::builder::FileTree;
use crate::tree::node::NodeId;

/// Iterator over node ids in depth-first pre-order: each node before its
/// children, children in insertion order.
///
/// Created by [`FileTree::walk`] and [`FileTree::walk_from`]. This is the
/// traversal a renderer performs to lay out an expandable tree view; the
/// consumer pairs each id with [`FileTree::depth`] or the node accessors as
/// needed.
pub struct Walk<'a, T> {
    tree: &'a FileTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(tree: &'a FileTree<T>, start: NodeId) -> Self {
        // A start id from another tree yields an empty traversal.
        let stack = if tree.get(start).is_some() {
            vec![start]
        } else {
            Vec::new()
        };
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        if let Some(node) = self.tree.get(current) {
            // Push in reverse so the first child is popped first.
            for (_, child) in node.children().rev() {
                self.stack.push(child);
            }
        }
        Some(current)
    }
}
