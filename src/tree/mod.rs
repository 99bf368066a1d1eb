//! Layer File Tree
//!
//! Represents the flat file listing of a container image layer as a
//! navigable directory tree: paths are inserted one at a time and the
//! resulting node graph is walked read-only by a tree-view renderer.

pub mod builder;
pub mod node;
pub mod path;
pub mod walker;

mod ser;

pub use builder::FileTree;
pub use node::{FileNode, NodeId};
pub use walker::Walk;
