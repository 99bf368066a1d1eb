//! Strata: Layer Content Trees
//!
//! Builds navigable directory trees out of flat path listings, the shape an
//! image layer reports its contents in, so a UI can fold, walk, and summarize
//! what each layer touched.

pub mod entry;
pub mod tree;
pub mod view;

pub use entry::{FileInfo, FileKind};
pub use tree::{FileNode, FileTree, NodeId};
