//! Segment handling for slash-delimited entry paths

/// Iterate the non-empty `/`-separated segments of `path`.
///
/// Leading, trailing, and repeated slashes produce empty segments, which are
/// skipped entirely: they neither name a node nor advance past one. This is
/// the single splitting rule shared by insertion and lookup, so `"/a//b/"`
/// and `"a/b"` always address the same node.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Canonical form of a path: its non-empty segments joined with single
/// slashes, without a leading slash.
///
/// A path with no non-empty segments (empty string, `"/"`, `"//"`)
/// normalizes to the empty string, which addresses the tree root.
pub fn normalize(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}
