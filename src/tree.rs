//! Internal module with the layout strategy seam and the path helpers both
//! strategies share.

use crate::types::{EndpointRecord, TreeNode};

/// A way of turning an ordered endpoint list into positioned tree nodes.
///
/// Implementations keep all pass state local to [`build`](LayoutStrategy::build),
/// so one strategy value can serve any number of concurrent builds.
pub trait LayoutStrategy {
    /// Lays out `records` in the order given and returns the nodes in display order.
    fn build(&self, records: &[EndpointRecord]) -> Vec<TreeNode>;
}

pub(crate) fn segment_count(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// A lone leading slash does not make `/users` a multi-segment path.
pub(crate) fn has_multiple_segments(path: &str) -> bool {
    segment_count(path) > 1
}

/// `path` with its last segment removed, or `None` when nothing meaningful is left.
///
/// `/a/b/c` gives `/a/b`, `/a` gives `None`.
pub(crate) fn parent_path(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    let cut = trimmed.rfind('/')?;
    let parent = trimmed[..cut].trim_end_matches('/');
    (segment_count(parent) > 0).then_some(parent)
}

/// Successively shorter prefixes of `path`, longest first.
pub(crate) fn ancestor_prefixes(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent_path(path), |p| parent_path(p))
}

/// Plain string prefix test. An empty prefix never matches.
pub(crate) fn starts_with_path(path: &str, prefix: &str) -> bool {
    !prefix.is_empty() && path.starts_with(prefix)
}

/// Sets `has_children` on every node followed by a node extending its path.
pub(crate) fn mark_parents(nodes: &mut [TreeNode]) {
    for i in 0..nodes.len() {
        let (head, tail) = nodes.split_at_mut(i + 1);
        let node = &mut head[i];
        node.has_children = tail
            .iter()
            .any(|later| starts_with_path(&later.path, &node.path));
    }
}
