//! Declaration-order layout compatible with the legacy navigation.

use crate::label::{Label, compute_label};
use crate::tree::{LayoutStrategy, mark_parents};
use crate::types::{EndpointRecord, TreeNode};

/// Order-sensitive layout for endpoints in their declaration order.
///
/// A record is indented by the number of its leading path prefixes that the
/// record right before it shares. Only that one neighbour is consulted, so the
/// same set of endpoints can nest differently depending on input order, e.g.
/// `/a/d` after `/c` stays at the root even if `/a/b` came earlier. No group
/// nodes are synthesized and nodes are only ever appended.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalLayout;

impl LayoutStrategy for NaturalLayout {
    fn build(&self, records: &[EndpointRecord]) -> Vec<TreeNode> {
        let mut base_paths: Vec<&str> = Vec::with_capacity(records.len());
        let mut nodes = Vec::with_capacity(records.len());
        for record in records {
            let path = record.path.as_str();
            let parts: Vec<&str> = path.strip_prefix('/').unwrap_or(path).split('/').collect();
            let indent = shared_prefix_depth(path, &parts, base_paths.last().copied());
            base_paths.push(path);
            let latest = base_paths.last().copied().unwrap_or(path);

            let label = natural_label(record, &parts, indent, latest);
            let mut node = TreeNode::from_record(record);
            node.indent = indent;
            node.label = label.text;
            node.has_short_path = label.short;
            nodes.push(node);
        }
        mark_parents(&mut nodes);
        nodes
    }
}

/// Counts the lower prefixes of `path` (longest first, last segment excluded)
/// that `previous` equals or extends.
fn shared_prefix_depth(path: &str, parts: &[&str], previous: Option<&str>) -> usize {
    let Some(previous) = previous else {
        return 0;
    };
    if parts.len() < 2 {
        return 0;
    }
    let lead = if path.starts_with('/') { "/" } else { "" };
    (1..parts.len())
        .rev()
        .filter(|&end| {
            let candidate = format!("{}{}", lead, parts[..end].join("/"));
            previous == candidate || previous.starts_with(&format!("{}/", candidate))
        })
        .count()
}

fn natural_label(record: &EndpointRecord, parts: &[&str], indent: usize, latest: &str) -> Label {
    if record.name.as_deref().is_some_and(|n| !n.is_empty()) || indent == 0 {
        return compute_label(&record.path, None, record.name.as_deref());
    }
    match trimmed_path(&record.path, parts, indent, latest) {
        Some(text) => Label { text, short: true },
        None => compute_label(&record.path, None, None),
    }
}

/// Rebuilds the path one `/segment` at a time, counting down `indent` for each
/// prefix found in `latest`, and strips the prefix reached at zero.
fn trimmed_path(path: &str, parts: &[&str], indent: usize, latest: &str) -> Option<String> {
    let mut remaining = indent;
    let mut prefix = String::new();
    for part in &parts[..parts.len().saturating_sub(1)] {
        prefix.push('/');
        prefix.push_str(part);
        if latest.contains(prefix.as_str()) {
            remaining -= 1;
        }
        if remaining == 0 {
            break;
        }
    }
    if remaining != 0 {
        return None;
    }
    let trimmed = path.replacen(prefix.as_str(), "", 1);
    (!trimmed.is_empty()).then_some(trimmed)
}
