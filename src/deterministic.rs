//! Path-sorted layout with synthesized group nodes.

use crate::label::compute_label;
use crate::tree::{
    LayoutStrategy, ancestor_prefixes, has_multiple_segments, parent_path, starts_with_path,
};
use crate::types::{EndpointRecord, TreeNode};
use std::collections::HashSet;

/// Exact, prefix-based layout for path-sorted input.
///
/// Each record is nested under the closest earlier node whose path is a prefix
/// of its own. When two endpoints share a prefix that has no endpoint of its
/// own, a virtual group node is inserted for that prefix and the nodes already
/// below it are shifted one level deeper.
///
/// Input must be sorted with [`sort_by_path`](crate::sort_by_path); unsorted
/// input yields a valid but poorer tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicLayout;

impl LayoutStrategy for DeterministicLayout {
    fn build(&self, records: &[EndpointRecord]) -> Vec<TreeNode> {
        let mut pass = Pass::default();
        for (position, record) in records.iter().enumerate() {
            if position == 0 {
                match first_group(&record.path) {
                    Some(group) => pass.open_group(group),
                    None => {
                        pass.append_root(record);
                        continue;
                    }
                }
            }
            pass.place(record);
        }
        pass.finish()
    }
}

fn first_group(path: &str) -> Option<&str> {
    if has_multiple_segments(path) {
        parent_path(path)
    } else {
        None
    }
}

/// State of one build call.
///
/// `nodes` is an arena that only grows; `order` holds arena indices in display
/// order and is the only list that sees mid-list insertion.
#[derive(Default)]
struct Pass {
    nodes: Vec<TreeNode>,
    order: Vec<usize>,
    /// Registered nodes, oldest first. Indents are read from the live node.
    known: Vec<usize>,
    registered: HashSet<String>,
    previous: Option<usize>,
}

impl Pass {
    fn alloc(&mut self, node: TreeNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn register(&mut self, index: usize) {
        if self.registered.insert(self.nodes[index].path.clone()) {
            self.known.push(index);
        }
    }

    /// Appends a real node and makes it the fast-path reference.
    fn append(&mut self, node: TreeNode) {
        let index = self.alloc(node);
        self.order.push(index);
        self.register(index);
        self.previous = Some(index);
    }

    fn open_group(&mut self, path: &str) {
        #[cfg(feature = "logging")]
        tracing::debug!("Opening group {} for first endpoint", path);
        let index = self.alloc(TreeNode::virtual_group(path.to_string(), 0));
        self.order.push(index);
        self.register(index);
        self.previous = Some(index);
    }

    fn append_root(&mut self, record: &EndpointRecord) {
        let mut node = TreeNode::from_record(record);
        let label = compute_label(&node.path, None, node.name.as_deref());
        node.label = label.text;
        node.has_short_path = label.short;
        self.append(node);
    }

    fn append_child(&mut self, record: &EndpointRecord, parent: usize) {
        let parent_node = &mut self.nodes[parent];
        parent_node.has_children = true;
        let indent = parent_node.indent + 1;
        let mut node = TreeNode::from_record(record);
        let label = compute_label(&node.path, Some(parent_node.path.as_str()), node.name.as_deref());
        node.indent = indent;
        node.label = label.text;
        node.has_short_path = label.short;
        self.append(node);
    }

    fn place(&mut self, record: &EndpointRecord) {
        let path = record.path.as_str();
        if let Some(previous) = self.previous {
            if starts_with_path(path, &self.nodes[previous].path) {
                self.append_child(record, previous);
                return;
            }
        }
        if let Some(ancestor) = self.find_ancestor(path) {
            self.append_child(record, ancestor);
            return;
        }
        if has_multiple_segments(path) {
            if let Some(group) = self.insert_common_root(path) {
                self.append_child(record, group);
                return;
            }
        }
        self.append_root(record);
    }

    /// Most recently registered node whose path prefixes one of `path`'s ancestors.
    fn find_ancestor(&self, path: &str) -> Option<usize> {
        ancestor_prefixes(path).find_map(|candidate| {
            self.known
                .iter()
                .rev()
                .copied()
                .find(|&index| starts_with_path(candidate, &self.nodes[index].path))
        })
    }

    /// Inserts a virtual node for the longest ancestor prefix of `path` that an
    /// already emitted node also starts with.
    fn insert_common_root(&mut self, path: &str) -> Option<usize> {
        for candidate in ancestor_prefixes(path) {
            let Some(position) = self
                .order
                .iter()
                .position(|&index| starts_with_path(&self.nodes[index].path, candidate))
            else {
                continue;
            };
            let indent = self.nodes[self.order[position]].indent;
            #[cfg(feature = "logging")]
            tracing::debug!(
                "Inserting common root {} at position {} (indent {})",
                candidate,
                position,
                indent
            );
            let group = self.alloc(TreeNode::virtual_group(candidate.to_string(), indent));
            self.order.insert(position, group);
            self.reindent_under(group);
            self.register(group);
            return Some(group);
        }
        None
    }

    /// Pushes every emitted node below `group` one level deeper. Nodes still
    /// labelled with their full path get a label relative to the group.
    fn reindent_under(&mut self, group: usize) {
        let prefix = self.nodes[group].path.clone();
        for &index in &self.order {
            if index == group {
                continue;
            }
            let node = &mut self.nodes[index];
            if !starts_with_path(&node.path, &prefix) {
                continue;
            }
            node.indent += 1;
            if !node.has_short_path {
                let label = compute_label(&node.path, Some(prefix.as_str()), node.name.as_deref());
                node.label = label.text;
                node.has_short_path = label.short;
            }
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Re-indented nodes under {}", prefix);
    }

    fn finish(self) -> Vec<TreeNode> {
        let mut slots: Vec<Option<TreeNode>> = self.nodes.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&index| slots[index].take())
            .collect()
    }
}
