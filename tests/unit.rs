use navtree::{
    DeterministicLayout, EndpointRecord, Layout, LayoutBuilder, LayoutStrategy, NaturalLayout,
    Operation, TreeNode, compute_label, layout, sort_by_path,
};
fn records(paths: &[&str]) -> Vec<EndpointRecord> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| EndpointRecord::new(*p).with_id(format!("e{}", i)))
        .collect()
}
fn summary(nodes: &[TreeNode]) -> Vec<(&str, usize, &str)> {
    nodes
        .iter()
        .map(|n| (n.path.as_str(), n.indent, n.label.as_str()))
        .collect()
}
fn assert_depth_invariant(nodes: &[TreeNode]) {
    for (i, node) in nodes.iter().enumerate() {
        let parent = nodes[..i]
            .iter()
            .rev()
            .find(|p| !p.path.is_empty() && p.path != node.path && node.path.starts_with(&p.path));
        let expected = parent.map_or(0, |p| p.indent + 1);
        assert_eq!(node.indent, expected, "indent of {}", node.path);
    }
}
fn assert_parent_flags(nodes: &[TreeNode]) {
    for (i, node) in nodes.iter().enumerate() {
        let expected = nodes[i + 1..]
            .iter()
            .any(|later| !node.path.is_empty() && later.path.starts_with(&node.path));
        assert_eq!(node.has_children, expected, "hasChildren of {}", node.path);
    }
}
#[test]
fn test_sort_is_lexicographic_and_stable() {
    let input = vec![
        EndpointRecord::new("/b").with_id("1"),
        EndpointRecord::new("/a10").with_id("2"),
        EndpointRecord::new("/a2").with_id("3"),
        EndpointRecord::new("/b").with_id("4"),
        EndpointRecord::new("/A").with_id("5"),
    ];
    let sorted = sort_by_path(&input);
    let order: Vec<_> = sorted.iter().map(|r| r.id.as_deref().unwrap()).collect();
    assert_eq!(order, vec!["5", "2", "3", "1", "4"]);
    assert_eq!(sort_by_path(&sorted), sorted);
    assert!(sort_by_path(&[]).is_empty());
}
#[test]
fn test_label_rules() {
    let label = compute_label("/users/{id}", Some("/users"), None);
    assert_eq!(label.text, "/{id}");
    assert!(label.short);
    let label = compute_label("/files-archive", Some("/files"), None);
    assert_eq!(label.text, "/archive");
    let label = compute_label("/users", None, None);
    assert_eq!(label.text, "/users");
    assert!(!label.short);
    let label = compute_label("/users/{id}", Some("/users"), Some("User"));
    assert_eq!(label.text, "User");
    assert!(!label.short);
    assert_eq!(compute_label("", None, None).text, "/");
    assert_eq!(compute_label("/a", Some("/a"), None).text, "/");
}
#[test]
fn test_single_endpoint() {
    let nodes = DeterministicLayout.build(&records(&["/users"]));
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].indent, 0);
    assert_eq!(nodes[0].label, "/users");
    assert!(!nodes[0].has_children);
    assert!(!nodes[0].is_virtual);
}
#[test]
fn test_virtual_parent_for_siblings() {
    let nodes = DeterministicLayout.build(&records(&["/a/b", "/a/c"]));
    assert_eq!(
        summary(&nodes),
        vec![("/a", 0, "/a"), ("/a/b", 1, "/b"), ("/a/c", 1, "/c")]
    );
    assert!(nodes[0].is_virtual);
    assert!(nodes[0].has_children);
    assert!(nodes[0].id.is_none());
    assert!(nodes[0].operations.is_empty());
    assert!(nodes[1].has_short_path);
    assert!(nodes[2].has_short_path);
}
#[test]
fn test_nested_branch_under_virtual_root() {
    let nodes = DeterministicLayout.build(&records(&["/a/b", "/a/b/c", "/a/d"]));
    assert_eq!(
        summary(&nodes),
        vec![
            ("/a", 0, "/a"),
            ("/a/b", 1, "/b"),
            ("/a/b/c", 2, "/c"),
            ("/a/d", 1, "/d"),
        ]
    );
    assert_eq!(nodes.iter().filter(|n| n.is_virtual).count(), 1);
    assert!(nodes[1].has_children);
    assert!(!nodes[3].has_children);
}
#[test]
fn test_common_root_is_inserted_retroactively() {
    let nodes = DeterministicLayout.build(&records(&["/a", "/b/c", "/b/d"]));
    assert_eq!(
        summary(&nodes),
        vec![
            ("/a", 0, "/a"),
            ("/b", 0, "/b"),
            ("/b/c", 1, "/c"),
            ("/b/d", 1, "/d"),
        ]
    );
    assert!(nodes[1].is_virtual);
    assert!(nodes[2].has_short_path);
    assert_depth_invariant(&nodes);
    assert_parent_flags(&nodes);
}
#[test]
fn test_common_root_shifts_existing_subtree() {
    let nodes = DeterministicLayout.build(&records(&["/a", "/b/c", "/b/c/x", "/b/d"]));
    assert_eq!(
        summary(&nodes),
        vec![
            ("/a", 0, "/a"),
            ("/b", 0, "/b"),
            ("/b/c", 1, "/c"),
            ("/b/c/x", 2, "/x"),
            ("/b/d", 1, "/d"),
        ]
    );
    assert_depth_invariant(&nodes);
}
#[test]
fn test_deterministic_invariants_on_api() {
    let input = sort_by_path(&records(&[
        "/users",
        "/users/{id}",
        "/users/{id}/orders",
        "/users/{id}/orders/{orderId}",
        "/orgs/{org}/repos",
        "/orgs/{org}/members",
        "/health",
        "/v1/items/{id}",
        "/v1/items",
        "/v1/carts/{id}",
    ]));
    let nodes = DeterministicLayout.build(&input);
    assert_depth_invariant(&nodes);
    assert_parent_flags(&nodes);
    assert!(nodes.iter().all(|n| !n.label.is_empty()));
    let real = nodes.iter().filter(|n| !n.is_virtual).count();
    assert_eq!(real, input.len());
}
#[test]
fn test_adjacent_duplicates_take_fast_path() {
    let nodes = DeterministicLayout.build(&records(&["/a", "/a"]));
    assert_eq!(summary(&nodes), vec![("/a", 0, "/a"), ("/a", 1, "/")]);
    assert!(nodes[0].has_children);
}
#[test]
fn test_non_adjacent_duplicate_is_new_root() {
    let nodes = DeterministicLayout.build(&records(&["/a", "/b", "/a"]));
    assert_eq!(
        summary(&nodes),
        vec![("/a", 0, "/a"), ("/b", 0, "/b"), ("/a", 0, "/a")]
    );
}
#[test]
fn test_empty_path_is_a_root() {
    let nodes = DeterministicLayout.build(&records(&["", "/a", ""]));
    assert_eq!(nodes.len(), 3);
    assert!(nodes.iter().all(|n| n.indent == 0));
    assert_eq!(nodes[0].label, "/");
    assert!(!nodes[0].has_children);
    let nodes = NaturalLayout.build(&records(&["", "/a/b", ""]));
    assert!(nodes.iter().all(|n| n.indent == 0));
    assert!(DeterministicLayout.build(&[]).is_empty());
    assert!(NaturalLayout.build(&[]).is_empty());
}
#[test]
fn test_explicit_name_wins() {
    let input = vec![
        EndpointRecord::new("/a/b").with_name("Bees"),
        EndpointRecord::new("/a/b/c").with_name("Sea"),
        EndpointRecord::new("/x/y/z").with_name(""),
    ];
    for nodes in [DeterministicLayout.build(&input), NaturalLayout.build(&input)] {
        let named: Vec<_> = nodes.iter().filter(|n| n.name.as_deref().is_some_and(|s| !s.is_empty())).collect();
        assert_eq!(named.len(), 2);
        for node in named {
            assert_eq!(Some(node.label.as_str()), node.name.as_deref());
            assert!(!node.has_short_path);
        }
    }
}
#[test]
fn test_natural_follows_previous_path() {
    let nodes = NaturalLayout.build(&records(&["/a", "/a/b", "/a/b/c", "/a/d"]));
    assert_eq!(
        summary(&nodes),
        vec![
            ("/a", 0, "/a"),
            ("/a/b", 1, "/b"),
            ("/a/b/c", 2, "/c"),
            ("/a/d", 1, "/d"),
        ]
    );
    assert!(nodes[0].has_children);
    assert!(nodes[1].has_children);
    assert!(!nodes[3].has_children);
    assert!(nodes[1].has_short_path);
    assert!(nodes.iter().all(|n| !n.is_virtual));
}
#[test]
fn test_natural_is_sibling_order_sensitive() {
    let input = records(&["/a/b", "/c", "/a/d"]);
    let natural = NaturalLayout.build(&input);
    assert_eq!(
        summary(&natural),
        vec![("/a/b", 0, "/a/b"), ("/c", 0, "/c"), ("/a/d", 0, "/a/d")]
    );
    let deterministic = DeterministicLayout.build(&sort_by_path(&input));
    let det_ad = deterministic.iter().find(|n| n.path == "/a/d").unwrap();
    assert_eq!(det_ad.indent, 1);
    assert!(natural[2].indent < det_ad.indent);
    assert!(!natural[0].has_children);
}
#[test]
fn test_natural_without_leading_slash_falls_back_to_full_path() {
    let nodes = NaturalLayout.build(&records(&["a", "a/b"]));
    assert_eq!(nodes[1].indent, 1);
    assert_eq!(nodes[1].label, "a/b");
    assert!(!nodes[1].has_short_path);
}
#[test]
fn test_operations_pass_through() {
    let op = Operation {
        method: "get".into(),
        id: "op1".into(),
        name: None,
    };
    let input = vec![EndpointRecord::new("/a/b").with_id("x").with_operation(op.clone())];
    for nodes in [DeterministicLayout.build(&input), NaturalLayout.build(&input)] {
        let node = nodes.iter().find(|n| n.path == "/a/b").unwrap();
        assert_eq!(node.operations, vec![op.clone()]);
        assert_eq!(node.id.as_deref(), Some("x"));
    }
}
#[test]
fn test_builder_defaults_follow_strategy() {
    let options = LayoutBuilder::new(Layout::Deterministic).build();
    assert!(options.sort_paths);
    let options = LayoutBuilder::new(Layout::Natural).build();
    assert!(!options.sort_paths);
    let options = LayoutBuilder::new(Layout::Natural).sort_paths(true).build();
    assert!(options.sort_paths);
}
#[test]
fn test_layout_sorts_for_deterministic() {
    let input = records(&["/a/c", "/b", "/a/b"]);
    let options = LayoutBuilder::new(Layout::Deterministic).build();
    let nodes = layout(&input, &options);
    assert_eq!(
        summary(&nodes),
        vec![("/a", 0, "/a"), ("/a/b", 1, "/b"), ("/a/c", 1, "/c"), ("/b", 0, "/b")]
    );
    let options = LayoutBuilder::new(Layout::Natural).build();
    let nodes = layout(&input, &options);
    let paths: Vec<_> = nodes.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(paths, vec!["/a/c", "/b", "/a/b"]);
}
