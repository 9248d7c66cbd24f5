//! # Navtree
//!
//! `navtree` turns a flat list of API endpoint paths (`/users`, `/users/{id}`,
//! `/users/{id}/orders`, ...) into an ordered, indented list of nodes ready to
//! be rendered as a collapsible navigation tree.
//!
//! Two strategies are available:
//!
//! - [`Layout::Deterministic`]: works on path-sorted input, nests each endpoint
//!   under its closest prefix and synthesizes virtual group nodes for shared
//!   prefixes that have no endpoint of their own.
//! - [`Layout::Natural`]: keeps declaration order and indents by comparing each
//!   endpoint with the one right before it. Never adds nodes.
//!
//! Layout is pure and synchronous. Every call owns its state, so independent
//! lists can be laid out concurrently ([`layout_many`]).
//!
//! # Features
//!
//! - `parallel`: Lays out batches in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use navtree::{EndpointRecord, Layout, LayoutBuilder, layout};
//!
//! let records = vec![
//!     EndpointRecord::new("/users/{id}"),
//!     EndpointRecord::new("/users/{id}/orders"),
//!     EndpointRecord::new("/users/me"),
//! ];
//! let options = LayoutBuilder::new(Layout::Deterministic).build();
//! let nodes = layout(&records, &options);
//!
//! for node in &nodes {
//!     println!("{}{}", "  ".repeat(node.indent), node.label);
//! }
//! assert!(nodes[0].is_virtual);
//! assert_eq!(nodes[0].path, "/users");
//! ```

mod deterministic;
mod engine;
mod error;
mod label;
mod natural;
mod options;
pub mod output;
mod sort;
mod tree;
mod types;

pub use deterministic::DeterministicLayout;
pub use engine::{layout, layout_file, layout_many, load_records};
pub use error::NavtreeError;
pub use label::{Label, compute_label};
pub use natural::NaturalLayout;
pub use options::{Layout, LayoutBuilder, LayoutOptions};
pub use sort::sort_by_path;
pub use tree::LayoutStrategy;
pub use types::{EndpointRecord, LayoutResult, Operation, TreeNode};
