use crate::error::NavtreeError;
use crate::options::LayoutOptions;
use crate::sort::sort_by_path;
use crate::types::{EndpointRecord, LayoutResult, TreeNode};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Lines starting with this are skipped in plain path lists.
const COMMENT_PREFIX: char = '#';

/// Lays out `records` with the configured strategy.
///
/// Never fails: malformed paths end up as roots rather than errors.
pub fn layout(records: &[EndpointRecord], options: &LayoutOptions) -> Vec<TreeNode> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Laying out {} endpoints with {:?} (sorted: {})",
        records.len(),
        options.strategy,
        options.sort_paths
    );
    let records: Cow<'_, [EndpointRecord]> = if options.sort_paths {
        Cow::Owned(sort_by_path(records))
    } else {
        Cow::Borrowed(records)
    };
    let nodes = options.strategy.strategy().build(&records);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Produced {} nodes ({} virtual)",
        nodes.len(),
        nodes.iter().filter(|n| n.is_virtual).count()
    );
    nodes
}

/// Lays out several independent endpoint lists, one result per input list.
#[cfg(not(feature = "parallel"))]
pub fn layout_many(batches: &[Vec<EndpointRecord>], options: &LayoutOptions) -> Vec<Vec<TreeNode>> {
    batches.iter().map(|records| layout(records, options)).collect()
}

/// Lays out several independent endpoint lists, one result per input list.
#[cfg(feature = "parallel")]
pub fn layout_many(batches: &[Vec<EndpointRecord>], options: &LayoutOptions) -> Vec<Vec<TreeNode>> {
    batches
        .par_iter()
        .map(|records| layout(records, options))
        .collect()
}

/// Reads an endpoint list from `path`.
///
/// `.json` files hold an array of [`EndpointRecord`] objects. Anything else is
/// read as one path per line; blank lines and `#` comments are skipped.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<EndpointRecord>, NavtreeError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| NavtreeError::io(path, e))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let records = if is_json {
        serde_json::from_str::<Vec<EndpointRecord>>(&content)
            .map_err(|e| NavtreeError::json(path, e))?
    } else {
        parse_path_list(&content)
    };
    if records.is_empty() {
        return Err(NavtreeError::EmptyInput(path.to_path_buf()));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Loaded {} endpoints from {}", records.len(), path.display());
    Ok(records)
}

fn parse_path_list(content: &str) -> Vec<EndpointRecord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                return None;
            }
            Some(EndpointRecord::new(line).with_id(format!("line-{}", number + 1)))
        })
        .collect()
}

/// Loads `path` and lays it out in one step.
pub fn layout_file(
    path: impl AsRef<Path>,
    options: &LayoutOptions,
) -> Result<LayoutResult, NavtreeError> {
    let records = load_records(path)?;
    Ok(LayoutResult {
        strategy: options.strategy,
        nodes: layout(&records, options),
    })
}
