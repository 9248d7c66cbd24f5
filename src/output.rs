//! Output formatting for layout results.
//!
//! Provides functions to format a [`LayoutResult`] as an indented text outline,
//! a nested Markdown list, or JSON.

use crate::{LayoutResult, NavtreeError, TreeNode};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the layout result into a string.
pub fn format_result(result: &LayoutResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Markdown => format_markdown(&result.nodes),
        OutputFormat::Text => format_text(&result.nodes),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &LayoutResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), NavtreeError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| NavtreeError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(nodes: &[TreeNode]) -> String {
    let mut out = String::with_capacity(nodes.len() * 32);
    for node in nodes {
        out.push_str(&"  ".repeat(node.indent));
        out.push_str(&node.label);
        if node.has_children {
            out.push('/');
        }
        out.push('\n');
    }
    out
}

fn format_markdown(nodes: &[TreeNode]) -> String {
    let mut out = String::with_capacity(nodes.len() * 48);
    for node in nodes {
        out.push_str(&"  ".repeat(node.indent));
        if node.is_virtual {
            out.push_str(&format!("- *{}*", node.label));
        } else {
            out.push_str(&format!("- {}", node.label));
        }
        for operation in &node.operations {
            out.push_str(&format!(" `{}`", operation.method.to_uppercase()));
        }
        out.push('\n');
    }
    out
}

fn format_json(result: &LayoutResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}
