//! Label derivation shared by the layout strategies.

/// Character dropped once from the front of a trimmed label.
const LABEL_SEPARATOR: char = '-';

/// Label used when neither a name nor a path is available.
const FALLBACK_LABEL: &str = "/";

/// A computed display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    /// `true` when `text` is the path with an ancestor prefix trimmed off.
    pub short: bool,
}

impl Label {
    fn full(path: &str) -> Self {
        let text = if path.is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            path.to_string()
        };
        Self { text, short: false }
    }
}

/// Derives the label for `path`.
///
/// A non-empty `name` always wins. Without a `prefix` (root nodes) the full
/// path is used. Otherwise the prefix is cut off, one leading `-` is dropped
/// and the remainder is re-rooted at `/`, e.g. `/users/{id}` under `/users`
/// becomes `/{id}`.
///
/// The returned text is never empty.
pub fn compute_label(path: &str, prefix: Option<&str>, name: Option<&str>) -> Label {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return Label {
            text: name.to_string(),
            short: false,
        };
    }
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        return Label::full(path);
    };
    let Some(rest) = path.strip_prefix(prefix) else {
        return Label::full(path);
    };
    let rest = rest.strip_prefix(LABEL_SEPARATOR).unwrap_or(rest);
    let text = if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{}", rest)
    };
    Label { text, short: true }
}
