use crate::deterministic::DeterministicLayout;
use crate::natural::NaturalLayout;
use crate::tree::LayoutStrategy;
use serde::{Deserialize, Serialize};

/// Which layout strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Prefix-exact tree over path-sorted input, see [`DeterministicLayout`].
    #[default]
    Deterministic,
    /// Legacy declaration-order heuristic, see [`NaturalLayout`].
    Natural,
}

impl Layout {
    /// Whether the strategy needs its input ordered by path.
    pub fn expects_sorted_input(&self) -> bool {
        matches!(self, Layout::Deterministic)
    }

    pub fn strategy(&self) -> &'static dyn LayoutStrategy {
        match self {
            Layout::Deterministic => &DeterministicLayout,
            Layout::Natural => &NaturalLayout,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub strategy: Layout,
    /// Sort records by path before laying them out.
    pub sort_paths: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            strategy: Layout::Deterministic,
            sort_paths: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct LayoutBuilder {
    options: LayoutOptions,
}

impl LayoutBuilder {
    /// Starts from `strategy`, sorting only if the strategy expects sorted input.
    pub fn new(strategy: Layout) -> Self {
        Self {
            options: LayoutOptions {
                strategy,
                sort_paths: strategy.expects_sorted_input(),
            },
        }
    }
    pub fn sort_paths(mut self, yes: bool) -> Self {
        self.options.sort_paths = yes;
        self
    }
    pub fn build(self) -> LayoutOptions {
        self.options
    }
}
