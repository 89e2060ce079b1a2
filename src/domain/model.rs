use serde::{Deserialize, Serialize};

/// One invocation of the subset search: the sequence and the sum it must hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub sequence: Vec<i64>,
    pub target: i64,
}

impl Problem {
    pub fn new(sequence: Vec<i64>, target: i64) -> Self {
        Self { sequence, target }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Values at the given positions.
    pub fn values_at(&self, positions: &[usize]) -> Vec<i64> {
        positions.iter().map(|&i| self.sequence[i]).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<Vec<usize>>>,
}

impl SearchOutcome {
    pub fn found(found: bool) -> Self {
        Self {
            found,
            witness: None,
            all: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Plain include/exclude recursion
    #[default]
    Recursive,
    /// Explicit worklist of (index, remaining) frames
    Iterative,
    /// Recursion with a cache of failed states
    Memoized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// What a run should compute beyond the yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub strategy: Strategy,
    pub max_depth: usize,
    pub witness: bool,
    pub all: bool,
}

pub const DEFAULT_MAX_DEPTH: usize = 4096;

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            strategy: Strategy::Recursive,
            max_depth: DEFAULT_MAX_DEPTH,
            witness: false,
            all: false,
        }
    }
}
