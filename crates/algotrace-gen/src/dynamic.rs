//! Type-erased traces for the server and CLI.
//!
//! Each generator returns its own `Trace<K, S>`. [`generate`] validates an
//! [`AlgorithmInput`], dispatches to the right generator and lowers the
//! result to a [`DynTrace`] whose step states are JSON values.

use serde::{Deserialize, Serialize};

use algotrace_core::{BinaryTree, Network, NodeId, StepKind, Timeline, Trace};

use crate::backtracking::{combination_sum, n_queens, subsets};
use crate::catalog::Algorithm;
use crate::dp::longest_common_subsequence;
use crate::error::GenError;
use crate::graph::{bfs, dfs, dijkstra, number_of_islands};
use crate::input::{land_grid, AlgorithmInput};
use crate::limits::InputLimits;
use crate::search::binary_search;
use crate::sliding_window::longest_unique_substring;
use crate::tree::traverse;
use crate::trie::trie_operations;
use crate::two_pointers::max_area;

/// A step with its kind reduced to a label and its state to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynStep {
    pub index: usize,
    pub kind: String,
    pub terminal: bool,
    pub description: String,
    pub state: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynTrace {
    pub algorithm: Algorithm,
    pub steps: Vec<DynStep>,
    /// Hex blake3 fingerprint of the typed trace.
    pub fingerprint: String,
}

impl DynTrace {
    /// Lowers a typed trace.
    pub fn erase<K, S>(algorithm: Algorithm, trace: &Trace<K, S>) -> Result<Self, GenError>
    where
        K: StepKind,
        S: Serialize,
    {
        let steps = trace
            .iter()
            .map(|step| {
                Ok(DynStep {
                    index: step.index,
                    kind: step.label().to_string(),
                    terminal: step.is_terminal(),
                    description: step.description.clone(),
                    state: serde_json::to_value(&step.state)?,
                })
            })
            .collect::<Result<Vec<_>, GenError>>()?;

        Ok(DynTrace {
            algorithm,
            steps,
            fingerprint: trace.fingerprint().to_hex().to_string(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&DynStep> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&DynStep> {
        self.steps.last()
    }
}

impl Timeline for DynTrace {
    fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Validates `input` against `limits`, runs its generator and erases the trace.
pub fn generate(input: &AlgorithmInput, limits: &InputLimits) -> Result<DynTrace, GenError> {
    input.validate(limits)?;
    let algorithm = input.algorithm();

    let trace = match input {
        AlgorithmInput::BinarySearch { nums, target } => {
            DynTrace::erase(algorithm, &binary_search(nums, *target))
        }
        AlgorithmInput::MaxArea { heights } => DynTrace::erase(algorithm, &max_area(heights)),
        AlgorithmInput::LongestUniqueSubstring { s } => {
            DynTrace::erase(algorithm, &longest_unique_substring(s))
        }
        AlgorithmInput::CombinationSum { candidates, target } => {
            DynTrace::erase(algorithm, &combination_sum(candidates, *target))
        }
        AlgorithmInput::Subsets { nums } => DynTrace::erase(algorithm, &subsets(nums)),
        AlgorithmInput::NQueens { n } => DynTrace::erase(algorithm, &n_queens(*n)),
        AlgorithmInput::Bfs { graph, start } => {
            let network = Network::from_spec(graph)?;
            DynTrace::erase(algorithm, &bfs(&network, NodeId(*start)))
        }
        AlgorithmInput::Dfs { graph, start } => {
            let network = Network::from_spec(graph)?;
            DynTrace::erase(algorithm, &dfs(&network, NodeId(*start)))
        }
        AlgorithmInput::Dijkstra { graph, source } => {
            let network = Network::from_spec(graph)?;
            DynTrace::erase(algorithm, &dijkstra(&network, NodeId(*source)))
        }
        AlgorithmInput::NumberOfIslands { grid } => {
            let land = land_grid(grid).ok_or_else(|| algotrace_core::InputError::Malformed {
                reason: "grid rows must all have the same length".to_string(),
            })?;
            DynTrace::erase(algorithm, &number_of_islands(&land))
        }
        AlgorithmInput::TreeTraversal { tree, order } => {
            let tree = BinaryTree::from_level_order(tree);
            DynTrace::erase(algorithm, &traverse(&tree, *order))
        }
        AlgorithmInput::Trie { words, queries } => {
            DynTrace::erase(algorithm, &trie_operations(words, queries))
        }
        AlgorithmInput::LongestCommonSubsequence { a, b } => {
            DynTrace::erase(algorithm, &longest_common_subsequence(a, b))
        }
    }?;

    tracing::debug!(
        algorithm = %algorithm,
        steps = trace.steps.len(),
        fingerprint = %trace.fingerprint,
        "generated trace"
    );
    Ok(trace)
}
