//! The algorithm catalog: stable slugs and display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use algotrace_core::InputError;

/// Problem family, used to group the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Search,
    TwoPointers,
    SlidingWindow,
    Backtracking,
    Graph,
    Grid,
    Tree,
    Trie,
    DynamicProgramming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Every algorithm with a trace generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BinarySearch,
    MaxArea,
    LongestUniqueSubstring,
    CombinationSum,
    Subsets,
    NQueens,
    Bfs,
    Dfs,
    Dijkstra,
    NumberOfIslands,
    TreeTraversal,
    Trie,
    LongestCommonSubsequence,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::BinarySearch,
        Algorithm::MaxArea,
        Algorithm::LongestUniqueSubstring,
        Algorithm::CombinationSum,
        Algorithm::Subsets,
        Algorithm::NQueens,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::NumberOfIslands,
        Algorithm::TreeTraversal,
        Algorithm::Trie,
        Algorithm::LongestCommonSubsequence,
    ];

    /// URL-safe identifier, identical to the serde name.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "binary-search",
            Algorithm::MaxArea => "max-area",
            Algorithm::LongestUniqueSubstring => "longest-unique-substring",
            Algorithm::CombinationSum => "combination-sum",
            Algorithm::Subsets => "subsets",
            Algorithm::NQueens => "n-queens",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::NumberOfIslands => "number-of-islands",
            Algorithm::TreeTraversal => "tree-traversal",
            Algorithm::Trie => "trie",
            Algorithm::LongestCommonSubsequence => "longest-common-subsequence",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Algorithm, InputError> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.slug() == slug)
            .ok_or_else(|| InputError::UnknownAlgorithm {
                slug: slug.to_string(),
            })
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::MaxArea => "Container With Most Water",
            Algorithm::LongestUniqueSubstring => "Longest Substring Without Repeating Characters",
            Algorithm::CombinationSum => "Combination Sum",
            Algorithm::Subsets => "Subsets",
            Algorithm::NQueens => "N-Queens",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Shortest Paths",
            Algorithm::NumberOfIslands => "Number of Islands",
            Algorithm::TreeTraversal => "Binary Tree Traversal",
            Algorithm::Trie => "Implement Trie",
            Algorithm::LongestCommonSubsequence => "Longest Common Subsequence",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::BinarySearch => Family::Search,
            Algorithm::MaxArea => Family::TwoPointers,
            Algorithm::LongestUniqueSubstring => Family::SlidingWindow,
            Algorithm::CombinationSum | Algorithm::Subsets | Algorithm::NQueens => {
                Family::Backtracking
            }
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => Family::Graph,
            Algorithm::NumberOfIslands => Family::Grid,
            Algorithm::TreeTraversal => Family::Tree,
            Algorithm::Trie => Family::Trie,
            Algorithm::LongestCommonSubsequence => Family::DynamicProgramming,
        }
    }

    pub fn difficulty(self) -> Difficulty {
        match self {
            Algorithm::BinarySearch | Algorithm::Bfs | Algorithm::Dfs | Algorithm::TreeTraversal => {
                Difficulty::Easy
            }
            Algorithm::NQueens => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_slug(s)
    }
}

/// One catalog row as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub title: String,
    pub family: Family,
    pub difficulty: Difficulty,
}

impl From<Algorithm> for CatalogEntry {
    fn from(a: Algorithm) -> Self {
        CatalogEntry {
            slug: a.slug().to_string(),
            title: a.title().to_string(),
            family: a.family(),
            difficulty: a.difficulty(),
        }
    }
}

/// The full catalog in display order.
pub fn catalog() -> Vec<CatalogEntry> {
    Algorithm::ALL.into_iter().map(CatalogEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_matches_serde_name() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.slug()));
        }
    }

    #[test]
    fn slugs_round_trip_through_from_str() {
        for a in Algorithm::ALL {
            assert_eq!(a.slug().parse::<Algorithm>().unwrap(), a);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = Algorithm::from_slug("bogo-sort").unwrap_err();
        assert_eq!(err.to_string(), "unknown algorithm: 'bogo-sort'");
    }

    #[test]
    fn catalog_lists_every_algorithm() {
        let entries = catalog();
        assert_eq!(entries.len(), Algorithm::ALL.len());
        assert_eq!(entries[0].slug, "binary-search");
        assert_eq!(entries[0].family, Family::Search);
    }
}
