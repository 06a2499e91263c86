//! Textbook and randomized sample inputs.
//!
//! Randomized inputs use a ChaCha8 PRNG seeded by the caller, so the same
//! seed always yields the same input on every platform. Every sample stays
//! inside [`InputLimits::default`](crate::InputLimits).

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use algotrace_core::{EdgeSpec, GraphSpec};

use crate::catalog::Algorithm;
use crate::input::AlgorithmInput;
use crate::tree::TraversalOrder;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// The canonical example for `algorithm`.
pub fn default_input(algorithm: Algorithm) -> AlgorithmInput {
    match algorithm {
        Algorithm::BinarySearch => AlgorithmInput::BinarySearch {
            nums: vec![-1, 0, 3, 5, 9, 12],
            target: 9,
        },
        Algorithm::MaxArea => AlgorithmInput::MaxArea {
            heights: vec![1, 8, 6, 2, 5, 4, 8, 3, 7],
        },
        Algorithm::LongestUniqueSubstring => AlgorithmInput::LongestUniqueSubstring {
            s: "abcabcbb".to_string(),
        },
        Algorithm::CombinationSum => AlgorithmInput::CombinationSum {
            candidates: vec![2, 3, 6, 7],
            target: 7,
        },
        Algorithm::Subsets => AlgorithmInput::Subsets {
            nums: vec![1, 2, 3],
        },
        Algorithm::NQueens => AlgorithmInput::NQueens { n: 4 },
        Algorithm::Bfs => AlgorithmInput::Bfs {
            graph: sample_graph(),
            start: 0,
        },
        Algorithm::Dfs => AlgorithmInput::Dfs {
            graph: sample_graph(),
            start: 0,
        },
        Algorithm::Dijkstra => AlgorithmInput::Dijkstra {
            graph: GraphSpec::directed(
                5,
                vec![
                    EdgeSpec::weighted(0, 1, 4),
                    EdgeSpec::weighted(0, 2, 1),
                    EdgeSpec::weighted(2, 1, 2),
                    EdgeSpec::weighted(1, 3, 1),
                    EdgeSpec::weighted(2, 3, 5),
                    EdgeSpec::weighted(3, 4, 3),
                ],
            ),
            source: 0,
        },
        Algorithm::NumberOfIslands => AlgorithmInput::NumberOfIslands {
            grid: ["11000", "11000", "00100", "00011"]
                .iter()
                .map(|row| row.chars().map(|c| c == '1').collect())
                .collect(),
        },
        Algorithm::TreeTraversal => AlgorithmInput::TreeTraversal {
            tree: vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(6)],
            order: TraversalOrder::Inorder,
        },
        Algorithm::Trie => AlgorithmInput::Trie {
            words: strings(&["car", "cart", "cat", "dog"]),
            queries: strings(&["car", "ca", "do", "dot"]),
        },
        Algorithm::LongestCommonSubsequence => AlgorithmInput::LongestCommonSubsequence {
            a: "abcde".to_string(),
            b: "ace".to_string(),
        },
    }
}

fn sample_graph() -> GraphSpec {
    GraphSpec::undirected(
        6,
        vec![
            EdgeSpec::new(0, 1),
            EdgeSpec::new(0, 2),
            EdgeSpec::new(1, 3),
            EdgeSpec::new(1, 4),
            EdgeSpec::new(2, 4),
            EdgeSpec::new(4, 5),
        ],
    )
}

/// A random but reproducible input for `algorithm`.
pub fn sample_input(algorithm: Algorithm, seed: u64) -> AlgorithmInput {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match algorithm {
        Algorithm::BinarySearch => {
            let mut nums = random_vec(&mut rng, 5..=12, -20..=40);
            nums.sort_unstable();
            nums.dedup();
            let target = match nums.choose(&mut rng) {
                Some(&hit) if rng.gen_bool(0.5) => hit,
                _ => rng.gen_range(-20..=40),
            };
            AlgorithmInput::BinarySearch { nums, target }
        }
        Algorithm::MaxArea => AlgorithmInput::MaxArea {
            heights: random_vec(&mut rng, 4..=12, 0..=10),
        },
        Algorithm::LongestUniqueSubstring => AlgorithmInput::LongestUniqueSubstring {
            s: random_word(&mut rng, 5..=14, b'e'),
        },
        Algorithm::CombinationSum => {
            let mut candidates = random_vec(&mut rng, 3..=4, 2..=9);
            candidates.sort_unstable();
            candidates.dedup();
            AlgorithmInput::CombinationSum {
                candidates,
                target: rng.gen_range(6..=15),
            }
        }
        Algorithm::Subsets => AlgorithmInput::Subsets {
            nums: random_vec(&mut rng, 2..=4, 1..=9),
        },
        Algorithm::NQueens => AlgorithmInput::NQueens {
            n: rng.gen_range(4..=5),
        },
        Algorithm::Bfs => AlgorithmInput::Bfs {
            graph: random_graph(&mut rng, false),
            start: 0,
        },
        Algorithm::Dfs => AlgorithmInput::Dfs {
            graph: random_graph(&mut rng, false),
            start: 0,
        },
        Algorithm::Dijkstra => AlgorithmInput::Dijkstra {
            graph: random_graph(&mut rng, true),
            source: 0,
        },
        Algorithm::NumberOfIslands => {
            let rows = rng.gen_range(3..=6);
            let cols = rng.gen_range(3..=6);
            let grid = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_bool(0.4)).collect())
                .collect();
            AlgorithmInput::NumberOfIslands { grid }
        }
        Algorithm::TreeTraversal => {
            let len = rng.gen_range(5..=12);
            let tree = (0..len)
                .map(|i| (i == 0 || rng.gen_bool(0.8)).then(|| rng.gen_range(1..=99)))
                .collect();
            let order = *TraversalOrder::ALL
                .choose(&mut rng)
                .unwrap_or(&TraversalOrder::Inorder);
            AlgorithmInput::TreeTraversal { tree, order }
        }
        Algorithm::Trie => {
            let count = rng.gen_range(3..=5);
            let words: Vec<String> = (0..count).map(|_| random_word(&mut rng, 2..=5, b'c')).collect();
            let mut queries: Vec<String> = Vec::new();
            for _ in 0..rng.gen_range(2..=3) {
                let query = match words.choose(&mut rng) {
                    // A proper prefix of a stored word.
                    Some(w) if rng.gen_bool(0.5) => w[..w.len() - 1].to_string(),
                    Some(w) => w.clone(),
                    None => random_word(&mut rng, 2..=4, b'c'),
                };
                queries.push(query);
            }
            AlgorithmInput::Trie { words, queries }
        }
        Algorithm::LongestCommonSubsequence => AlgorithmInput::LongestCommonSubsequence {
            a: random_word(&mut rng, 4..=8, b'd'),
            b: random_word(&mut rng, 4..=8, b'd'),
        },
    }
}

fn random_vec<T>(
    rng: &mut ChaCha8Rng,
    len: std::ops::RangeInclusive<usize>,
    values: std::ops::RangeInclusive<T>,
) -> Vec<T>
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy,
{
    let len = rng.gen_range(len);
    (0..len).map(|_| rng.gen_range(values.clone())).collect()
}

/// Lowercase word over `'a'..=last`.
fn random_word(rng: &mut ChaCha8Rng, len: std::ops::RangeInclusive<usize>, last: u8) -> String {
    let len = rng.gen_range(len);
    (0..len).map(|_| rng.gen_range(b'a'..=last) as char).collect()
}

/// A connected graph: a random spanning tree plus a few extra edges.
fn random_graph(rng: &mut ChaCha8Rng, weighted: bool) -> GraphSpec {
    let nodes: u32 = rng.gen_range(5..=8);
    let mut edges = Vec::new();
    let weight = |rng: &mut ChaCha8Rng| -> u32 {
        if weighted {
            rng.gen_range(1..=9)
        } else {
            1
        }
    };

    for v in 1..nodes {
        let parent = rng.gen_range(0..v);
        let w = weight(rng);
        edges.push(EdgeSpec::weighted(parent, v, w));
    }
    for _ in 0..rng.gen_range(1..=3) {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        let exists = edges
            .iter()
            .any(|e| (e.from, e.to) == (a, b) || (e.from, e.to) == (b, a));
        if a != b && !exists {
            let w = weight(rng);
            edges.push(EdgeSpec::weighted(a, b, w));
        }
    }

    GraphSpec::undirected(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::generate;
    use crate::limits::InputLimits;

    #[test]
    fn defaults_match_their_algorithm_and_validate() {
        for algorithm in Algorithm::ALL {
            let input = default_input(algorithm);
            assert_eq!(input.algorithm(), algorithm);
            input.validate(&InputLimits::default()).unwrap();
        }
    }

    #[test]
    fn same_seed_same_input() {
        for algorithm in Algorithm::ALL {
            assert_eq!(sample_input(algorithm, 7), sample_input(algorithm, 7));
        }
    }

    #[test]
    fn different_seeds_vary() {
        let inputs: std::collections::HashSet<String> = (0..10)
            .map(|seed| serde_json::to_string(&sample_input(Algorithm::MaxArea, seed)).unwrap())
            .collect();
        assert!(inputs.len() > 1);
    }

    #[test]
    fn random_samples_are_valid_and_generate() {
        let limits = InputLimits::default();
        for algorithm in Algorithm::ALL {
            for seed in 0..25 {
                let input = sample_input(algorithm, seed);
                assert_eq!(input.algorithm(), algorithm);
                let trace = generate(&input, &limits)
                    .unwrap_or_else(|e| panic!("{algorithm} seed {seed}: {e}"));
                assert!(trace.last().unwrap().terminal);
            }
        }
    }
}
