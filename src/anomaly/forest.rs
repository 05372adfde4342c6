//! Isolation Forest
//!
//! Ensemble of randomized binary partitioning trees over a single feature.
//! A point isolated in fewer average splits scores closer to 1; a point
//! buried deep in the bulk of the distribution scores closer to 0.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Euler-Mascheroni constant, for the average BST search length
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

enum IsolationNode {
    Internal {
        split_value: f64,
        left: Box<IsolationNode>,
        right: Box<IsolationNode>,
    },
    Leaf {
        size: usize,
    },
}

struct IsolationTree {
    root: IsolationNode,
}

impl IsolationTree {
    fn build(values: &[f64], height_limit: usize, rng: &mut StdRng) -> Self {
        Self {
            root: build_node(values, height_limit, 0, rng),
        }
    }

    /// Path length to the leaf holding `value`, adjusted by the expected
    /// depth still below that leaf.
    fn path_length(&self, value: f64) -> f64 {
        let mut node = &self.root;
        let mut height = 0.0;
        loop {
            match node {
                IsolationNode::Leaf { size } => return height + average_path_length(*size),
                IsolationNode::Internal {
                    split_value,
                    left,
                    right,
                } => {
                    node = if value < *split_value { left } else { right };
                    height += 1.0;
                }
            }
        }
    }
}

fn build_node(
    values: &[f64],
    height_limit: usize,
    height: usize,
    rng: &mut StdRng,
) -> IsolationNode {
    if height >= height_limit || values.len() <= 1 {
        return IsolationNode::Leaf { size: values.len() };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        // Zero value range: nothing left to split on
        return IsolationNode::Leaf { size: values.len() };
    }

    let split_value = rng.gen_range(min..max);
    let (left, right): (Vec<f64>, Vec<f64>) = values.iter().partition(|v| **v < split_value);

    IsolationNode::Internal {
        split_value,
        left: Box::new(build_node(&left, height_limit, height + 1, rng)),
        right: Box::new(build_node(&right, height_limit, height + 1, rng)),
    }
}

/// Average path length of an unsuccessful BST search over `n` points
fn average_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
}

/// Isolation forest over a single feature
pub struct IsolationForest {
    trees: Vec<IsolationTree>,
    sample_size: usize,
}

impl IsolationForest {
    /// Fit `forest_size` trees, each grown on a subsample of up to
    /// `sample_size` points drawn without replacement.
    ///
    /// Every tree builds from its own RNG, sub-seeded off the master seed,
    /// so a fit over identical data is bit-for-bit reproducible and tree
    /// construction stays order-independent.
    pub fn fit(values: &[f64], forest_size: usize, sample_size: usize, seed: u64) -> Self {
        let sample_size = sample_size.min(values.len()).max(1);
        let height_limit = (sample_size as f64).log2().ceil() as usize;

        let mut master = StdRng::seed_from_u64(seed);
        let tree_seeds: Vec<u64> = (0..forest_size).map(|_| master.gen()).collect();

        let trees = tree_seeds
            .into_iter()
            .map(|tree_seed| {
                let mut rng = StdRng::seed_from_u64(tree_seed);
                let sample: Vec<f64> =
                    rand::seq::index::sample(&mut rng, values.len(), sample_size)
                        .into_iter()
                        .map(|i| values[i])
                        .collect();
                IsolationTree::build(&sample, height_limit, &mut rng)
            })
            .collect();

        Self { trees, sample_size }
    }

    /// Normalized anomaly score in (0, 1); higher means more isolated
    pub fn score(&self, value: f64) -> f64 {
        let avg_path: f64 = self
            .trees
            .iter()
            .map(|tree| tree.path_length(value))
            .sum::<f64>()
            / self.trees.len() as f64;

        let normalizer = average_path_length(self.sample_size);
        if normalizer <= 0.0 {
            // Single-point fit carries no depth information
            return 0.5;
        }
        2_f64.powf(-avg_path / normalizer)
    }
}
