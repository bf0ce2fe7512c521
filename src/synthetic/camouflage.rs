//! Synthetic fraud-block injection.
//!
//! Builds labeled benchmark graphs: a dense clique of fraudulent rows and
//! columns is planted into an existing background graph, optionally hidden
//! behind camouflage edges from the fraudulent rows into honest columns.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::SparseBipartite;
use crate::error::{GraphError, Result};

/// How fraudulent rows disguise themselves among honest columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CamouflageStrategy {
    /// Bernoulli camouflage with probability p * n0 / (n - n0), so each
    /// fraudulent row emits roughly as many camouflage as fraud edges.
    #[default]
    Uniform,
    /// Twice the uniform camouflage probability.
    DoubleDensity,
    /// Camouflage columns drawn proportionally to their degree in the
    /// background graph, hiding among already-popular targets.
    DegreeBiased,
}

/// Configuration for clique injection.
#[derive(Debug, Clone)]
pub struct CliqueCamoConfig {
    /// Number of fraudulent rows; the clique occupies rows `0..clique_rows`.
    pub clique_rows: usize,
    /// Number of fraudulent columns; the clique occupies cols `0..clique_cols`.
    pub clique_cols: usize,
    /// Per-cell probability of a clique edge.
    pub density: f64,
    /// Camouflage strategy.
    pub strategy: CamouflageStrategy,
    /// Seed for reproducible injection.
    pub seed: Option<u64>,
}

impl Default for CliqueCamoConfig {
    fn default() -> Self {
        Self {
            clique_rows: 20,
            clique_cols: 20,
            density: 0.9,
            strategy: CamouflageStrategy::Uniform,
            seed: None,
        }
    }
}

impl CliqueCamoConfig {
    /// Config for a `clique_rows x clique_cols` clique of the given density.
    pub fn new(clique_rows: usize, clique_cols: usize, density: f64) -> Self {
        Self {
            clique_rows,
            clique_cols,
            density,
            ..Default::default()
        }
    }

    /// Set the camouflage strategy.
    pub fn strategy(mut self, strategy: CamouflageStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Plant a camouflaged clique into a copy of `matrix`.
///
/// Existing edges are kept; the clique lands on rows `0..clique_rows` and
/// columns `0..clique_cols`, and camouflage edges go from fraudulent rows
/// into the honest columns per the configured strategy. When every column
/// belongs to the clique there is nowhere to camouflage and only the clique
/// is injected. For [`CamouflageStrategy::DegreeBiased`] each row draws
/// `clique_cols * density` distinct positions from the degree-weighted
/// column population, capped at the population size.
pub fn inject_clique_camouflage(
    matrix: &SparseBipartite,
    config: &CliqueCamoConfig,
) -> Result<SparseBipartite> {
    let (m, n) = (matrix.rows(), matrix.cols());
    if config.clique_rows > m {
        return Err(GraphError::InvalidParameter(format!(
            "clique_rows {} exceeds matrix rows {m}",
            config.clique_rows
        )));
    }
    if config.clique_cols > n {
        return Err(GraphError::InvalidParameter(format!(
            "clique_cols {} exceeds matrix columns {n}",
            config.clique_cols
        )));
    }
    if !(0.0..=1.0).contains(&config.density) {
        return Err(GraphError::InvalidParameter(format!(
            "density must lie in [0, 1], got {}",
            config.density
        )));
    }

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let m0 = config.clique_rows;
    let n0 = config.clique_cols;
    let camo_cols = n - n0;

    // Bernoulli camouflage probability, where applicable.
    let camo_prob = match config.strategy {
        CamouflageStrategy::Uniform if camo_cols > 0 => {
            Some((config.density * n0 as f64 / camo_cols as f64).min(1.0))
        }
        CamouflageStrategy::DoubleDensity if camo_cols > 0 => {
            Some((2.0 * config.density * n0 as f64 / camo_cols as f64).min(1.0))
        }
        _ => None,
    };

    // Honest columns repeated by their background degree, sampled from by
    // the degree-biased strategy. Built before any injection.
    let population: Vec<usize> = if config.strategy == CamouflageStrategy::DegreeBiased {
        (n0..n)
            .flat_map(|c| std::iter::repeat(c).take(matrix.col_neighbors(c).len()))
            .collect()
    } else {
        Vec::new()
    };
    let camo_per_row = (n0 as f64 * config.density) as usize;

    let mut out = matrix.clone();
    let mut clique_added = 0;
    let mut camo_added = 0;

    for row in 0..m0 {
        for col in 0..n0 {
            if rng.gen_bool(config.density) && out.insert(row, col)? {
                clique_added += 1;
            }
        }
        if let Some(p) = camo_prob {
            for col in n0..n {
                if rng.gen_bool(p) && out.insert(row, col)? {
                    camo_added += 1;
                }
            }
        } else if config.strategy == CamouflageStrategy::DegreeBiased {
            let picks: Vec<usize> = population
                .choose_multiple(&mut rng, camo_per_row)
                .copied()
                .collect();
            for col in picks {
                if out.insert(row, col)? {
                    camo_added += 1;
                }
            }
        }
    }

    debug!(
        "injected {m0}x{n0} clique: {clique_added} clique edges, {camo_added} camouflage edges"
    );
    Ok(out)
}

/// Bernoulli background graph of the given shape and density.
///
/// # Panics
/// Panics if `density` is outside `[0, 1]`.
pub fn random_bipartite(
    rows: usize,
    cols: usize,
    density: f64,
    seed: Option<u64>,
) -> SparseBipartite {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut matrix = SparseBipartite::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density) {
                // In bounds by construction.
                let _ = matrix.insert(row, col);
            }
        }
    }
    matrix
}
