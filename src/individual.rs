//! # Individual
//!
//! An `Individual` is one candidate solution: a real-valued chromosome, its
//! fitness once evaluated, and a shared reference to the run's `Bounds`.
//!
//! Chromosomes are clamped on every write, so a gene can never leave
//! `[lower, upper]` no matter where it came from. Fitness starts unset and is
//! reported as `None` until an evaluation assigns it.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mggalg::{bounds::Bounds, individual::Individual};
//!
//! let bounds = Arc::new(Bounds::new(2, 0.0, 1.0).unwrap());
//! let mut individual = Individual::with_chromosome(bounds, vec![1.5, -0.2]).unwrap();
//!
//! assert_eq!(individual.chromosome(), &[1.0, 0.0]);
//! assert_eq!(individual.fitness(), None);
//!
//! individual.set_fitness(0.25);
//! assert_eq!(individual.fitness(), Some(0.25));
//! ```

use std::sync::Arc;

use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// A chromosome plus its fitness, bound to a shared `Bounds`.
///
/// `Clone` is a deep copy of the chromosome and fitness; the `Bounds`
/// reference is shared, not copied.
#[derive(Debug, Clone)]
pub struct Individual {
    chromosome: Vec<f64>,
    fitness: Option<f64>,
    bounds: Arc<Bounds>,
}

impl Individual {
    /// Creates an individual with a chromosome drawn uniformly from `bounds`.
    pub fn random(bounds: Arc<Bounds>, rng: &mut RandomNumberGenerator) -> Self {
        let chromosome = bounds.random_vector(rng);
        Self {
            chromosome,
            fitness: None,
            bounds,
        }
    }

    /// Creates an individual from a caller-supplied chromosome.
    ///
    /// Genes outside the bounds are clamped, never rejected.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the chromosome length does not
    /// match the bounds dimension.
    pub fn with_chromosome(bounds: Arc<Bounds>, chromosome: Vec<f64>) -> Result<Self> {
        let mut individual = Self {
            chromosome: Vec::new(),
            fitness: None,
            bounds,
        };
        individual.set_chromosome(chromosome)?;
        Ok(individual)
    }

    /// Creates an individual with its own bounds built from explicit limits.
    pub fn from_limits(n_dim: usize, lower: f64, upper: f64, chromosome: Vec<f64>) -> Result<Self> {
        let bounds = Arc::new(Bounds::new(n_dim, lower, upper)?);
        Self::with_chromosome(bounds, chromosome)
    }

    /// Returns the genes, each within the bounds.
    pub fn chromosome(&self) -> &[f64] {
        &self.chromosome
    }

    /// Replaces the chromosome, clamping it into the bounds.
    ///
    /// The previous fitness is kept; re-evaluate to refresh it.
    pub fn set_chromosome(&mut self, mut chromosome: Vec<f64>) -> Result<()> {
        if chromosome.len() != self.bounds.dimension() {
            return Err(GeneticError::Configuration(format!(
                "Chromosome length ({}) doesn't match dimension ({})",
                chromosome.len(),
                self.bounds.dimension()
            )));
        }
        self.bounds.clamp_in_place(&mut chromosome);
        self.chromosome = chromosome;
        Ok(())
    }

    /// The fitness from the latest evaluation, or `None` if never evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Records the result of an evaluation.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The objective value; lower is better.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// The bounds this individual is clamped to.
    pub fn bounds(&self) -> &Arc<Bounds> {
        &self.bounds
    }

    /// Returns the number of genes.
    pub fn dimension(&self) -> usize {
        self.chromosome.len()
    }

    /// Returns `true` if both individuals refer to the very same `Bounds`.
    pub fn shares_bounds_with(&self, other: &Individual) -> bool {
        Arc::ptr_eq(&self.bounds, &other.bounds)
    }
}
