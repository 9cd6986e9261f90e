//! # Crossover
//!
//! Crossover operators turn parent chromosomes into one child chromosome.
//! They never touch fitness; evaluating the child is the caller's job.
//!
//! The `Crossover` enum is the tagged variant the generation manager
//! dispatches on.
pub mod blx_alpha;
pub mod simplex;

pub use blx_alpha::{blx_alpha, DEFAULT_ALPHA};
pub use simplex::simplex;

use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// A crossover operator together with its parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossover {
    /// Blend crossover over two parents.
    BlxAlpha { alpha: f64 },
    /// Simplex crossover over `n_dim + 1` parents.
    Simplex { n_dim: usize },
}

impl Crossover {
    pub fn blx_alpha() -> Self {
        Crossover::BlxAlpha {
            alpha: DEFAULT_ALPHA,
        }
    }

    pub fn simplex(n_dim: usize) -> Self {
        Crossover::Simplex { n_dim }
    }

    /// How many parents one call to [`Crossover::crossover`] consumes.
    pub fn parents_required(&self) -> usize {
        match self {
            Crossover::BlxAlpha { .. } => 2,
            Crossover::Simplex { n_dim } => n_dim + 1,
        }
    }

    /// Produces one child chromosome from `parents`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Crossover` if the parent count differs from
    /// [`Crossover::parents_required`] or a parent's length differs from the
    /// bounds dimension.
    pub fn crossover(
        &self,
        parents: &[&[f64]],
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<f64>> {
        if parents.len() != self.parents_required() {
            return Err(GeneticError::Crossover(format!(
                "{:?} needs {} parents, got {}",
                self,
                self.parents_required(),
                parents.len()
            )));
        }

        if let Some(parent) = parents.iter().find(|p| p.len() != bounds.dimension()) {
            return Err(GeneticError::Crossover(format!(
                "Parent dimension ({}) doesn't match bounds dimension ({})",
                parent.len(),
                bounds.dimension()
            )));
        }

        let child = match self {
            Crossover::BlxAlpha { alpha } => blx_alpha(parents[0], parents[1], *alpha, bounds, rng),
            Crossover::Simplex { .. } => simplex(parents, rng),
        };
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_required() {
        assert_eq!(Crossover::blx_alpha().parents_required(), 2);
        assert_eq!(Crossover::simplex(3).parents_required(), 4);
    }

    #[test]
    fn test_wrong_parent_count() {
        let bounds = Bounds::new(2, 0.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let parents: [&[f64]; 1] = [&[0.5, 0.5]];

        let result = Crossover::blx_alpha().crossover(&parents, &bounds, &mut rng);
        assert!(matches!(result, Err(GeneticError::Crossover(_))));
    }

    #[test]
    fn test_wrong_parent_dimension() {
        let bounds = Bounds::new(2, 0.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let parents: [&[f64]; 3] = [&[0.5, 0.5], &[0.1, 0.1], &[0.2]];

        let result = Crossover::simplex(2).crossover(&parents, &bounds, &mut rng);
        assert!(matches!(result, Err(GeneticError::Crossover(_))));
    }

    #[test]
    fn test_dispatch_produces_child() {
        let bounds = Bounds::new(2, -1.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let pair: [&[f64]; 2] = [&[0.0, 0.5], &[0.2, -0.5]];
        let triple: [&[f64]; 3] = [&[0.0, 0.0], &[0.5, 0.0], &[0.0, 0.5]];

        let blx = Crossover::blx_alpha().crossover(&pair, &bounds, &mut rng).unwrap();
        let spx = Crossover::simplex(2).crossover(&triple, &bounds, &mut rng).unwrap();

        assert!(bounds.contains(&blx));
        assert_eq!(spx.len(), 2);
    }
}
