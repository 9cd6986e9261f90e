//! # Bounds
//!
//! The box constraint of a run: every gene of every chromosome lies in the
//! same closed interval `[lower, upper]`. A `Bounds` value is validated once
//! and then shared read-only (behind an `Arc`) by all individuals of a run.
//!
//! ## Example
//!
//! ```rust
//! use mggalg::bounds::Bounds;
//!
//! let bounds = Bounds::new(3, -5.0, 5.0).unwrap();
//! assert!(bounds.contains(&[0.0, 4.9, -5.0]));
//! assert_eq!(bounds.clamp(&[7.0, -9.0, 1.0]), vec![5.0, -5.0, 1.0]);
//! ```

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    n_dim: usize,
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `n_dim` is zero, if a limit is
    /// not a finite number, or if `upper < lower`. Equal limits describe a
    /// single-point domain and are accepted.
    pub fn new(n_dim: usize, lower: f64, upper: f64) -> Result<Self> {
        if n_dim < 1 {
            return Err(GeneticError::Configuration(
                "Dimension must be at least 1".to_string(),
            ));
        }

        if !lower.is_finite() || !upper.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Bounds must be finite numbers, got lower={} upper={}",
                lower, upper
            )));
        }

        if upper < lower {
            return Err(GeneticError::Configuration(format!(
                "Upper limit ({}) is smaller than lower limit ({})",
                upper, lower
            )));
        }

        Ok(Self {
            n_dim,
            lower,
            upper,
        })
    }

    pub fn dimension(&self) -> usize {
        self.n_dim
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `vector` has exactly `n_dim` genes and each lies in
    /// `[lower, upper]`.
    pub fn contains(&self, vector: &[f64]) -> bool {
        vector.len() == self.n_dim
            && vector
                .iter()
                .all(|&gene| gene >= self.lower && gene <= self.upper)
    }

    /// Returns a copy of `vector` with every gene clamped to `[lower, upper]`.
    pub fn clamp(&self, vector: &[f64]) -> Vec<f64> {
        let mut clamped = vector.to_vec();
        self.clamp_in_place(&mut clamped);
        clamped
    }

    /// Clamps every gene of `vector` to `[lower, upper]`.
    pub fn clamp_in_place(&self, vector: &mut [f64]) {
        vector
            .iter_mut()
            .for_each(|gene| *gene = gene.clamp(self.lower, self.upper));
    }

    /// Draws `n_dim` independent genes uniformly from `[lower, upper]`.
    pub fn random_vector(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        rng.fetch_uniform(self.lower, self.upper, self.n_dim)
    }
}
