//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! All failures are immediate validation errors; nothing is retried.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use mggalg::error::{GeneticError, Result};
//!
//! fn checked_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::Population("size must be positive".to_string()));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(checked_size(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use mggalg::error::{GeneticError, OptionExt};
//!
//! fn lowest(values: &[f64]) -> mggalg::error::Result<f64> {
//!     values
//!         .iter()
//!         .copied()
//!         .min_by(f64::total_cmp)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Malformed or missing dimension, bounds, or run parameters.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid population size or an impossible population operation.
    #[error("Population error: {0}")]
    Population(String),

    /// An unrecognized crossover or selection kind was requested.
    #[error("Strategy error: {0}")]
    Strategy(String),

    /// The evaluation function violated its contract.
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// A crossover operator received parents it cannot combine.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// Survivor selection could not be carried out.
    #[error("Selection error: {0}")]
    Selection(String),

    /// An operation needed at least one individual.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// An operation needed every individual to carry a fitness value.
    #[error("Unevaluated individual: fitness must be set before {0}")]
    Unevaluated(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
