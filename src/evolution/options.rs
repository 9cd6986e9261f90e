//! # RunConfiguration
//!
//! The `RunConfiguration` struct holds the parameters of one MGG run:
//! population size, dimension, evaluation budget, search limits, crossover
//! kind, and seed, plus the tuning knobs of the operators.
//!
//! A configuration is assembled with the mutable `RunConfigurationBuilder`,
//! validated once in `build()`, and immutable afterwards.
//!
//! ## Example
//!
//! ```rust
//! use mggalg::evolution::options::{CrossoverKind, RunConfiguration};
//!
//! let config = RunConfiguration::builder()
//!     .population_size(10)
//!     .dimension(3)
//!     .max_evaluations(50)
//!     .limits(-5.0, 5.0)
//!     .crossover(CrossoverKind::BlxAlpha)
//!     .seed(12345)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.get_population_size(), 10);
//! ```
//!
//! ## Validation
//!
//! - `population_size` must be at least 1 (population error).
//! - `dimension` must be at least 1 and the limits finite with
//!   `upper >= lower` (configuration errors).
//! - `max_evaluations` must cover the initial population.
//! - Simplex crossover needs `population_size >= dimension + 1`.

use std::fmt;
use std::str::FromStr;

use crate::{
    bounds::Bounds,
    crossover::{Crossover, DEFAULT_ALPHA},
    error::{GeneticError, OptionExt, Result},
    selection::{EliteRoulette, Selection, DEFAULT_SCALING_FACTOR},
};

/// The crossover operator a run uses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    BlxAlpha,
    Simplex,
}

impl FromStr for CrossoverKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blx_alpha" => Ok(CrossoverKind::BlxAlpha),
            "simplex" => Ok(CrossoverKind::Simplex),
            other => Err(GeneticError::Strategy(format!(
                "Unknown crossover kind '{}', expected 'blx_alpha' or 'simplex'",
                other
            ))),
        }
    }
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverKind::BlxAlpha => write!(f, "blx_alpha"),
            CrossoverKind::Simplex => write!(f, "simplex"),
        }
    }
}

/// A validated set of run parameters.
///
/// Deserialization goes through `RunConfigurationBuilder`, so a decoded
/// configuration passes the same checks as one assembled in code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RunConfigurationBuilder"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    population_size: usize,
    dimension: usize,
    max_evaluations: usize,
    lower_limit: f64,
    upper_limit: f64,
    crossover: CrossoverKind,
    seed: u64,
    /// Expansion factor of BLX-α.
    alpha: f64,
    /// Scaling factor of elite-roulette selection.
    scaling_factor: f64,
}

impl RunConfiguration {
    /// Returns a builder for creating a `RunConfiguration` instance.
    pub fn builder() -> RunConfigurationBuilder {
        RunConfigurationBuilder::default()
    }

    /// Returns the number of individuals kept between generations.
    ///
    /// # Returns
    ///
    /// The population size, always at least 1.
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the number of genes per chromosome.
    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the evaluation budget of a run.
    ///
    /// # Returns
    ///
    /// The maximum number of objective calls, initial population included.
    pub fn get_max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// Returns the lower limit shared by every gene.
    pub fn get_lower_limit(&self) -> f64 {
        self.lower_limit
    }

    /// Returns the upper limit shared by every gene.
    pub fn get_upper_limit(&self) -> f64 {
        self.upper_limit
    }

    /// Returns the crossover kind used to breed children.
    pub fn get_crossover(&self) -> CrossoverKind {
        self.crossover
    }

    /// Returns the seed the generator is reset to at the start of a run.
    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    /// Returns the BLX-α expansion factor. Ignored by simplex crossover.
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn get_scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// The search box described by this configuration.
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.dimension, self.lower_limit, self.upper_limit)
    }

    /// The crossover operator with its parameters filled in.
    pub fn crossover_operator(&self) -> Crossover {
        match self.crossover {
            CrossoverKind::BlxAlpha => Crossover::BlxAlpha { alpha: self.alpha },
            CrossoverKind::Simplex => Crossover::Simplex {
                n_dim: self.dimension,
            },
        }
    }

    /// The survivor selection with its scaling factor filled in.
    pub fn selection(&self) -> Selection {
        Selection::EliteRoulette(EliteRoulette::new(self.scaling_factor))
    }
}

/// Builder for `RunConfiguration`.
///
/// Population size, dimension, evaluation budget, and limits are required.
/// The crossover kind defaults to BLX-α, the seed to 0, `alpha` to 0.36 and
/// `scaling_factor` to 0.5.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default)]
pub struct RunConfigurationBuilder {
    population_size: Option<usize>,
    dimension: Option<usize>,
    max_evaluations: Option<usize>,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
    crossover: Option<CrossoverKind>,
    seed: Option<u64>,
    alpha: Option<f64>,
    scaling_factor: Option<f64>,
}

impl RunConfigurationBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn dimension(mut self, value: usize) -> Self {
        self.dimension = Some(value);
        self
    }

    pub fn max_evaluations(mut self, value: usize) -> Self {
        self.max_evaluations = Some(value);
        self
    }

    pub fn lower_limit(mut self, value: f64) -> Self {
        self.lower_limit = Some(value);
        self
    }

    pub fn upper_limit(mut self, value: f64) -> Self {
        self.upper_limit = Some(value);
        self
    }

    /// Sets both limits at once.
    pub fn limits(self, lower: f64, upper: f64) -> Self {
        self.lower_limit(lower).upper_limit(upper)
    }

    pub fn crossover(mut self, value: CrossoverKind) -> Self {
        self.crossover = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    pub fn scaling_factor(mut self, value: f64) -> Self {
        self.scaling_factor = Some(value);
        self
    }

    /// Validates the collected values and builds the configuration.
    pub fn build(self) -> Result<RunConfiguration> {
        let population_size = required(self.population_size, "Population size")?;
        let dimension = required(self.dimension, "Dimension")?;
        let max_evaluations = required(self.max_evaluations, "Maximum evaluations")?;
        let lower_limit = required(self.lower_limit, "Lower limit")?;
        let upper_limit = required(self.upper_limit, "Upper limit")?;
        let crossover = self.crossover.unwrap_or(CrossoverKind::BlxAlpha);
        let alpha = self.alpha.unwrap_or(DEFAULT_ALPHA);
        let scaling_factor = self.scaling_factor.unwrap_or(DEFAULT_SCALING_FACTOR);

        if population_size == 0 {
            return Err(GeneticError::Population(
                "Population size cannot be zero".to_string(),
            ));
        }

        Bounds::new(dimension, lower_limit, upper_limit)?;

        if max_evaluations < population_size {
            return Err(GeneticError::Configuration(format!(
                "Maximum evaluations ({}) cannot be smaller than the population size ({})",
                max_evaluations, population_size
            )));
        }

        if crossover == CrossoverKind::Simplex && population_size < dimension + 1 {
            return Err(GeneticError::Configuration(format!(
                "Simplex crossover needs a population of at least {} (dimension + 1), got {}",
                dimension + 1,
                population_size
            )));
        }

        if !alpha.is_finite() || alpha < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Alpha must be a non-negative number, got {}",
                alpha
            )));
        }

        if !scaling_factor.is_finite() || scaling_factor <= 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Scaling factor must be a positive number, got {}",
                scaling_factor
            )));
        }

        Ok(RunConfiguration {
            population_size,
            dimension,
            max_evaluations,
            lower_limit,
            upper_limit,
            crossover,
            seed: self.seed.unwrap_or(0),
            alpha,
            scaling_factor,
        })
    }
}

impl TryFrom<RunConfigurationBuilder> for RunConfiguration {
    type Error = GeneticError;

    fn try_from(builder: RunConfigurationBuilder) -> Result<Self> {
        builder.build()
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else_genetic(|| GeneticError::Configuration(format!("{} not specified", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RunConfigurationBuilder {
        RunConfiguration::builder()
            .population_size(6)
            .dimension(3)
            .max_evaluations(100)
            .limits(-5.0, 5.0)
    }

    #[test]
    fn test_defaults() {
        let config = base().build().unwrap();

        assert_eq!(config.get_crossover(), CrossoverKind::BlxAlpha);
        assert_eq!(config.get_seed(), 0);
        assert_eq!(config.get_alpha(), DEFAULT_ALPHA);
        assert_eq!(config.get_scaling_factor(), DEFAULT_SCALING_FACTOR);
        assert_eq!(config.crossover_operator(), Crossover::BlxAlpha { alpha: 0.36 });
    }

    #[test]
    fn test_missing_field() {
        let result = RunConfiguration::builder()
            .population_size(6)
            .dimension(3)
            .limits(-5.0, 5.0)
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Maximum evaluations not specified"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_population_is_population_error() {
        let result = base().population_size(0).build();
        assert!(matches!(result, Err(GeneticError::Population(_))));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            base().dimension(0).build(),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            base().limits(1.0, -1.0).build(),
            Err(GeneticError::Configuration(_))
        ));
        assert!(base().limits(2.0, 2.0).build().is_ok());
    }

    #[test]
    fn test_budget_must_cover_population() {
        let result = base().max_evaluations(5).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_simplex_population_requirement() {
        assert!(base().crossover(CrossoverKind::Simplex).build().is_ok());

        let result = base()
            .population_size(3)
            .crossover(CrossoverKind::Simplex)
            .build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_simplex_operator_takes_dimension() {
        let config = base().crossover(CrossoverKind::Simplex).build().unwrap();
        assert_eq!(config.crossover_operator(), Crossover::Simplex { n_dim: 3 });
    }

    #[test]
    fn test_invalid_tuning_knobs() {
        assert!(base().alpha(-0.1).build().is_err());
        assert!(base().scaling_factor(0.0).build().is_err());
    }

    #[test]
    fn test_crossover_kind_parsing() {
        assert_eq!("blx_alpha".parse::<CrossoverKind>(), Ok(CrossoverKind::BlxAlpha));
        assert_eq!("simplex".parse::<CrossoverKind>(), Ok(CrossoverKind::Simplex));
        assert!(matches!(
            "uniform".parse::<CrossoverKind>(),
            Err(GeneticError::Strategy(_))
        ));
        assert_eq!(CrossoverKind::Simplex.to_string(), "simplex");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_configuration_serializes() {
        let config = base().crossover(CrossoverKind::Simplex).seed(9).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("\"simplex\""));
        let restored: RunConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_runs_validation() {
        let too_small_for_simplex = r#"{
            "population_size": 2,
            "dimension": 3,
            "max_evaluations": 100,
            "lower_limit": -5.0,
            "upper_limit": 5.0,
            "crossover": "simplex",
            "seed": 0,
            "alpha": 0.36,
            "scaling_factor": 0.5
        }"#;
        assert!(serde_json::from_str::<RunConfiguration>(too_small_for_simplex).is_err());

        let inverted = r#"{
            "population_size": 6,
            "dimension": 3,
            "max_evaluations": 100,
            "lower_limit": 5.0,
            "upper_limit": -5.0
        }"#;
        assert!(serde_json::from_str::<RunConfiguration>(inverted).is_err());

        let minimal = r#"{
            "population_size": 6,
            "dimension": 3,
            "max_evaluations": 100,
            "lower_limit": -5.0,
            "upper_limit": 5.0
        }"#;
        let config: RunConfiguration = serde_json::from_str(minimal).unwrap();
        assert_eq!(config, base().build().unwrap());
    }

    #[test]
    fn test_try_from_builder() {
        assert_eq!(RunConfiguration::try_from(base()), base().build());
        assert!(matches!(
            RunConfiguration::try_from(base().population_size(0)),
            Err(GeneticError::Population(_))
        ));
    }
}
