pub mod bounds;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod objective;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use bounds::Bounds;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{Challenge, CrossoverKind, Executor, History, RunConfiguration};
pub use individual::Individual;
pub use population::Population;
