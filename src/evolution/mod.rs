pub mod challenge;
pub mod executor;
pub mod generation;
pub mod history;
pub mod options;

pub use challenge::Challenge;
pub use executor::{Executor, ExecutorState};
pub use generation::{GenerationManager, EVALUATIONS_PER_GENERATION};
pub use history::{History, HistoryEntry};
pub use options::{CrossoverKind, RunConfiguration, RunConfigurationBuilder};
