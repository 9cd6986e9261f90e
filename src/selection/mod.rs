//! # Selection
//!
//! Survivor selection decides which members of a candidate pool go back into
//! the population. `Selection` is the tagged variant the generation manager
//! dispatches on.
pub mod elite_roulette;

pub use elite_roulette::{EliteRoulette, DEFAULT_SCALING_FACTOR};

use crate::{error::Result, individual::Individual, rng::RandomNumberGenerator};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    EliteRoulette(EliteRoulette),
}

impl Selection {
    /// Selects `size` survivors from `candidates`.
    pub fn select(
        &self,
        candidates: Vec<Individual>,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        match self {
            Selection::EliteRoulette(selection) => selection.select(candidates, size, rng),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::EliteRoulette(EliteRoulette::default())
    }
}
