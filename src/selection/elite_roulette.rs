use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// The scaling factor used when none is configured.
pub const DEFAULT_SCALING_FACTOR: f64 = 0.5;

/// Survivor selection that always keeps the best candidate and fills the
/// remaining slots by roulette over the rest.
///
/// Lower fitness is better. Non-elite candidates are weighted by
/// `width / (f - best + scaling_factor * width)`, where `best` and `width`
/// are the minimum and the spread (at least 1) of the finite non-elite
/// fitness values. A candidate scored `+inf` gets no weight and one scored
/// `-inf` gets the weight of `best`; if every non-elite candidate is `+inf`
/// they are drawn uniformly. Remaining slots are drawn with replacement.
///
/// # Examples
///
/// ```
/// use mggalg::individual::Individual;
/// use mggalg::rng::RandomNumberGenerator;
/// use mggalg::selection::EliteRoulette;
///
/// let candidates: Vec<Individual> = [10.0, 5.0, 8.0, 2.0, 6.0]
///     .iter()
///     .map(|&f| {
///         let mut i = Individual::from_limits(1, 0.0, 1.0, vec![0.5]).unwrap();
///         i.set_fitness(f);
///         i
///     })
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let survivors = EliteRoulette::default().select(candidates, 1, &mut rng).unwrap();
///
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].fitness(), Some(2.0));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliteRoulette {
    scaling_factor: f64,
}

impl EliteRoulette {
    pub fn new(scaling_factor: f64) -> Self {
        Self { scaling_factor }
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Selects `size` survivors from `candidates`.
    ///
    /// The first survivor is the elite; the rest are roulette draws and may
    /// repeat the same candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero, the pool is empty, a candidate has
    /// no fitness, or more than one survivor is requested from a pool of one.
    pub fn select(
        &self,
        candidates: Vec<Individual>,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if size == 0 {
            return Err(GeneticError::Selection(
                "Number of survivors must be at least 1".to_string(),
            ));
        }

        if candidates.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut ranked: Vec<(f64, Individual)> = candidates
            .into_iter()
            .map(|individual| match individual.fitness() {
                Some(fitness) => Ok((fitness, individual)),
                None => Err(GeneticError::Unevaluated("selection".to_string())),
            })
            .collect::<Result<_>>()?;
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut ranked = ranked.into_iter();
        let mut survivors = Vec::with_capacity(size);
        if let Some((_, elite)) = ranked.next() {
            survivors.push(elite);
        }
        if size == 1 {
            return Ok(survivors);
        }

        let (fitness, rest): (Vec<f64>, Vec<Individual>) = ranked.unzip();
        if rest.is_empty() {
            return Err(GeneticError::Selection(format!(
                "Cannot select {} survivors from a single candidate",
                size
            )));
        }

        let cumulative_probs = self.calculate_probabilities(&fitness);
        for _ in 1..size {
            let idx = self.select_individual(&cumulative_probs, rng);
            survivors.push(rest[idx].clone());
        }

        Ok(survivors)
    }

    /// Cumulative selection probabilities for fitness values sorted ascending.
    fn calculate_probabilities(&self, fitness: &[f64]) -> Vec<f64> {
        let mut finite = fitness.iter().copied().filter(|f| f.is_finite());
        let best = finite.next().unwrap_or(0.0);
        let worst = finite.last().unwrap_or(best);
        // Halved so that `worst - best` cannot overflow.
        let half_width = (worst / 2.0 - best / 2.0).max(0.5);

        let scaled: Vec<f64> = fitness
            .iter()
            .map(|&f| {
                if f.is_finite() {
                    1.0 / ((f / 2.0 - best / 2.0) / half_width + self.scaling_factor)
                } else if f < 0.0 {
                    1.0 / self.scaling_factor
                } else {
                    0.0
                }
            })
            .collect();
        let sum: f64 = scaled.iter().sum();
        let n = scaled.len() as f64;

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = scaled
            .iter()
            .map(|&s| {
                cumulative += if sum > 0.0 { s / sum } else { 1.0 / n };
                cumulative
            })
            .collect();

        // Ensure the last probability is exactly 1.0 to avoid floating-point errors
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        probs
    }

    /// Inverse-CDF lookup: the first index whose cumulative probability is at
    /// least a fresh uniform draw.
    fn select_individual(&self, cumulative_probs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.unit();
        cumulative_probs
            .iter()
            .position(|&prob| prob >= r)
            .unwrap_or(cumulative_probs.len() - 1)
    }
}

impl Default for EliteRoulette {
    fn default() -> Self {
        Self::new(DEFAULT_SCALING_FACTOR)
    }
}
