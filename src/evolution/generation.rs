use std::sync::Arc;

use tracing::trace;

use super::challenge::Challenge;
use crate::{
    bounds::Bounds,
    crossover::Crossover,
    error::{GeneticError, Result},
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    selection::Selection,
};

/// Children produced, and therefore evaluations spent, by one generation.
pub const EVALUATIONS_PER_GENERATION: usize = 2;

/// Performs one Minimal Generation Gap step.
///
/// A step withdraws parents from a copy of the population, breeds and
/// evaluates two children, lets elite-roulette selection pick two survivors,
/// and puts them back. The population size is the same before and after.
#[derive(Debug, Clone)]
pub struct GenerationManager<C>
where
    C: Challenge,
{
    crossover: Crossover,
    selection: Selection,
    challenge: C,
    bounds: Arc<Bounds>,
}

impl<C> GenerationManager<C>
where
    C: Challenge,
{
    /// Binds the operators, the evaluation function, and the bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a simplex operator was built
    /// for a different dimension than `bounds`.
    pub fn new(
        crossover: Crossover,
        selection: Selection,
        challenge: C,
        bounds: Arc<Bounds>,
    ) -> Result<Self> {
        if let Crossover::Simplex { n_dim } = crossover {
            if n_dim != bounds.dimension() {
                return Err(GeneticError::Configuration(format!(
                    "Simplex crossover dimension ({}) doesn't match bounds dimension ({})",
                    n_dim,
                    bounds.dimension()
                )));
            }
        }

        Ok(Self {
            crossover,
            selection,
            challenge,
            bounds,
        })
    }

    pub fn crossover(&self) -> &Crossover {
        &self.crossover
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    pub fn bounds(&self) -> &Arc<Bounds> {
        &self.bounds
    }

    /// Evaluations consumed by [`GenerationManager::next_generation`], for
    /// either crossover kind.
    pub fn evaluations_per_generation(&self) -> usize {
        EVALUATIONS_PER_GENERATION
    }

    /// Scores `individual` with the evaluation function and stores the result.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Evaluation` if the function returns NaN.
    pub fn evaluate(&self, individual: &mut Individual) -> Result<()> {
        let fitness = self.challenge.score(individual.chromosome());
        if fitness.is_nan() {
            return Err(GeneticError::Evaluation(format!(
                "Evaluation function returned NaN for {:?}",
                individual.chromosome()
            )));
        }
        individual.set_fitness(fitness);
        Ok(())
    }

    /// Evaluates every member of `population` and returns how many calls were made.
    pub fn evaluate_population(&self, population: &mut Population) -> Result<usize> {
        let mut count = 0;
        for individual in population.iter_mut() {
            self.evaluate(individual)?;
            count += 1;
        }
        Ok(count)
    }

    /// Produces the population of the next generation.
    ///
    /// `population` itself is left untouched; the step works on a copy.
    pub fn next_generation(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let mut next = population.clone();

        match self.crossover {
            Crossover::BlxAlpha { .. } => {
                let parents = next.pop(self.crossover.parents_required(), rng)?;
                let children = self.breed_children(&parents, rng)?;

                let candidates: Vec<Individual> = parents.into_iter().chain(children).collect();
                let survivors = self
                    .selection
                    .select(candidates, EVALUATIONS_PER_GENERATION, rng)?;
                next.add(survivors)?;
            }
            Crossover::Simplex { .. } => {
                let parents = next.pop(self.crossover.parents_required(), rng)?;
                let children = self.breed_children(&parents, rng)?;

                let mut family = Population::from_individuals(self.bounds.clone(), parents)?;
                let contenders = family.pop(EVALUATIONS_PER_GENERATION, rng)?;

                let candidates: Vec<Individual> = contenders.into_iter().chain(children).collect();
                let survivors = self
                    .selection
                    .select(candidates, EVALUATIONS_PER_GENERATION, rng)?;
                next.add(survivors)?;
                next.add(family.into_individuals())?;
            }
        }

        trace!(
            size = next.len(),
            crossover = ?self.crossover,
            "generation step complete"
        );
        Ok(next)
    }

    /// Two evaluated children from the same parent set.
    fn breed_children(
        &self,
        parents: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let chromosomes: Vec<&[f64]> = parents.iter().map(Individual::chromosome).collect();

        (0..EVALUATIONS_PER_GENERATION)
            .map(|_| {
                let genes = self.crossover.crossover(&chromosomes, &self.bounds, rng)?;
                let mut child = Individual::with_chromosome(self.bounds.clone(), genes)?;
                self.evaluate(&mut child)?;
                Ok(child)
            })
            .collect()
    }
}
