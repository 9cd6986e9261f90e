use std::sync::Arc;

use tracing::{debug, info};

use super::{
    challenge::Challenge, generation::GenerationManager, history::History,
    options::RunConfiguration,
};
use crate::{
    bounds::Bounds,
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Lifecycle of an [`Executor`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// Built, or being reset for a new run.
    Setup,
    /// The initial population exists and generations are being advanced.
    Running,
    /// The remaining budget cannot pay for another generation.
    Terminated,
}

/// Drives an MGG run from a random initial population until the evaluation
/// budget is spent, recording a history checkpoint after every generation.
pub struct Executor<C>
where
    C: Challenge,
{
    config: RunConfiguration,
    manager: GenerationManager<C>,
    rng: RandomNumberGenerator,
    population: Option<Population>,
    history: History,
    evaluations: usize,
    generations: usize,
    state: ExecutorState,
}

impl<C> Executor<C>
where
    C: Challenge,
{
    /// Creates an executor for `config` minimizing `challenge`.
    ///
    /// # Errors
    ///
    /// Fails only if the configuration's bounds or operators are inconsistent,
    /// which a built `RunConfiguration` rules out.
    pub fn new(config: RunConfiguration, challenge: C) -> Result<Self> {
        let bounds = Arc::new(config.bounds()?);
        let manager = GenerationManager::new(
            config.crossover_operator(),
            config.selection(),
            challenge,
            bounds,
        )?;
        let rng = RandomNumberGenerator::from_seed(config.get_seed());

        Ok(Self {
            config,
            manager,
            rng,
            population: None,
            history: History::new(),
            evaluations: 0,
            generations: 0,
            state: ExecutorState::Setup,
        })
    }

    /// Runs the configuration to completion.
    ///
    /// Every call starts over from a freshly seeded generator, so repeated
    /// calls reproduce the same history.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors. The population and history keep the state
    /// of the last completed generation.
    pub fn execute(&mut self) -> Result<()> {
        self.setup();
        info!(
            population_size = self.config.get_population_size(),
            dimension = self.config.get_dimension(),
            max_evaluations = self.config.get_max_evaluations(),
            crossover = %self.config.get_crossover(),
            seed = self.config.get_seed(),
            "starting run"
        );

        let mut population = Population::random(
            self.config.get_population_size(),
            self.bounds().clone(),
            &mut self.rng,
        )?;
        self.evaluations += self.manager.evaluate_population(&mut population)?;
        self.history
            .record(self.evaluations, population.best_individual()?);
        self.population = Some(population);
        self.state = ExecutorState::Running;

        while self.remaining_evaluations() >= self.manager.evaluations_per_generation() {
            self.advance()?;
        }

        self.state = ExecutorState::Terminated;
        info!(
            evaluations = self.evaluations,
            generations = self.generations,
            best_fitness = ?self.best_individual().and_then(Individual::fitness),
            "run terminated"
        );
        Ok(())
    }

    fn setup(&mut self) {
        self.state = ExecutorState::Setup;
        self.rng.reseed(self.config.get_seed());
        self.population = None;
        self.history.clear();
        self.evaluations = 0;
        self.generations = 0;
    }

    fn advance(&mut self) -> Result<()> {
        let current = self.population.as_ref().ok_or_else_genetic(|| {
            GeneticError::Population("No population to advance".to_string())
        })?;
        let next = self.manager.next_generation(current, &mut self.rng)?;

        self.evaluations += self.manager.evaluations_per_generation();
        self.generations += 1;

        let best = next.best_individual()?;
        debug!(
            generation = self.generations,
            evaluations = self.evaluations,
            best_fitness = ?best.fitness(),
            "generation complete"
        );
        self.history.record(self.evaluations, best);
        self.population = Some(next);
        Ok(())
    }

    /// The best individual of the current population, or `None` before a run
    /// has initialized one.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.population
            .as_ref()
            .and_then(|population| population.best_individual().ok())
    }

    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn configuration(&self) -> &RunConfiguration {
        &self.config
    }

    pub fn bounds(&self) -> &Arc<Bounds> {
        self.manager.bounds()
    }

    /// Evaluations spent so far in the current run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn remaining_evaluations(&self) -> usize {
        self.config
            .get_max_evaluations()
            .saturating_sub(self.evaluations)
    }

    /// Generations completed in the current run.
    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn state(&self) -> ExecutorState {
        self.state
    }
}
