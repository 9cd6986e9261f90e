//! # Population
//!
//! A `Population` is the bag of individuals the MGG model evolves. Order
//! carries no meaning. Between completed generations it holds exactly its
//! nominal size; within a generation parents are withdrawn and survivors are
//! added back.
//!
//! Removal works on slot positions rather than value equality, so two
//! individuals with identical chromosomes are never conflated.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mggalg::{bounds::Bounds, population::Population, rng::RandomNumberGenerator};
//!
//! let bounds = Arc::new(Bounds::new(3, -5.0, 5.0).unwrap());
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut population = Population::random(10, bounds, &mut rng).unwrap();
//!
//! let parents = population.pop(2, &mut rng).unwrap();
//! assert_eq!(population.len(), 8);
//!
//! population.add(parents).unwrap();
//! assert_eq!(population.len(), 10);
//! ```

use std::sync::Arc;

use crate::{
    bounds::Bounds,
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// A mutable bag of individuals sharing one `Bounds`.
///
/// `Clone` produces an independent copy with freshly copied individuals.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    size: usize,
    bounds: Arc<Bounds>,
}

impl Population {
    /// Creates an empty population with nominal size `size`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Population` if `size` is zero.
    pub fn new(size: usize, bounds: Arc<Bounds>) -> Result<Self> {
        if size == 0 {
            return Err(GeneticError::Population(
                "Population size must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            individuals: Vec::with_capacity(size),
            size,
            bounds,
        })
    }

    /// Creates a population of `size` individuals with random chromosomes.
    ///
    /// Fitness is left unset.
    pub fn random(size: usize, bounds: Arc<Bounds>, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let mut population = Self::new(size, bounds)?;
        let individuals: Vec<Individual> = (0..size)
            .map(|_| Individual::random(population.bounds.clone(), rng))
            .collect();
        population.individuals = individuals;
        Ok(population)
    }

    /// Adopts existing individuals; the nominal size becomes their count.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Population` if `individuals` is empty and
    /// `GeneticError::Configuration` if any individual has the wrong dimension
    /// or different bounds.
    pub fn from_individuals(bounds: Arc<Bounds>, individuals: Vec<Individual>) -> Result<Self> {
        let mut population = Self::new(individuals.len(), bounds)?;
        population.add(individuals)?;
        Ok(population)
    }

    /// Number of individuals currently held.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if no individuals are held, e.g. mid-generation after
    /// every member was withdrawn.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The size the population returns to after every completed generation.
    pub fn nominal_size(&self) -> usize {
        self.size
    }

    /// Returns `true` when the current size equals the nominal size.
    pub fn is_complete(&self) -> bool {
        self.individuals.len() == self.size
    }

    /// The bounds shared by every member.
    pub fn bounds(&self) -> &Arc<Bounds> {
        &self.bounds
    }

    /// Returns the members in bag order.
    ///
    /// # Returns
    ///
    /// A slice whose indices are the slot positions accepted by `delete`.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Consumes the population and returns its members.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Adds individuals to the bag.
    ///
    /// # Arguments
    ///
    /// * `individuals` - Members to add. Each must have this population's
    ///   dimension and the same bounds, either the shared `Arc` or an equal box.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` on the first individual that
    /// doesn't fit; nothing is added in that case.
    pub fn add<I>(&mut self, individuals: I) -> Result<()>
    where
        I: IntoIterator<Item = Individual>,
    {
        let incoming: Vec<Individual> = individuals.into_iter().collect();
        for individual in &incoming {
            self.check_member(individual)?;
        }
        self.individuals.extend(incoming);
        Ok(())
    }

    /// Picks `k` distinct individuals uniformly at random without removing them.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Population` if `k` exceeds the current size.
    pub fn sample(&self, k: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<&Individual>> {
        let positions = self.sample_positions(k, rng)?;
        Ok(positions.iter().map(|&i| &self.individuals[i]).collect())
    }

    /// Samples `k` individuals and removes exactly those from the bag.
    ///
    /// Either all `k` are removed or, on error, none are.
    pub fn pop(&mut self, k: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<Individual>> {
        let positions = self.sample_positions(k, rng)?;
        Ok(self.take_positions(&positions))
    }

    /// Removes the individuals at the given slot positions and returns them.
    ///
    /// Duplicate positions are removed once. An empty slice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Population` if a position is out of range;
    /// nothing is removed in that case.
    pub fn delete(&mut self, positions: &[usize]) -> Result<Vec<Individual>> {
        if let Some(&position) = positions.iter().find(|&&p| p >= self.individuals.len()) {
            return Err(GeneticError::Population(format!(
                "Position {} is out of range for a population of {}",
                position,
                self.individuals.len()
            )));
        }
        Ok(self.take_positions(positions))
    }

    /// Returns the individual with the lowest fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the bag is empty and
    /// `GeneticError::Unevaluated` if any member has no fitness yet.
    pub fn best_individual(&self) -> Result<&Individual> {
        self.ensure_evaluated("looking up the best individual")?;
        self.individuals
            .iter()
            .min_by(|a, b| fitness_of(a).total_cmp(&fitness_of(b)))
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// The fitness of every evaluated individual, in bag order.
    pub fn fitness_values(&self) -> Vec<f64> {
        self.individuals
            .iter()
            .filter_map(Individual::fitness)
            .collect()
    }

    /// Mean fitness of the evaluated individuals, if there are any.
    pub fn mean_fitness(&self) -> Option<f64> {
        let values = self.fitness_values();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn check_member(&self, individual: &Individual) -> Result<()> {
        if individual.dimension() != self.bounds.dimension() {
            return Err(GeneticError::Configuration(format!(
                "Individual dimension ({}) doesn't match population dimension ({})",
                individual.dimension(),
                self.bounds.dimension()
            )));
        }
        if !Arc::ptr_eq(individual.bounds(), &self.bounds) && **individual.bounds() != *self.bounds {
            return Err(GeneticError::Configuration(format!(
                "Individual bounds [{}, {}] don't match population bounds [{}, {}]",
                individual.bounds().lower(),
                individual.bounds().upper(),
                self.bounds.lower(),
                self.bounds.upper()
            )));
        }
        Ok(())
    }

    fn ensure_evaluated(&self, operation: &str) -> Result<()> {
        if self.individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if self.individuals.iter().any(|i| !i.is_evaluated()) {
            return Err(GeneticError::Unevaluated(operation.to_string()));
        }
        Ok(())
    }

    fn sample_positions(&self, k: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<usize>> {
        if k > self.individuals.len() {
            return Err(GeneticError::Population(format!(
                "Cannot sample {} individuals from a population of {}",
                k,
                self.individuals.len()
            )));
        }
        Ok(rng.sample_indices(self.individuals.len(), k))
    }

    fn take_positions(&mut self, positions: &[usize]) -> Vec<Individual> {
        if positions.is_empty() {
            return Vec::new();
        }

        let mut slots: Vec<Option<Individual>> =
            self.individuals.drain(..).map(Some).collect();
        let taken = positions
            .iter()
            .filter_map(|&position| slots[position].take())
            .collect();
        self.individuals = slots.into_iter().flatten().collect();
        taken
    }
}

// Only called after `ensure_evaluated`.
fn fitness_of(individual: &Individual) -> f64 {
    individual.fitness().unwrap_or(f64::INFINITY)
}
