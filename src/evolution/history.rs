use crate::individual::Individual;

/// One checkpoint of a run: the evaluations spent so far and a frozen copy
/// of the best individual at that moment.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub evaluations: usize,
    pub best_individual: Individual,
}

impl HistoryEntry {
    pub fn fitness(&self) -> Option<f64> {
        self.best_individual.fitness()
    }
}

/// The convergence record of a run, in the order checkpoints were taken.
///
/// Entries are only ever appended, and only by the executor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, evaluations: usize, best_individual: &Individual) {
        self.entries.push(HistoryEntry {
            evaluations,
            best_individual: best_individual.clone(),
        });
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Evaluation counts of all checkpoints.
    pub fn evaluations_trace(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.evaluations).collect()
    }

    /// Best fitness of all checkpoints.
    pub fn fitness_trace(&self) -> Vec<f64> {
        self.entries.iter().filter_map(HistoryEntry::fitness).collect()
    }

    /// The checkpoint with the lowest fitness; the earliest one on ties.
    pub fn best_ever(&self) -> Option<&HistoryEntry> {
        self.entries.iter().reduce(|best, entry| {
            match (entry.fitness(), best.fitness()) {
                (Some(candidate), Some(current)) if candidate < current => entry,
                _ => best,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(fitness: f64) -> Individual {
        let mut individual = Individual::from_limits(1, 0.0, 1.0, vec![0.5]).unwrap();
        individual.set_fitness(fitness);
        individual
    }

    #[test]
    fn test_record_keeps_frozen_copy() {
        let mut history = History::new();
        let mut best = snapshot(3.0);

        history.record(10, &best);
        best.set_fitness(1.0);

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().and_then(HistoryEntry::fitness), Some(3.0));
    }

    #[test]
    fn test_traces() {
        let mut history = History::new();
        history.record(10, &snapshot(5.0));
        history.record(12, &snapshot(4.0));
        history.record(14, &snapshot(4.0));

        assert_eq!(history.evaluations_trace(), vec![10, 12, 14]);
        assert_eq!(history.fitness_trace(), vec![5.0, 4.0, 4.0]);
        assert_eq!(history.best_ever().map(|e| e.evaluations), Some(12));
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();

        assert!(history.is_empty());
        assert!(history.best_ever().is_none());
        assert!(history.first().is_none());
    }
}
