use std::sync::Arc;

use mggalg::{
    bounds::Bounds,
    crossover::Crossover,
    evolution::{CrossoverKind, Executor, GenerationManager, RunConfiguration},
    objective::{rastrigin, sum_abs},
    population::Population,
    rng::RandomNumberGenerator,
    selection::Selection,
};

#[test]
fn test_simplex_accepts_small_population() {
    let config = RunConfiguration::builder()
        .population_size(6)
        .dimension(3)
        .max_evaluations(60)
        .limits(-5.0, 5.0)
        .crossover(CrossoverKind::Simplex)
        .seed(12345)
        .build()
        .unwrap();

    let bounds = Arc::new(config.bounds().unwrap());
    let manager = GenerationManager::new(
        config.crossover_operator(),
        config.selection(),
        sum_abs,
        bounds.clone(),
    )
    .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(config.get_seed());
    let mut population = Population::random(6, bounds, &mut rng).unwrap();
    manager.evaluate_population(&mut population).unwrap();

    let next = manager.next_generation(&population, &mut rng).unwrap();

    assert_eq!(next.len(), 6);
    assert_eq!(population.len(), 6);
}

#[test]
fn test_simplex_keeps_genes_in_bounds() {
    // Narrow bounds around a corner push raw simplex children outside.
    let bounds = Arc::new(Bounds::new(4, 0.0, 1.0).unwrap());
    let manager = GenerationManager::new(
        Crossover::simplex(4),
        Selection::default(),
        |x: &[f64]| x.iter().map(|v| (v - 1.0).abs()).sum::<f64>(),
        bounds.clone(),
    )
    .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(99);
    let mut population = Population::random(8, bounds.clone(), &mut rng).unwrap();
    manager.evaluate_population(&mut population).unwrap();

    for _ in 0..200 {
        population = manager.next_generation(&population, &mut rng).unwrap();
        assert_eq!(population.len(), 8);
        assert!(population.iter().all(|i| bounds.contains(i.chromosome())));
    }
}

#[test]
fn test_simplex_deterministic_run() {
    let config = RunConfiguration::builder()
        .population_size(12)
        .dimension(4)
        .max_evaluations(200)
        .limits(-5.12, 5.12)
        .crossover(CrossoverKind::Simplex)
        .seed(2024)
        .build()
        .unwrap();

    let mut first = Executor::new(config.clone(), rastrigin).unwrap();
    let mut second = Executor::new(config, rastrigin).unwrap();
    first.execute().unwrap();
    second.execute().unwrap();

    assert_eq!(first.history().len(), second.history().len());
    assert_eq!(first.history().fitness_trace(), second.history().fitness_trace());
    assert_eq!(first.history().last().unwrap().evaluations, 200);
}
