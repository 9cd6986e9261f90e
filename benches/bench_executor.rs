use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mggalg::{
    evolution::{CrossoverKind, Executor, RunConfiguration},
    objective::rastrigin,
};

fn bench_executor(c: &mut Criterion) {
    let mut group = c.benchmark_group("mgg_run");
    for crossover in [CrossoverKind::BlxAlpha, CrossoverKind::Simplex] {
        for max_evaluations in [1_000, 10_000].iter() {
            let config = RunConfiguration::builder()
                .population_size(50)
                .dimension(10)
                .max_evaluations(*max_evaluations)
                .limits(-5.12, 5.12)
                .crossover(crossover)
                .seed(1)
                .build()
                .unwrap();

            group.bench_function(&format!("{}_{}", crossover, max_evaluations), |b| {
                b.iter(|| {
                    let mut executor = Executor::new(black_box(config.clone()), rastrigin).unwrap();
                    executor.execute().unwrap();
                    black_box(executor.best_individual().and_then(|i| i.fitness()))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_executor);
criterion_main!(benches);
