/// The objective an evolution run minimizes.
///
/// `score` is called synchronously, once per evaluated individual, and is
/// assumed to be pure. Results are never cached, so duplicate chromosomes are
/// scored again.
///
/// Any `Fn(&[f64]) -> f64` is a `Challenge`:
///
/// ```rust
/// use mggalg::evolution::Challenge;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.score(&[1.0, 2.0]), 5.0);
/// ```
pub trait Challenge {
    fn score(&self, chromosome: &[f64]) -> f64;
}

impl<F> Challenge for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, chromosome: &[f64]) -> f64 {
        self(chromosome)
    }
}
