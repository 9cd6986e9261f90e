use crate::rng::RandomNumberGenerator;

/// Parents with a gene beyond this magnitude are processed at `2^-64` scale
/// so the expansion cannot overflow.
const RESCALE_ABOVE: f64 = 1e289;

/// Simplex crossover (SPX).
///
/// Takes `n_dim + 1` parents, expands the simplex they span around its
/// centroid by `sqrt(n_dim + 2)`, and walks from the last expanded vertex
/// through a chain of randomly shrunk steps toward the others. Every call
/// draws fresh coefficients `r_i = U(0,1)^(1/i)`, `i = 1..=n`, in order.
///
/// The child is not clamped here and may lie outside the bounds; the
/// `Individual` it is written into clamps it.
///
/// Callers guarantee at least one parent and equal parent lengths.
///
/// # Examples
///
/// ```rust
/// use mggalg::{crossover::simplex, rng::RandomNumberGenerator};
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let parents: [&[f64]; 3] = [&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]];
/// let child = simplex(&parents, &mut rng);
///
/// assert_eq!(child.len(), 2);
/// ```
pub fn simplex(parents: &[&[f64]], rng: &mut RandomNumberGenerator) -> Vec<f64> {
    let n_dim = parents.first().map_or(0, |p| p.len());
    let count = parents.len() as f64;
    let epsilon = ((n_dim + 2) as f64).sqrt();
    let largest = parents
        .iter()
        .flat_map(|p| p.iter())
        .fold(0.0_f64, |acc, gene| acc.max(gene.abs()));
    let scale = if largest > RESCALE_ABOVE { 2f64.powi(64) } else { 1.0 };

    let mut centroid = vec![0.0; n_dim];
    for parent in parents {
        centroid
            .iter_mut()
            .zip(parent.iter())
            .for_each(|(m, &gene)| *m += gene / scale);
    }
    centroid.iter_mut().for_each(|m| *m /= count);

    let expanded: Vec<Vec<f64>> = parents
        .iter()
        .map(|parent| {
            parent
                .iter()
                .zip(&centroid)
                .map(|(&gene, &m)| m + epsilon * (gene / scale - m))
                .collect()
        })
        .collect();

    let mut drift = vec![0.0; n_dim];
    for i in 1..expanded.len() {
        let r = rng.unit().powf(1.0 / i as f64);
        drift = expanded[i - 1]
            .iter()
            .zip(&expanded[i])
            .zip(&drift)
            .map(|((&prev, &cur), &c)| r * (prev - cur + c))
            .collect();
    }

    match expanded.last() {
        Some(last) => last
            .iter()
            .zip(&drift)
            .map(|(&x, &c)| (x + c) * scale)
            .collect(),
        None => Vec::new(),
    }
}
