use crate::{bounds::Bounds, rng::RandomNumberGenerator};

/// The expansion factor used when none is configured.
pub const DEFAULT_ALPHA: f64 = 0.36;

/// Blend crossover (BLX-α).
///
/// For each gene the child is drawn uniformly from the parents' interval
/// `[x, y]` widened by `alpha * (y - x)` on both sides and cut to the bounds.
/// Genes are drawn independently in index order. The child never leaves the
/// bounds as long as both parents are inside them.
///
/// Callers guarantee both parents have the same length as `bounds`.
///
/// # Examples
///
/// ```rust
/// use mggalg::{bounds::Bounds, crossover::blx_alpha, rng::RandomNumberGenerator};
///
/// let bounds = Bounds::new(2, 0.0, 1.0).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let child = blx_alpha(&[0.2, 0.2], &[0.4, 0.4], 0.36, &bounds, &mut rng);
///
/// assert!(bounds.contains(&child));
/// ```
pub fn blx_alpha(
    parent1: &[f64],
    parent2: &[f64],
    alpha: f64,
    bounds: &Bounds,
    rng: &mut RandomNumberGenerator,
) -> Vec<f64> {
    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| {
            let x = a.min(b);
            let y = a.max(b);
            // `y - x` overflows for parents near opposite ends of the widest boxes.
            let spread = if alpha == 0.0 { 0.0 } else { alpha * (y - x) };

            let low = (x - spread).max(bounds.lower());
            let high = (y + spread).min(bounds.upper());

            rng.uniform(low.min(high), high)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_alpha_stays_between_parents() {
        let bounds = Bounds::new(3, -10.0, 10.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let p1 = [0.0, 2.0, -1.0];
        let p2 = [1.0, -2.0, -1.0];

        for _ in 0..200 {
            let child = blx_alpha(&p1, &p2, 0.0, &bounds, &mut rng);
            assert!((0.0..=1.0).contains(&child[0]));
            assert!((-2.0..=2.0).contains(&child[1]));
            assert_eq!(child[2], -1.0);
        }
    }

    #[test]
    fn test_expanded_interval_is_cut_at_bounds() {
        let bounds = Bounds::new(1, 0.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        for _ in 0..500 {
            let child = blx_alpha(&[0.0], &[1.0], 2.0, &bounds, &mut rng);
            assert!(bounds.contains(&child));
        }
    }

    #[test]
    fn test_alpha_expands_beyond_parents() {
        let bounds = Bounds::new(1, -100.0, 100.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let escaped = (0..500)
            .map(|_| blx_alpha(&[0.0], &[1.0], 0.5, &bounds, &mut rng)[0])
            .inspect(|&gene| assert!((-0.5..=1.5).contains(&gene)))
            .any(|gene| !(0.0..=1.0).contains(&gene));

        assert!(escaped);
    }

    #[test]
    fn test_parents_at_extreme_finite_limits() {
        let bounds = Bounds::new(1, -f64::MAX, f64::MAX).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(6);

        for _ in 0..100 {
            let child = blx_alpha(&[-f64::MAX], &[f64::MAX], DEFAULT_ALPHA, &bounds, &mut rng);
            assert!(bounds.contains(&child));

            let child = blx_alpha(&[-f64::MAX], &[f64::MAX], 0.0, &bounds, &mut rng);
            assert!(bounds.contains(&child));
        }
    }

    #[test]
    fn test_same_seed_same_child() {
        let bounds = Bounds::new(2, -5.0, 5.0).unwrap();
        let mut rng1 = RandomNumberGenerator::from_seed(77);
        let mut rng2 = RandomNumberGenerator::from_seed(77);

        let c1 = blx_alpha(&[1.0, 2.0], &[3.0, -1.0], DEFAULT_ALPHA, &bounds, &mut rng1);
        let c2 = blx_alpha(&[1.0, 2.0], &[3.0, -1.0], DEFAULT_ALPHA, &bounds, &mut rng2);

        assert_eq!(c1, c2);
    }
}
