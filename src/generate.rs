use rand::distributions::{Distribution, Uniform};
use rand::Rng;

// Axis bounds used by the CLI; every value lands in [MIN_VALUE, MAX_VALUE)
pub const MIN_VALUE: f64 = 0.0;
pub const MAX_VALUE: f64 = 100.0;

// Lazily generates `count` nodes, each `dimensions` values drawn independently
// and uniformly from the half-open range [min_val, max_val).
// Re-invoking samples fresh values; there is no replay.
pub fn random_nodes<R: Rng>(
    count: usize,
    dimensions: usize,
    min_val: f64,
    max_val: f64,
    rng: &mut R,
) -> impl Iterator<Item = Vec<f64>> + '_ {
    let axis = Uniform::from(min_val..max_val);
    (0..count).map(move |_| (0..dimensions).map(|_| axis.sample(rng)).collect())
}
