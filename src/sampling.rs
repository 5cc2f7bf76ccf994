use hashbrown::HashSet;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::{Float, Point};

/// Default seed of the point generator, so that repeated runs with the same
/// requested count produce the same point set
pub const DEFAULT_SEED: u64 = 2023;

/// Coordinates are drawn as integers from `[0, COORDINATE_MAX]`
pub const COORDINATE_MAX: u32 = 1000;

/// Generates up to `count` distinct points with integer coordinates drawn
/// uniformly from `[0, 1000] x [0, 1000]`.
///
/// Duplicate draws are discarded, so the result may hold slightly fewer than
/// `count` points. The surviving points keep their draw order, which makes the
/// output deterministic for a given `seed`.
pub fn random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut uniques = HashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let point = Point::new(
            rng.gen_range(0..=COORDINATE_MAX) as Float,
            rng.gen_range(0..=COORDINATE_MAX) as Float,
        );
        if uniques.insert(point) {
            points.push(point);
        }
    }
    debug!(
        "generated {} unique points out of {} draws",
        points.len(),
        count
    );
    points
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
