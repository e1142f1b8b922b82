//! Synthetic fallback data and colors.
//!
//! Randomness is injected through [`RandomSource`] so callers (and tests) can
//! control it. [`RngSource`] adapts any [`rand::Rng`].

use std::ops::Range;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::point::DataPoint;

/// Fixed palette used when a series has no explicit color.
pub const PALETTE: [&str; 10] = [
    "#dfc27d", "#bf812d", "#80cdc1", "#d53e4f", "#f46d43", "#fdae61", "#abdda4", "#66c2a5",
    "#3288bd", "#35978f",
];

/// Length range for synthetic series.
const RANDOM_LEN: Range<usize> = 10..100;
/// Value range for the `y` field of synthetic points.
const RANDOM_Y: Range<f64> = 0.0..100.0;
/// Value range for the `z` (size) field of synthetic points.
const RANDOM_Z: Range<f64> = 0.0..10.0;

/// A source of uniformly distributed values.
pub trait RandomSource {
    /// Uniform integer in `range` (half-open).
    fn int_in(&mut self, range: Range<usize>) -> usize;

    /// Uniform float in `range` (half-open).
    fn float_in(&mut self, range: Range<f64>) -> f64;
}

/// [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }

    fn float_in(&mut self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

/// Generate a synthetic `x`/`y`/`z` series of 10 to 99 points.
///
/// `x` is the point index, `y` is uniform in `[0, 100)` and `z` is uniform
/// in `[0, 10)`.
#[allow(clippy::cast_precision_loss)]
pub fn create_random_data(rng: &mut dyn RandomSource) -> Vec<DataPoint> {
    let len = rng.int_in(RANDOM_LEN);
    (0..len)
        .map(|i| {
            DataPoint::new()
                .with("x", i as f64)
                .with("y", rng.float_in(RANDOM_Y))
                .with("z", rng.float_in(RANDOM_Z))
        })
        .collect()
}

/// Pick a palette color uniformly at random.
pub fn random_color(rng: &mut dyn RandomSource) -> &'static str {
    PALETTE[rng.int_in(0..PALETTE.len()).min(PALETTE.len() - 1)]
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::ops::Range;

    use super::RandomSource;

    /// Replays scripted values, clamped into the requested range.
    #[derive(Debug, Default)]
    pub struct ScriptedSource {
        ints: VecDeque<usize>,
        floats: VecDeque<f64>,
    }

    impl ScriptedSource {
        pub fn new(ints: &[usize], floats: &[f64]) -> Self {
            Self {
                ints: ints.iter().copied().collect(),
                floats: floats.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn int_in(&mut self, range: Range<usize>) -> usize {
            let v = self.ints.pop_front().unwrap_or(range.start);
            v.clamp(range.start, range.end.saturating_sub(1).max(range.start))
        }

        fn float_in(&mut self, range: Range<f64>) -> f64 {
            let v = self.floats.pop_front().unwrap_or(range.start);
            if range.contains(&v) {
                v
            } else {
                range.start
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;

    #[test]
    fn test_random_data_shape_is_scripted() {
        let mut rng = ScriptedSource::new(&[10], &[42.0, 3.0, 7.5, 9.5]);
        let data = create_random_data(&mut rng);

        assert_eq!(data.len(), 10);
        assert_eq!(
            data[0],
            DataPoint::new().with("x", 0.0).with("y", 42.0).with("z", 3.0)
        );
        assert_eq!(
            data[1],
            DataPoint::new().with("x", 1.0).with("y", 7.5).with("z", 9.5)
        );
        // Script exhausted: range starts.
        assert_eq!(data[9].number("y"), Some(0.0));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_random_data_respects_ranges() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..50 {
            let data = create_random_data(&mut rng);
            assert!((10..100).contains(&data.len()));
            for (i, point) in data.iter().enumerate() {
                assert_eq!(point.number("x"), Some(i as f64));
                let y = point.number("y").expect("y");
                let z = point.number("z").expect("z");
                assert!((0.0..100.0).contains(&y));
                assert!((0.0..10.0).contains(&z));
            }
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let a = create_random_data(&mut RngSource::seeded(99));
        let b = create_random_data(&mut RngSource::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_color_from_palette() {
        let mut rng = ScriptedSource::new(&[3, 42], &[]);
        assert_eq!(random_color(&mut rng), "#d53e4f");
        assert_eq!(random_color(&mut rng), "#35978f");

        let mut rng = RngSource::thread();
        for _ in 0..20 {
            assert!(PALETTE.contains(&random_color(&mut rng)));
        }
    }
}
