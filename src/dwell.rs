use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Dwell time charged by every node when no seed is configured.
pub const DEFAULT_DWELL_TIME: f64 = 5.0;

/// Upper bound (exclusive) of randomized dwell times.
const MAX_RANDOM_DWELL: f64 = 10.0;

/// How nodes are assigned the dwell time they charge on every arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DwellTimes {
    /// Every node charges the same dwell time.
    Fixed(f64),
    /// Every node draws its own dwell time, once, from a generator seeded
    /// with this value. The same seed always produces the same assignment.
    Seeded(u64),
}

impl Default for DwellTimes {
    fn default() -> Self {
        Self::Fixed(DEFAULT_DWELL_TIME)
    }
}

impl DwellTimes {
    /// Draws one dwell time per node.
    ///
    /// The generator lives only for the duration of this call, so graphs
    /// built in the same process never share or perturb each other's stream.
    pub(crate) fn sample(&self, node_count: usize) -> Vec<f64> {
        match *self {
            Self::Fixed(dwell_time) => {
                if dwell_time < 0.0 {
                    warn!(
                        "negative dwell time {dwell_time}: earliest-arrival \
                         correctness is not guaranteed"
                    );
                }
                vec![dwell_time; node_count]
            }
            Self::Seeded(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (0..node_count)
                    .map(|_| rng.random::<f64>() * MAX_RANDOM_DWELL)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn dwell_times_001() {
        assert_eq!(DwellTimes::default().sample(3), vec![5.0, 5.0, 5.0]);
        assert_eq!(DwellTimes::Fixed(0.5).sample(2), vec![0.5, 0.5]);
        assert!(DwellTimes::Fixed(1.0).sample(0).is_empty());
    }

    #[test]
    fn dwell_times_002() {
        let first = DwellTimes::Seeded(970_758).sample(100);
        let second = DwellTimes::Seeded(970_758).sample(100);

        assert_eq!(first, second);
        assert!(first.iter().all(|&dwell| (0.0..MAX_RANDOM_DWELL).contains(&dwell)));
    }

    #[test]
    fn dwell_times_003() {
        let first = DwellTimes::Seeded(1).sample(100);
        let second = DwellTimes::Seeded(2).sample(100);

        assert_ne!(first, second);
    }
}
