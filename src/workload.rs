//! Process set construction: the reference sample and random workloads.

use rand::Rng;

use crate::models::Process;

/// The reference three-process sample: AT = [0, 1, 2], BT = [5, 3, 8].
pub fn sample_workload() -> Vec<Process> {
    Process::from_times(&[0, 1, 2], &[5, 3, 8])
}

/// Random process set generator.
///
/// Produces sets with pids 1..=count, arrivals in `0..=max_arrival` and
/// bursts in `min_burst..=max_burst` (min clamped to 1). Pids are `u32`,
/// so the count saturates at `u32::MAX`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: u32,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (arrivals 0..=10, bursts 1..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count: u32::try_from(count).unwrap_or(u32::MAX).max(1),
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Number of processes per generated set.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst time range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Draws a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|pid| {
                Process::new(
                    pid,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_workload() {
        let procs = sample_workload();
        assert_eq!(procs.len(), 3);
        assert_eq!(procs[2], Process::new(3, 2, 8));
    }

    #[test]
    fn test_generated_sets_are_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let generator = WorkloadGenerator::new(20)
            .with_max_arrival(5)
            .with_burst_range(2, 4);
        for _ in 0..50 {
            let procs = generator.generate(&mut rng);
            assert_eq!(procs.len(), 20);
            assert!(validate_processes(&procs).is_ok());
            assert!(procs.iter().all(|p| (0..=5).contains(&p.arrival_time)));
            assert!(procs.iter().all(|p| (2..=4).contains(&p.burst_time)));
        }
    }

    #[test]
    fn test_generator_clamps_ranges() {
        let mut rng = SmallRng::seed_from_u64(3);
        let procs = WorkloadGenerator::new(0)
            .with_max_arrival(-5)
            .with_burst_range(-2, -9)
            .generate(&mut rng);
        assert_eq!(procs, vec![Process::new(1, 0, 1)]);
    }

    #[test]
    fn test_count_saturates_at_pid_range() {
        assert_eq!(WorkloadGenerator::new(0).count(), 1);
        assert_eq!(WorkloadGenerator::new(6).count(), 6);
        assert_eq!(WorkloadGenerator::new(usize::MAX).count(), u32::MAX);
    }

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let generator = WorkloadGenerator::new(6);
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
