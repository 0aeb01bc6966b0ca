//! Deterministic id sampling for the benchmark driver
//!
//! Query and update passes pick their inputs with a fixed linear
//! congruential generator so every run of the workload touches the same
//! id sequence. Sampled ids may miss the store (deletions, sparse id
//! ranges); callers skip misses.

/// Linear congruential generator, modulus 2^31
pub struct Lcg {
    state: i64,
}

const MODULUS: i64 = 1 << 31;
const MULTIPLIER: i64 = 1103515245;
const INCREMENT: i64 = 12345;

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg {
            state: i64::from(seed),
        }
    }

    /// Next sample in `0..=max`.
    pub fn next_in(&mut self, max: u32) -> u32 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        (self.state % (i64::from(max) + 1)) as u32
    }
}

/// Sample `count` ids in `0..=max` from the given seed.
pub fn sample_ids(max: u32, count: usize, seed: u32) -> Vec<u32> {
    let mut lcg = Lcg::new(seed);
    (0..count).map(|_| lcg.next_in(max)).collect()
}
