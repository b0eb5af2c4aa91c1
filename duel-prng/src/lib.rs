pub mod roll;

use std::any::Any;

/// A source of pseudo-random numbers for battle simulations.
///
/// Every random decision in a battle is drawn from a single source, so a battle can be replayed
/// exactly by recreating the source from its initial seed.
pub trait RandomSource: Send + Sync {
    /// Returns the initial seed the source was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A [`RandomSource`] backed by the SplitMix64 generator.
pub struct SeededRandomSource {
    initial_seed: u64,
    state: u64,
}

impl SeededRandomSource {
    /// Creates a new random source.
    ///
    /// Two sources created with the same seed produce the same sequence. If no seed is given, one
    /// is generated.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            state: seed,
        }
    }

    #[cfg(feature = "std")]
    fn generate_seed() -> u64 {
        use rand::Rng;
        rand::rng().random()
    }

    #[cfg(not(feature = "std"))]
    fn generate_seed() -> u64 {
        0
    }

    fn mix(mut z: u64) -> u64 {
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SeededRandomSource {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        Self::mix(self.state)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
