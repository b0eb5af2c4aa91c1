use duel::battle::Battle;
use duel_prng::{
    RandomSource,
    SeededRandomSource,
};
use hashbrown::HashMap;

/// A controlled random source, for tests that need fine-grained control over battle randomness.
///
/// Values can be faked at specific positions in the sequence. The underlying source is still
/// advanced for every value, so faking one value does not shift the rest of the sequence.
pub struct ControlledRandomSource {
    count: usize,
    fake_values: HashMap<usize, u64>,
    default_value: Option<u64>,
    real: SeededRandomSource,
}

impl ControlledRandomSource {
    /// A value that makes every roll in the battle engine take its uneventful branch.
    ///
    /// Moves with more than 79% accuracy hit, critical hits below the maximum stage do not
    /// occur, the damage random factor is 1.0, effect chances of 79% or less do not activate,
    /// and no status condition prevents an action. Timed statuses last 2 turns (5 for confusion)
    /// and 2-5 hit moves hit 5 times.
    pub const NEUTRAL_VALUE: u64 = 79;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            default_value: None,
            real: SeededRandomSource::new(seed),
        }
    }

    /// Creates a source that produces [`Self::NEUTRAL_VALUE`] unless a value is faked.
    pub fn neutral(seed: Option<u64>) -> Self {
        let mut source = Self::new(seed);
        source.default_value = Some(Self::NEUTRAL_VALUE);
        source
    }

    /// Sets the value produced when no value is faked, or [`None`] to use the real sequence.
    pub fn set_default_value(&mut self, value: Option<u64>) {
        self.default_value = value;
    }

    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Inserts fake values relative to the current position, where 1 is the next value drawn.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }
}

impl RandomSource for ControlledRandomSource {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let next = self.real.next();
        self.count += 1;
        self.fake_values
            .remove(&self.count)
            .or(self.default_value)
            .unwrap_or(next)
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Returns the battle's random source, if it is a [`ControlledRandomSource`].
pub fn get_controlled_rng_for_battle(battle: &mut Battle) -> Option<&mut ControlledRandomSource> {
    battle
        .random_source_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomSource>()
}
