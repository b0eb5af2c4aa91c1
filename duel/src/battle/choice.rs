use anyhow::Result;
use duel_prng::{
    RandomSource,
    roll,
};

use crate::{
    error::general_error,
    mons::Combatant,
};

/// Chooses which move a combatant uses on a turn.
pub trait MoveChooser {
    /// Chooses a move slot for `user`.
    ///
    /// `source` is the battle's random source, so choices made through it are reproducible from
    /// the battle seed.
    fn choose_move(
        &mut self,
        user: &Combatant,
        opponent: &Combatant,
        source: &mut dyn RandomSource,
    ) -> Result<usize>;
}

/// Chooses a move slot uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMoveChooser;

impl MoveChooser for RandomMoveChooser {
    fn choose_move(
        &mut self,
        user: &Combatant,
        _: &Combatant,
        source: &mut dyn RandomSource,
    ) -> Result<usize> {
        if user.moves.is_empty() {
            return Err(general_error(format!("{} has no moves", user.ident())));
        }
        Ok(roll::range(source, 0, user.moves.len() as u64) as usize)
    }
}

/// Always chooses the same move slot.
#[derive(Debug, Clone, Copy)]
pub struct FixedMoveChooser(pub usize);

impl MoveChooser for FixedMoveChooser {
    fn choose_move(&mut self, _: &Combatant, _: &Combatant, _: &mut dyn RandomSource) -> Result<usize> {
        Ok(self.0)
    }
}
