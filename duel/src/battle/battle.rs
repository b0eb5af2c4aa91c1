use anyhow::Result;
use duel_data::{
    DataStore,
    TypeChart,
};
use duel_prng::RandomSource;

use crate::{
    battle::{
        BattleEngineOptions,
        BattleOptions,
        BattleOutcome,
        BattleResult,
        Field,
        MoveChooser,
        Side,
        TurnOutcome,
        TurnResolver,
        battle_logs,
    },
    error::{
        BattleEndedError,
        InvalidChoiceError,
        WrapOptionError,
        WrapResultError,
    },
    log::{
        Event,
        EventLog,
    },
    mons::Combatant,
    teams::{
        CombatantData,
        validate_combatant,
    },
};

/// A one-on-one battle between two combatants.
///
/// The battle owns all of its state: both combatants, the field, and its random source. Static
/// data is resolved from the [`DataStore`] when the battle is created, so the store does not need
/// to outlive the battle.
pub struct Battle {
    combatants: [Combatant; 2],
    field: Field,
    source: Box<dyn RandomSource>,
    type_chart: TypeChart,
    engine_options: BattleEngineOptions,
    log: EventLog,
    turn: u32,
    result: Option<BattleResult>,
}

impl Battle {
    /// Creates a new battle.
    ///
    /// Both combatants are validated against the data store first. No random values are drawn
    /// until the first turn.
    pub fn new(
        a: &CombatantData,
        b: &CombatantData,
        data: &dyn DataStore,
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Result<Self> {
        validate_combatant(a, data).wrap_error_with_message("invalid combatant for side A")?;
        validate_combatant(b, data).wrap_error_with_message("invalid combatant for side B")?;
        let combatants = [
            Combatant::new(a, Side::A, data)?,
            Combatant::new(b, Side::B, data)?,
        ];
        let type_chart = data
            .get_type_chart()
            .wrap_error_with_message("failed to load type chart")?;
        let source = (engine_options.random_source_factory)(options.seed);
        log::debug!(
            "starting battle between {} and {} with seed {}",
            combatants[0].ident(),
            combatants[1].ident(),
            source.initial_seed(),
        );

        let mut battle = Self {
            combatants,
            field: Field::new(),
            source,
            type_chart,
            engine_options,
            log: EventLog::new(),
            turn: 0,
            result: None,
        };
        battle.log.push(battle_logs::start());
        for side in Side::BOTH {
            let event = battle_logs::combatant(battle.combatant(side));
            battle.log.push(event);
        }
        Ok(battle)
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Mutable access to a combatant, for setting up specific scenarios.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// The number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// All logs since the battle started.
    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// Logs since the last time this method was called.
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    pub fn random_source_mut(&mut self) -> &mut dyn RandomSource {
        self.source.as_mut()
    }

    /// Plays a single turn, with each side using the move in the given slot.
    pub fn play_turn(&mut self, a: usize, b: usize) -> Result<TurnOutcome> {
        if self.is_over() {
            return Err(BattleEndedError.into());
        }
        for (side, slot) in [(Side::A, a), (Side::B, b)] {
            if self.combatant(side).move_slot(slot).is_none() {
                return Err(InvalidChoiceError {
                    combatant: self.combatant(side).ident(),
                    slot,
                }
                .into());
            }
        }

        self.turn += 1;
        log::debug!("playing turn {}", self.turn);
        let mut events = vec![battle_logs::turn(self.turn)];
        let resolver = TurnResolver::new(
            &mut self.combatants,
            &mut self.field,
            self.source.as_mut(),
            &self.type_chart,
            &self.engine_options,
        );
        events.extend(resolver.resolve([a, b])?);

        self.result = self.check_result();
        if let Some(result) = self.result {
            let winner = match result.outcome {
                BattleOutcome::Win(side) => Some(self.combatant(side)),
                _ => None,
            };
            events.push(battle_logs::outcome(result.outcome, winner));
            log::debug!("battle ended after {} turns: {:?}", result.turns, result.outcome);
        }

        let outcome = TurnOutcome {
            turn: self.turn,
            events: events.iter().map(Event::to_string).collect(),
            combatants: [
                self.combatant(Side::A).snapshot(),
                self.combatant(Side::B).snapshot(),
            ],
            result: self.result,
        };
        self.log.push_extend(events);
        Ok(outcome)
    }

    /// Plays turns until the battle ends, asking each chooser for a move every turn.
    pub fn run(
        &mut self,
        a: &mut dyn MoveChooser,
        b: &mut dyn MoveChooser,
    ) -> Result<BattleResult> {
        while !self.is_over() {
            let [first, second] = &self.combatants;
            let slot_a = a.choose_move(first, second, self.source.as_mut())?;
            let slot_b = b.choose_move(second, first, self.source.as_mut())?;
            self.play_turn(slot_a, slot_b)?;
        }
        self.result.wrap_expectation("battle ended without a result")
    }

    fn check_result(&self) -> Option<BattleResult> {
        let fainted = Side::BOTH.map(|side| self.combatant(side).is_fainted());
        let outcome = match fainted {
            [true, true] => BattleOutcome::Tie,
            [true, false] => BattleOutcome::Win(Side::B),
            [false, true] => BattleOutcome::Win(Side::A),
            [false, false] if self.turn >= self.engine_options.turn_limit => BattleOutcome::Draw,
            [false, false] => return None,
        };
        Some(BattleResult {
            outcome,
            turns: self.turn,
        })
    }
}
