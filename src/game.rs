//! Match state machine: alternating turns, repeat moves and victory.

use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::combatant::{Combatant, HumanCombatant, ResolvedShot, ScriptedCombatant, TargetInput};
use crate::common::{BoardError, TurnError};
use crate::fleet::FleetPlacer;

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    InProgress,
    /// The side whose fleet survived.
    Finished(Side),
}

/// What happened during one call to [`MatchController::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    /// `None` when the side found nothing to fire at and forfeited the move.
    pub shot: Option<ResolvedShot>,
    pub state: MatchState,
}

/// Final tally of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    /// Shots resolved by both sides.
    pub moves: usize,
    /// Value of the turn counter when the match ended.
    pub turns: usize,
    pub first_destroyed: usize,
    pub second_destroyed: usize,
}

/// Drives a match between two combatants.
pub struct MatchController {
    first: Box<dyn Combatant>,
    second: Box<dyn Combatant>,
    turn: usize,
    moves: usize,
    /// Consecutive moves forfeited by stalling, across both sides.
    forfeits: usize,
    state: MatchState,
}

impl MatchController {
    pub fn new(first: Box<dyn Combatant>, second: Box<dyn Combatant>) -> Self {
        Self {
            first,
            second,
            turn: 0,
            moves: 0,
            forfeits: 0,
            state: MatchState::InProgress,
        }
    }

    /// Human against the scripted opponent, both fleets placed at random.
    pub fn standard<I: TargetInput + 'static>(
        placer: &FleetPlacer,
        rng: &mut SmallRng,
        input: I,
        scripted_rng: SmallRng,
        scripted_span: usize,
    ) -> Result<Self, BoardError> {
        let human_board = placer.random_board(rng)?;
        let scripted_board = placer.random_board(rng)?;
        let human = HumanCombatant::new(human_board, input);
        let scripted = ScriptedCombatant::with_span(scripted_board, scripted_rng, scripted_span);
        Ok(Self::new(Box::new(human), Box::new(scripted)))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Side whose move is next.
    pub fn active(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn combatant(&self, side: Side) -> &dyn Combatant {
        match side {
            Side::First => &*self.first,
            Side::Second => &*self.second,
        }
    }

    /// Let the active side make one move.
    ///
    /// The turn passes to the opponent unless the shot hit or sank a ship.
    /// A side that stalls forfeits the move and the turn passes. Once the
    /// match is finished no further moves are made and `None` is returned.
    ///
    /// `TurnError::Stalled` is only returned when both sides stall back to
    /// back, since such a match can never finish.
    pub fn step(&mut self) -> Result<Option<Turn>, TurnError> {
        if let MatchState::Finished(_) = self.state {
            return Ok(None);
        }
        let side = self.active();
        let result = match side {
            Side::First => self.first.make_move(self.second.board_mut()),
            Side::Second => self.second.make_move(self.first.board_mut()),
        };
        let shot = match result {
            Ok(shot) => shot,
            Err(TurnError::Stalled { attempts }) => {
                self.forfeits += 1;
                if self.forfeits >= 2 {
                    return Err(TurnError::Stalled { attempts });
                }
                log::warn!(
                    "{} found no target after {} attempts and forfeits the move",
                    self.combatant(side).name(),
                    attempts
                );
                self.turn += 1;
                return Ok(Some(Turn {
                    side,
                    shot: None,
                    state: self.state,
                }));
            }
            Err(e) => return Err(e),
        };
        self.forfeits = 0;
        self.moves += 1;

        self.state = self.check_victory();
        if let MatchState::Finished(winner) = self.state {
            log::info!("{} wins after {} moves", self.combatant(winner).name(), self.moves);
        } else if !shot.repeat() {
            self.turn += 1;
        }
        Ok(Some(Turn {
            side,
            shot: Some(shot),
            state: self.state,
        }))
    }

    /// Run the match to the end.
    pub fn play(&mut self) -> Result<MatchSummary, TurnError> {
        loop {
            if let MatchState::Finished(winner) = self.state {
                return Ok(self.summary(winner));
            }
            self.step()?;
        }
    }

    fn check_victory(&self) -> MatchState {
        if self.second.board().all_destroyed() {
            MatchState::Finished(Side::First)
        } else if self.first.board().all_destroyed() {
            MatchState::Finished(Side::Second)
        } else {
            MatchState::InProgress
        }
    }

    fn summary(&self, winner: Side) -> MatchSummary {
        MatchSummary {
            winner,
            moves: self.moves,
            turns: self.turn,
            first_destroyed: self.first.board().destroyed(),
            second_destroyed: self.second.board().destroyed(),
        }
    }
}
