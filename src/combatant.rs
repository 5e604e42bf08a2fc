//! Combatant trait and the human and scripted implementations.
//!
//! A combatant owns the board holding its own fleet and fires at the
//! opponent's board, which is lent to it for the length of one move.

use alloc::collections::VecDeque;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome, TurnError};
use crate::config::{MAX_REJECTED_TARGETS, SCRIPTED_TARGET_SPAN};
use crate::coordinate::Coordinate;

/// A shot the enemy board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedShot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

impl ResolvedShot {
    /// Whether the shooter moves again.
    pub fn repeat(&self) -> bool {
        self.outcome.grants_repeat()
    }
}

/// Interface implemented by both sides of a match.
pub trait Combatant {
    /// Label used in logs and on the console.
    fn name(&self) -> &str;

    /// Board holding this combatant's fleet.
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    /// Choose the next cell to fire at.
    fn select_target(&mut self) -> Result<Coordinate, TurnError>;

    /// Told when the enemy board refused `target`.
    fn report_rejected(&mut self, target: Coordinate, err: &BoardError) {
        log::warn!("{}: target {} rejected: {}", self.name(), target, err);
    }

    /// Told when a shot was resolved.
    fn report_outcome(&mut self, shot: ResolvedShot) {
        log::info!("{}: shot at {} -> {:?}", self.name(), shot.target, shot.outcome);
    }

    /// Fire at `enemy` until one shot is accepted.
    ///
    /// Rejected targets do not use up the move; another target is selected.
    /// Gives up with `TurnError::Stalled` after `MAX_REJECTED_TARGETS`
    /// rejections in a row.
    fn make_move(&mut self, enemy: &mut Board) -> Result<ResolvedShot, TurnError> {
        let mut rejected = 0usize;
        loop {
            let target = self.select_target()?;
            match enemy.shot(target) {
                Ok(outcome) => {
                    let shot = ResolvedShot { target, outcome };
                    self.report_outcome(shot);
                    return Ok(shot);
                }
                Err(err) => {
                    self.report_rejected(target, &err);
                    rejected += 1;
                    if rejected >= MAX_REJECTED_TARGETS {
                        return Err(TurnError::Stalled { attempts: rejected });
                    }
                }
            }
        }
    }
}

/// Source of targets for a human combatant.
///
/// Implementations parse and range-check nothing beyond producing a
/// zero-based coordinate; the board decides whether it is a legal shot.
pub trait TargetInput {
    fn next_target(&mut self) -> Result<Coordinate, TurnError>;

    /// Show the player why a target was refused.
    fn rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Show the player what a shot struck.
    fn outcome(&mut self, _shot: ResolvedShot) {}
}

/// Queued targets, used for replays and tests. Runs dry with `InputClosed`.
impl TargetInput for VecDeque<Coordinate> {
    fn next_target(&mut self) -> Result<Coordinate, TurnError> {
        self.pop_front().ok_or(TurnError::InputClosed)
    }
}

/// Combatant whose targets come from a person.
pub struct HumanCombatant<I: TargetInput> {
    board: Board,
    input: I,
}

impl<I: TargetInput> HumanCombatant<I> {
    pub fn new(board: Board, input: I) -> Self {
        Self { board, input }
    }
}

impl<I: TargetInput> Combatant for HumanCombatant<I> {
    fn name(&self) -> &str {
        "Player"
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self) -> Result<Coordinate, TurnError> {
        self.input.next_target()
    }

    fn report_rejected(&mut self, target: Coordinate, err: &BoardError) {
        log::debug!("player target {} rejected: {}", target, err);
        self.input.rejected(target, err);
    }

    fn report_outcome(&mut self, shot: ResolvedShot) {
        log::debug!("player shot at {} -> {:?}", shot.target, shot.outcome);
        self.input.outcome(shot);
    }
}

/// Combatant firing uniformly at random.
///
/// Rows and columns are drawn from `0..span` only, so with the default span
/// of 6 on a 9×9 board the upper-left corner is all it ever fires at.
pub struct ScriptedCombatant {
    board: Board,
    rng: SmallRng,
    span: usize,
}

impl ScriptedCombatant {
    pub fn new(board: Board, rng: SmallRng) -> Self {
        Self::with_span(board, rng, SCRIPTED_TARGET_SPAN)
    }

    /// Draw targets from `0..span` on both axes.
    pub fn with_span(board: Board, rng: SmallRng, span: usize) -> Self {
        Self {
            board,
            rng,
            span: span.max(1),
        }
    }
}

impl Combatant for ScriptedCombatant {
    fn name(&self) -> &str {
        "AI"
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self) -> Result<Coordinate, TurnError> {
        let span = self.span as i32;
        let target = Coordinate::new(
            self.rng.random_range(0..span),
            self.rng.random_range(0..span),
        );
        log::trace!("AI selects {}", target);
        Ok(target)
    }

    fn report_rejected(&mut self, target: Coordinate, err: &BoardError) {
        log::trace!("AI target {} rejected: {}", target, err);
    }
}
