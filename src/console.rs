#![cfg(feature = "std")]

//! Line-oriented console input: target coordinates and manual ship placement.
//!
//! Coordinates are typed one-based as `row column`. Parsing only checks the
//! shape of the line; whether the cell is on the board is up to the board.

use std::fmt;
use std::num::IntErrorKind;
use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::board::Board;
use crate::combatant::{ResolvedShot, TargetInput};
use crate::common::{BoardError, ShotOutcome, TurnError};
use crate::config::FLEET;
use crate::coordinate::Coordinate;
use crate::fleet::FleetPlacer;
use crate::ship::{Orientation, Ship};

/// Why a typed line could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of whitespace-separated tokens.
    TokenCount { expected: usize, found: usize },
    /// A token that should be a number was not.
    NotNumeric(String),
    /// A number too large to name any cell.
    OutOfRange(String),
    /// Orientation token other than `h` or `v`.
    BadOrientation(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::TokenCount { expected, found } => {
                write!(f, "Expected {} values, got {}", expected, found)
            }
            InputError::NotNumeric(tok) => write!(f, "'{}' is not a number", tok),
            InputError::OutOfRange(tok) => write!(f, "'{}' is too large for a board index", tok),
            InputError::BadOrientation(tok) => {
                write!(f, "'{}' is not an orientation, use h or v", tok)
            }
        }
    }
}

impl std::error::Error for InputError {}

fn parse_index(token: &str) -> Result<i32, InputError> {
    token
        .parse::<u16>()
        .map(|v| i32::from(v) - 1)
        .map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => InputError::OutOfRange(token.to_string()),
            _ => InputError::NotNumeric(token.to_string()),
        })
}

/// Parse `row column`, one-based, into a zero-based coordinate.
///
/// `0` is accepted and becomes `-1`, which the board rejects as off-grid.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::TokenCount {
            expected: 2,
            found: tokens.len(),
        });
    }
    Ok(Coordinate::new(parse_index(tokens[0])?, parse_index(tokens[1])?))
}

/// Parse `row column h|v` into a ship nose and orientation.
pub fn parse_placement(line: &str) -> Result<(Coordinate, Orientation), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(InputError::TokenCount {
            expected: 3,
            found: tokens.len(),
        });
    }
    let nose = Coordinate::new(parse_index(tokens[0])?, parse_index(tokens[1])?);
    let orientation = match tokens[2].to_ascii_lowercase().as_str() {
        "h" => Orientation::Horizontal,
        "v" => Orientation::Vertical,
        other => return Err(InputError::BadOrientation(other.to_string())),
    };
    Ok((nose, orientation))
}

/// Print the title and input format.
pub fn greet<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Sea Battle")?;
    writeln!(out, "Input: row column")?;
    writeln!(out, "row - line number, column - column number")
}

/// Reads player input from `R` and prompts on `W`.
pub struct ConsoleInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        // Prompts are best effort; a closed stdout must not end the game.
        let _ = self.out.write_fmt(args);
        let _ = self.out.flush();
    }

    /// Next line with the trailing newline removed; EOF ends input.
    fn read_line(&mut self, prompt: &str) -> Result<String, TurnError> {
        self.say(format_args!("{}", prompt));
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(TurnError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => {
                log::error!("failed to read input: {}", e);
                Err(TurnError::InputClosed)
            }
        }
    }

    /// Let the player place the fleet ship by ship onto a copy of `empty`.
    ///
    /// A blank line places the current ship at random and `auto` places all
    /// remaining ships at random. If random placement runs out of room the
    /// board is cleared and placement starts over.
    pub fn place_fleet<G: Rng + ?Sized>(
        &mut self,
        empty: &Board,
        placer: &FleetPlacer,
        rng: &mut G,
    ) -> Result<Board, TurnError> {
        'restart: loop {
            let mut board = empty.clone();
            let mut auto = false;
            for (i, &length) in FLEET.iter().enumerate() {
                loop {
                    let line = if auto {
                        String::new()
                    } else {
                        self.say(format_args!("\n{}\n", board));
                        self.read_line(&format!(
                            "Ship {}/{} (length {}): row column h|v, blank = random, auto = rest random: ",
                            i + 1,
                            FLEET.len(),
                            length
                        ))?
                    };
                    if line.eq_ignore_ascii_case("auto") {
                        auto = true;
                        continue;
                    }
                    if line.is_empty() {
                        let mut attempts = 0;
                        match placer.place_one(rng, &mut board, length, &mut attempts) {
                            Ok(()) => break,
                            Err(BoardError::PlacementExhausted { .. }) => {
                                self.say(format_args!("! No room left for this ship, starting over !\n"));
                                continue 'restart;
                            }
                            Err(e) => {
                                self.say(format_args!("! {} !\n", e));
                                continue 'restart;
                            }
                        }
                    }
                    match parse_placement(&line) {
                        Ok((nose, orientation)) => {
                            match board.add_ship(Ship::new(nose, length, orientation)) {
                                Ok(()) => break,
                                Err(e) => self.say(format_args!("! {} !\n", e)),
                            }
                        }
                        Err(e) => self.say(format_args!("! {} !\n", e)),
                    }
                }
            }
            board.reset_busy();
            return Ok(board);
        }
    }
}

impl<R: BufRead, W: Write> TargetInput for ConsoleInput<R, W> {
    fn next_target(&mut self) -> Result<Coordinate, TurnError> {
        loop {
            let line = self.read_line("Enter coordinates: ")?;
            match parse_coordinate(&line) {
                Ok(target) => return Ok(target),
                Err(e) => self.say(format_args!("! {} !\n", e)),
            }
        }
    }

    fn rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.say(format_args!("!! {} !!\n", err));
    }

    fn outcome(&mut self, shot: ResolvedShot) {
        self.say(format_args!("{}\n", describe(shot.outcome)));
    }
}

/// Console message for a shot outcome.
pub fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "! Ship hit !",
        ShotOutcome::Miss => "! Miss !",
        ShotOutcome::Sunk => "! Ship destroyed !",
    }
}
