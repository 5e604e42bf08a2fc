//! Board dimensions, the standard fleet and per-match settings.

use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 9;
/// Smallest board on which the standard fleet reliably fits.
pub const MIN_BOARD_SIZE: usize = 9;
/// Largest board whose cells fit in the 128-bit busy set.
pub const MAX_BOARD_SIZE: usize = 11;

pub const NUM_SHIPS: usize = 11;
/// Ship lengths of the standard fleet, longest first.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total placement attempts allowed for one fleet before the board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Rows and columns the scripted opponent draws its targets from (`0..span`).
pub const SCRIPTED_TARGET_SPAN: usize = 6;

/// Consecutive rejected targets tolerated within a single move.
pub const MAX_REJECTED_TARGETS: usize = 10_000;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 3 + 2 * 3 + 4;

/// Settings for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: usize,
    pub seed: Option<u64>,
    pub scripted_span: usize,
    pub manual_placement: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            scripted_span: SCRIPTED_TARGET_SPAN,
            manual_placement: false,
        }
    }
}

impl MatchConfig {
    /// Check the settings before any board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.scripted_span == 0 || self.scripted_span > self.board_size {
            return Err(ConfigError::ScriptedSpan {
                span: self.scripted_span,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_matches_cell_total() {
        assert_eq!(FLEET.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
        assert!(FLEET.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_sizes_and_spans() {
        let small = MatchConfig { board_size: 5, ..MatchConfig::default() };
        assert!(matches!(small.validate(), Err(ConfigError::BoardSize { size: 5, .. })));

        let wide = MatchConfig { scripted_span: 10, ..MatchConfig::default() };
        assert!(matches!(wide.validate(), Err(ConfigError::ScriptedSpan { span: 10, .. })));
    }
}
