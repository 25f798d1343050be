use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::{RuleParseError, RuleSet, MOORE};
use crate::cells::CellState;
use crate::vec2::IVec2;

lazy_static! {
    static ref RULE_STRING_REGEX: Regex = Regex::new(r"^[Bb](\d*)/?[Ss](\d*)$").unwrap();
}

/// A 2-state totalistic 2D range-1 Moore-neighborhood rule, such as Conway's
/// Game of Life.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Totalistic {
    birth: [bool; 9],
    survival: [bool; 9],
}
impl Default for Totalistic {
    fn default() -> Self {
        LIFE
    }
}

impl FromStr for Totalistic {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, RuleParseError> {
        let invalid = || RuleParseError::InvalidRule(s.to_owned());
        let captures = RULE_STRING_REGEX.captures(s).ok_or_else(invalid)?;
        let mut conditions = [[false; 9]; 2];
        for (i, condition) in conditions.iter_mut().enumerate() {
            for ch in captures[i + 1].chars() {
                let count = ch.to_digit(10).ok_or_else(invalid)? as usize;
                *condition.get_mut(count).ok_or_else(invalid)? = true;
            }
        }
        Ok(Self {
            birth: conditions[0],
            survival: conditions[1],
        })
    }
}
impl fmt::Display for Totalistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for i in 0..=8 {
            if self.birth[i] {
                write!(f, "{}", i)?;
            }
        }
        write!(f, "/S")?;
        for i in 0..=8 {
            if self.survival[i] {
                write!(f, "{}", i)?;
            }
        }
        Ok(())
    }
}

impl RuleSet for Totalistic {
    fn num_states(&self) -> usize {
        2
    }
    fn neighborhood(&self) -> &[IVec2] {
        &MOORE
    }
    fn next_state(&self, values: &[CellState]) -> CellState {
        // Count live neighbors, excluding the center cell.
        let live_neighbors = values[1..].iter().filter(|&&state| state != 0).count();
        let table = if values[0] != 0 {
            &self.survival
        } else {
            &self.birth
        };
        table[live_neighbors] as CellState
    }
}

/// Conway's Game of Life.
pub const LIFE: Totalistic = Totalistic {
    birth: [false, false, false, true, false, false, false, false, false],
    survival: [false, false, true, true, false, false, false, false, false],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totalistic_parse() {
        assert_eq!(LIFE, "B3/S23".parse().unwrap());
        assert_eq!(LIFE, "b3s32".parse().unwrap());
        assert_eq!("B36/S23", "B63/S23".parse::<Totalistic>().unwrap().to_string());
        assert_eq!("B/S", "B/S".parse::<Totalistic>().unwrap().to_string());
        assert!("B3/S2x".parse::<Totalistic>().is_err());
        assert!("B39/S23".parse::<Totalistic>().is_err());
        assert!("S23/B3".parse::<Totalistic>().is_err());
    }

    #[test]
    fn test_life_transitions() {
        // Birth with exactly three neighbors.
        assert_eq!(1, LIFE.next_state(&[0, 1, 1, 1, 0, 0, 0, 0, 0]));
        assert_eq!(0, LIFE.next_state(&[0, 1, 1, 0, 0, 0, 0, 0, 0]));
        // Survival with two or three.
        assert_eq!(1, LIFE.next_state(&[1, 0, 1, 0, 0, 0, 1, 0, 0]));
        assert_eq!(1, LIFE.next_state(&[1, 1, 1, 1, 0, 0, 0, 0, 0]));
        // Death by loneliness or overcrowding.
        assert_eq!(0, LIFE.next_state(&[1, 1, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(0, LIFE.next_state(&[1, 1, 1, 1, 1, 0, 0, 0, 0]));
    }
}
