//! Totalistic Life-like rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{cells::State, error::Error};
use ca_rules::ParseLife;
use std::str::FromStr;

/// A totalistic Life-like rule.
///
/// The transition of a cell depends only on its own state and the number
/// of living cells among its up to 8 neighbors. The conventional notation
/// is `B{birth counts}/S{survival counts}`; Conway's Game of Life is
/// `B3/S23`.
///
/// Rules with `B0` are rejected when parsing: under `B0` a dead cell with
/// no living neighbors ignites, so an empty board does not stay empty and
/// the sparse scan over live cells and their neighbors would be unsound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Life {
    /// `birth[n]`: whether a dead cell with `n` living neighbors
    /// becomes alive.
    birth: [bool; 9],
    /// `survival[n]`: whether a living cell with `n` living neighbors
    /// stays alive.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for n in b {
            birth[n as usize] = true;
        }
        for n in s {
            survival[n as usize] = true;
        }
        Self { birth, survival }
    }

    /// Whether the rule contains `B0`.
    #[inline]
    pub fn has_b0(&self) -> bool {
        self.birth[0]
    }

    /// The state of a cell in the next generation, given its current
    /// state and the number of living cells among its neighbors.
    #[inline]
    pub fn next_state(&self, state: State, live_neighbors: usize) -> State {
        let table = match state {
            State::Dead => &self.birth,
            State::Alive => &self.survival,
        };
        State::from(table[live_neighbors])
    }
}

/// The Game of Life rule, `B3/S23`.
impl Default for Life {
    fn default() -> Self {
        Self::new(vec![3], vec![2, 3])
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}
