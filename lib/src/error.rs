//! All kinds of errors in this crate.

use crate::cells::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Cell at {0:?} is out of bounds.
    OutOfBoundsError(Coord),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Rules with `B0` are not supported.
    B0Error,
    /// Width / height should be positive.
    NonPositiveError,
    /// Saturation should be in the range [0, 1], not {0}.
    SaturationError(f64),
    /// Tick interval should be positive.
    ZeroIntervalError,
    /// Live cell index {0} is outside the board.
    InvalidIndexError(usize),
}
