//! World configuration.

use crate::{
    error::Error,
    store::{Grid, LiveSet},
    traits::Engine,
    world::World,
};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the cell states are stored.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Storage {
    /// One `bool` per cell: O(1) access, memory proportional to the
    /// board area.
    #[educe(Default)]
    Dense,

    /// An ordered set of the live cell indices: O(log n) access, memory
    /// proportional to the population.
    Sparse,
}

impl FromStr for Storage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" | "Dense" => Ok(Storage::Dense),
            "sparse" | "Sparse" => Ok(Storage::Sparse),
            _ => Err(String::from("invalid storage")),
        }
    }
}

impl Display for Storage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Storage::Dense => write!(f, "dense"),
            Storage::Sparse => write!(f, "sparse"),
        }
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width.
    #[educe(Default = 32)]
    pub width: i32,

    /// Height.
    #[educe(Default = 32)]
    pub height: i32,

    /// How the cell states are stored.
    pub storage: Storage,

    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the storage type.
    pub fn set_storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if a dimension is not positive or the rule
    /// string is invalid.
    pub fn world(&self) -> Result<Box<dyn Engine>, Error> {
        match self.storage {
            Storage::Dense => Ok(Box::new(World::<Grid>::new(self)?)),
            Storage::Sparse => Ok(Box::new(World::<LiveSet>::new(self)?)),
        }
    }
}
