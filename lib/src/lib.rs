//! __rlifesim-lib__ simulates [Conway's Game of
//! Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a finite, non-wrapping rectangular board.
//!
//! The library owns the board state and the generation-transition
//! algorithm; it does no drawing of its own. A frontend issues commands
//! (toggle, randomize, clear, resize, advance) and receives back the set
//! of cells whose state changed, so that it can repaint only those cells.
//!
//! Two storage strategies are provided behind one interface:
//! a dense boolean grid, and an ordered set of live cell indices.
//! They are interchangeable through the [`Engine`] trait;
//! [`Config::world`] picks the concrete type.
//!
//! # Example
//!
//! ```
//! use rlifesim_lib::Config;
//!
//! let mut world = Config::new(16, 16).world().unwrap();
//! world.toggle((7, 7)).unwrap();
//! world.toggle((8, 7)).unwrap();
//! world.toggle((9, 7)).unwrap();
//! let changed = world.advance().unwrap();
//! assert!(!changed.is_empty());
//! ```

mod cells;
mod config;
mod error;
mod rules;
mod scheduler;
mod store;
mod traits;
mod world;

pub use cells::{Coord, State};
pub use config::{Config, Storage};
pub use error::Error;
pub use rules::Life;
pub use scheduler::Scheduler;
pub use store::{Grid, Iter, LiveSet, Store};
pub use traits::Engine;
pub use world::World;
