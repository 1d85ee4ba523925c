//! A trait for `World`.

use crate::{
    cells::{Coord, State},
    config::Config,
    error::Error,
    store::Store,
    world::World,
};
use std::fmt::Write;

/// A trait for [`World`].
///
/// So that we can switch between different storage types using trait
/// objects. The query and command methods mirror the inherent methods of
/// [`World`]; every command returns the cells whose state actually
/// changed, for incremental repaint.
pub trait Engine {
    /// Width of the board.
    fn width(&self) -> i32;

    /// Height of the board.
    fn height(&self) -> i32;

    /// How many times the world has been advanced.
    fn generation(&self) -> u64;

    /// The number of living cells.
    fn population(&self) -> usize;

    /// World configuration, with the current dimensions.
    fn config(&self) -> &Config;

    /// Gets the state of a cell.
    fn get_cell_state(&self, coord: Coord) -> Result<State, Error>;

    /// The coordinates of the living cells, in ascending row-major order.
    fn live_cells(&self) -> Vec<Coord>;

    /// Flips the state of a cell and returns the new state.
    fn toggle(&mut self, coord: Coord) -> Result<State, Error>;

    /// Sets the state of a cell; returns whether the state changed.
    fn set_cell_state(&mut self, coord: Coord, state: State) -> Result<bool, Error>;

    /// Sets every cell to dead.
    fn reset(&mut self);

    /// Sets every cell to dead; returns the cells that were alive.
    fn clear(&mut self) -> Vec<Coord>;

    /// Sets the dimensions of the board, discarding all cell state.
    fn resize(&mut self, width: i32, height: i32) -> Result<(), Error>;

    /// Sets each cell alive with independent probability `saturation`.
    fn randomize(&mut self, saturation: f64) -> Result<Vec<Coord>, Error>;

    /// Like [`randomize`](Engine::randomize), with a seeded random
    /// source for reproducibility.
    fn randomize_seeded(&mut self, saturation: f64, seed: u64) -> Result<Vec<Coord>, Error>;

    /// Computes the next generation; returns the cells that changed.
    fn advance(&mut self) -> Result<Vec<Coord>, Error>;

    /// Whether the cell at `coord` is alive.
    fn is_alive(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get_cell_state(coord)? == State::Alive)
    }

    /// Displays the whole board in a mix of
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
    /// [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each line is ended with `$`;
    /// * The whole pattern is ended with `!`.
    fn rle(&self) -> String {
        let mut str = String::new();
        writeln!(
            str,
            "x = {}, y = {}, rule = {}",
            self.config().width,
            self.config().height,
            self.config().rule_string
        )
        .unwrap();
        for y in 0..self.config().height {
            for x in 0..self.config().width {
                match self.get_cell_state((x, y)).unwrap() {
                    State::Dead => str.push('.'),
                    State::Alive => str.push('o'),
                };
            }
            if y == self.config().height - 1 {
                str.push('!')
            } else {
                str.push('$')
            };
            str.push('\n');
        }
        str
    }

    /// Displays the whole board in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    fn plaintext(&self) -> String {
        let mut str = String::new();
        for y in 0..self.config().height {
            for x in 0..self.config().width {
                match self.get_cell_state((x, y)).unwrap() {
                    State::Dead => str.push('.'),
                    State::Alive => str.push('o'),
                };
            }
            str.push('\n');
        }
        str
    }
}

/// The [`Engine`] trait is implemented for every [`World`].
impl<S: Store> Engine for World<S> {
    fn width(&self) -> i32 {
        self.width()
    }

    fn height(&self) -> i32 {
        self.height()
    }

    fn generation(&self) -> u64 {
        self.generation()
    }

    fn population(&self) -> usize {
        self.population()
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn get_cell_state(&self, coord: Coord) -> Result<State, Error> {
        self.get_cell_state(coord)
    }

    fn live_cells(&self) -> Vec<Coord> {
        self.live_cells()
    }

    fn toggle(&mut self, coord: Coord) -> Result<State, Error> {
        self.toggle(coord)
    }

    fn set_cell_state(&mut self, coord: Coord, state: State) -> Result<bool, Error> {
        self.set_cell_state(coord, state)
    }

    fn reset(&mut self) {
        self.reset()
    }

    fn clear(&mut self) -> Vec<Coord> {
        self.clear()
    }

    fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        self.resize(width, height)
    }

    fn randomize(&mut self, saturation: f64) -> Result<Vec<Coord>, Error> {
        self.randomize(saturation)
    }

    fn randomize_seeded(&mut self, saturation: f64, seed: u64) -> Result<Vec<Coord>, Error> {
        self.randomize_seeded(saturation, seed)
    }

    fn advance(&mut self) -> Result<Vec<Coord>, Error> {
        self.advance()
    }
}
