//! The world.

use crate::{
    cells::{Coord, State},
    config::Config,
    error::Error,
    rules::Life,
    store::Store,
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{collections::BTreeSet, mem};

/// The world.
///
/// A finite, non-wrapping board of `width * height` cells, together with
/// the rule that transitions it from one generation to the next.
///
/// The cell states live in two buffers of the storage type `S`: the
/// current generation, and a scratch buffer that [`advance`](World::advance)
/// writes the next generation into before swapping. Neighbor counts are
/// always taken against the unmodified prior generation.
///
/// Every mutating operation returns the cells whose state actually
/// changed, in ascending row-major order, so that a frontend can repaint
/// only those cells.
pub struct World<S: Store> {
    /// The configuration of the world, with the current dimensions.
    pub(crate) config: Config,

    /// The rule of the cellular automaton.
    rule: Life,

    /// The current generation of cells.
    cells: S,

    /// Scratch buffer for the next generation.
    next: S,

    /// How many times the world has been advanced.
    generation: u64,
}

impl<S: Store> World<S> {
    /// Creates a new world from the configuration.
    ///
    /// Returns an error if a dimension is not positive or the rule
    /// string is invalid.
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.width <= 0 || config.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        let rule: Life = config.rule_string.parse()?;
        // Widen before multiplying: the area of a valid board can
        // exceed `i32::MAX`.
        let area = config.width as usize * config.height as usize;
        Ok(Self {
            config: config.clone(),
            rule,
            cells: S::with_capacity(area),
            next: S::with_capacity(area),
            generation: 0,
        })
    }

    /// Width of the board.
    #[inline]
    pub fn width(&self) -> i32 {
        self.config.width
    }

    /// Height of the board.
    #[inline]
    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// How many times the world has been advanced.
    ///
    /// Reset to `0` by [`resize`](World::resize); untouched by every
    /// other mutation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The number of living cells.
    pub fn population(&self) -> usize {
        self.cells.population()
    }

    /// The number of cells on the board.
    #[inline]
    fn area(&self) -> usize {
        self.config.width as usize * self.config.height as usize
    }

    /// The linear index of a coordinate.
    ///
    /// Returns an error if the coordinate is outside the board.
    fn index(&self, coord: Coord) -> Result<usize, Error> {
        let (x, y) = coord;
        if x < 0 || x >= self.config.width || y < 0 || y >= self.config.height {
            return Err(Error::OutOfBoundsError(coord));
        }
        Ok(y as usize * self.config.width as usize + x as usize)
    }

    /// The coordinate of a linear index.
    fn coord(&self, index: usize) -> Coord {
        let width = self.config.width as usize;
        ((index % width) as i32, (index / width) as i32)
    }

    /// The state of the cell at `coord`.
    pub fn get_cell_state(&self, coord: Coord) -> Result<State, Error> {
        let index = self.index(coord)?;
        Ok(State::from(self.cells.get(index)))
    }

    /// The coordinates of the living cells, in ascending row-major order.
    pub fn live_cells(&self) -> Vec<Coord> {
        self.cells
            .live_indices()
            .into_iter()
            .map(|index| self.coord(index))
            .collect()
    }

    /// Sets every cell to dead.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.next.clear();
    }

    /// Sets every cell to dead.
    ///
    /// Returns the cells that were alive, i.e. the cells whose state
    /// changed.
    pub fn clear(&mut self) -> Vec<Coord> {
        let changed = self.live_cells();
        self.reset();
        changed
    }

    /// Flips the state of the cell at `coord` and returns the new state.
    pub fn toggle(&mut self, coord: Coord) -> Result<State, Error> {
        let index = self.index(coord)?;
        let state = !State::from(self.cells.get(index));
        self.cells.set(index, state.into());
        Ok(state)
    }

    /// Sets the state of the cell at `coord`.
    ///
    /// Idempotent; returns whether the state actually changed.
    pub fn set_cell_state(&mut self, coord: Coord, state: State) -> Result<bool, Error> {
        let index = self.index(coord)?;
        let alive = bool::from(state);
        let changed = self.cells.get(index) != alive;
        self.cells.set(index, alive);
        Ok(changed)
    }

    /// Sets the dimensions of the board and resets every cell to dead.
    ///
    /// No cell state survives a resize; the generation counter is reset
    /// to `0`. A frontend should repaint the whole surface afterwards.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::NonPositiveError);
        }
        debug!(
            "resizing the board from {}x{} to {}x{}",
            self.config.width, self.config.height, width, height
        );
        self.config.width = width;
        self.config.height = height;
        let area = self.area();
        self.cells = S::with_capacity(area);
        self.next = S::with_capacity(area);
        self.generation = 0;
        Ok(())
    }

    /// Sets each cell alive with independent probability `saturation`,
    /// drawing from the thread-local random source.
    ///
    /// Returns the cells whose state changed.
    pub fn randomize(&mut self, saturation: f64) -> Result<Vec<Coord>, Error> {
        self.randomize_with(saturation, &mut rand::thread_rng())
    }

    /// Sets each cell alive with independent probability `saturation`,
    /// drawing from a random source seeded with `seed`.
    ///
    /// The draws are made in ascending index order, so one seed yields
    /// the same pattern whatever the storage type.
    pub fn randomize_seeded(&mut self, saturation: f64, seed: u64) -> Result<Vec<Coord>, Error> {
        self.randomize_with(saturation, &mut StdRng::seed_from_u64(seed))
    }

    /// Sets each cell alive with independent probability `saturation`.
    ///
    /// Returns an error if `saturation` is outside `[0, 1]` or NaN;
    /// the board is untouched in that case.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        saturation: f64,
        rng: &mut R,
    ) -> Result<Vec<Coord>, Error> {
        if !(0.0..=1.0).contains(&saturation) {
            return Err(Error::SaturationError(saturation));
        }
        debug!("randomizing the board with saturation {}", saturation);
        let mut changed = Vec::new();
        for index in 0..self.area() {
            let alive = rng.gen_bool(saturation);
            if self.cells.get(index) != alive {
                self.cells.set(index, alive);
                changed.push(self.coord(index));
            }
        }
        Ok(changed)
    }

    /// The number of living cells among the up to 8 neighbors of `coord`.
    ///
    /// The board does not wrap: a cell on the boundary has fewer than 8
    /// neighbors, never a neighbor from the opposite edge.
    fn live_neighbors(&self, (x, y): Coord) -> usize {
        let width = self.config.width as usize;
        let mut count = 0;
        for j in (y - 1).max(0)..=(y + 1).min(self.config.height - 1) {
            for i in (x - 1).max(0)..=(x + 1).min(self.config.width - 1) {
                if (i, j) != (x, y) && self.cells.get(j as usize * width + i as usize) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Writes the next state of the cell at `index` into the scratch
    /// buffer, recording the coordinate if the state changed.
    fn step_cell(&mut self, index: usize, changed: &mut Vec<Coord>) {
        let coord = self.coord(index);
        let alive = self.cells.get(index);
        let next = self
            .rule
            .next_state(State::from(alive), self.live_neighbors(coord));
        let next_alive = bool::from(next);
        self.next.set(index, next_alive);
        if next_alive != alive {
            changed.push(coord);
        }
    }

    /// Computes the next generation and swaps it in as current.
    ///
    /// Dense storage scans the whole board. Sparse storage scans only
    /// the live cells and their neighbors: a dead cell with no living
    /// neighbors can never become alive, since rules with `B0` are
    /// rejected at construction.
    ///
    /// Returns the cells whose state differs from the prior generation,
    /// in ascending row-major order.
    pub fn advance(&mut self) -> Result<Vec<Coord>, Error> {
        let area = self.area();
        let mut changed = Vec::new();
        self.next.clear();
        if S::SPARSE {
            let mut candidates = BTreeSet::new();
            for index in self.cells.live_indices() {
                if index >= area {
                    return Err(Error::InvalidIndexError(index));
                }
                let (x, y) = self.coord(index);
                for j in (y - 1).max(0)..=(y + 1).min(self.config.height - 1) {
                    for i in (x - 1).max(0)..=(x + 1).min(self.config.width - 1) {
                        candidates.insert(j as usize * self.config.width as usize + i as usize);
                    }
                }
            }
            for index in candidates {
                self.step_cell(index, &mut changed);
            }
        } else {
            for index in 0..area {
                self.step_cell(index, &mut changed);
            }
        }
        mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed, population {}",
            self.generation,
            changed.len(),
            self.cells.population()
        );
        Ok(changed)
    }
}
