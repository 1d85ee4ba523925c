use rlifesim_lib::{Config, Coord, Engine, Error as SimError, LiveSet, Scheduler, State, Storage};
use std::error::Error;
use std::time::{Duration, Instant};

const MILLIS_100: Duration = Duration::from_millis(100);

#[test]
fn block_is_still_life() -> Result<(), Box<dyn Error>> {
    for storage in [Storage::Dense, Storage::Sparse] {
        let mut world = Config::new(8, 8).set_storage(storage).world()?;
        for coord in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            world.set_cell_state(coord, State::Alive)?;
        }
        let changed = world.advance()?;
        assert!(changed.is_empty());
        assert_eq!(world.live_cells(), vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn Error>> {
    for storage in [Storage::Dense, Storage::Sparse] {
        let mut world = Config::new(5, 5).set_storage(storage).world()?;
        for coord in [(2, 1), (2, 2), (2, 3)] {
            world.set_cell_state(coord, State::Alive)?;
        }

        let changed = world.advance()?;
        assert_eq!(changed, vec![(2, 1), (1, 2), (3, 2), (2, 3)]);
        assert_eq!(world.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        let changed = world.advance()?;
        assert_eq!(changed, vec![(2, 1), (1, 2), (3, 2), (2, 3)]);
        assert_eq!(world.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }
    Ok(())
}

#[test]
fn lonely_cell_dies() -> Result<(), Box<dyn Error>> {
    for storage in [Storage::Dense, Storage::Sparse] {
        for coord in [(0, 0), (3, 0), (0, 3), (3, 3), (1, 2)] {
            let mut world = Config::new(4, 4).set_storage(storage).world()?;
            world.set_cell_state(coord, State::Alive)?;
            let changed = world.advance()?;
            assert_eq!(changed, vec![coord]);
            assert!(world.live_cells().is_empty());
        }
    }
    Ok(())
}

#[test]
fn edges_do_not_wrap() -> Result<(), Box<dyn Error>> {
    // On a torus every corner of a 5x5 board would be a neighbor of the
    // other three and the four cells would form a still life. On a plain
    // board they have no neighbors at all.
    for storage in [Storage::Dense, Storage::Sparse] {
        let mut world = Config::new(5, 5).set_storage(storage).world()?;
        for coord in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            world.set_cell_state(coord, State::Alive)?;
        }
        world.advance()?;
        assert!(world.live_cells().is_empty());
    }
    Ok(())
}

#[test]
fn highlife_birth_on_six() -> Result<(), Box<dyn Error>> {
    // Six live neighbors around a dead center: a birth in B36/S23,
    // not in B3/S23.
    let ring = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3)];

    let mut conway = Config::new(5, 5).world()?;
    let mut highlife = Config::new(5, 5).set_rule_string("B36/S23").world()?;
    for coord in ring {
        conway.set_cell_state(coord, State::Alive)?;
        highlife.set_cell_state(coord, State::Alive)?;
    }
    conway.advance()?;
    highlife.advance()?;
    assert!(!conway.is_alive((2, 2))?);
    assert!(highlife.is_alive((2, 2))?);
    Ok(())
}

#[test]
fn dense_sparse_equivalence() -> Result<(), Box<dyn Error>> {
    let mut dense = Config::new(16, 16).world()?;
    let mut sparse = Config::new(16, 16).set_storage(Storage::Sparse).world()?;

    let seeded = dense.randomize_seeded(0.3, 2026)?;
    assert_eq!(seeded, sparse.randomize_seeded(0.3, 2026)?);
    assert_eq!(dense.live_cells(), sparse.live_cells());

    for _ in 0..16 {
        assert_eq!(dense.advance()?, sparse.advance()?);
        assert_eq!(dense.live_cells(), sparse.live_cells());
        assert_eq!(dense.population(), sparse.population());
    }
    Ok(())
}

#[test]
fn randomize_is_seeded() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(16, 16).world()?;
    let mut other = Config::new(16, 16).world()?;

    // Starting from an empty board, the change set is the live set.
    let changed = world.randomize_seeded(0.5, 42)?;
    assert_eq!(changed, world.live_cells());
    assert_eq!(other.randomize_seeded(0.5, 42)?, changed);

    // Re-randomizing with the same seed changes nothing.
    assert!(world.randomize_seeded(0.5, 42)?.is_empty());
    Ok(())
}

#[test]
fn clear_reports_only_live_cells() -> Result<(), Box<dyn Error>> {
    for storage in [Storage::Dense, Storage::Sparse] {
        let mut world = Config::new(8, 8).set_storage(storage).world()?;
        world.randomize_seeded(0.4, 7)?;
        let live = world.live_cells();
        assert!(!live.is_empty());
        assert_eq!(world.clear(), live);
        assert_eq!(world.population(), 0);
        assert!(world.clear().is_empty());
    }
    Ok(())
}

#[test]
fn resize_clears_the_board() -> Result<(), Box<dyn Error>> {
    for storage in [Storage::Dense, Storage::Sparse] {
        let mut world = Config::new(16, 16).set_storage(storage).world()?;
        world.randomize_seeded(0.3, 1)?;
        world.advance()?;
        assert_eq!(world.generation(), 1);

        world.resize(10, 7)?;
        assert_eq!(world.width(), 10);
        assert_eq!(world.height(), 7);
        assert!(world.live_cells().is_empty());
        assert_eq!(world.generation(), 0);

        // The new dimensions are in effect.
        assert_eq!(
            world.toggle((10, 0)),
            Err(SimError::OutOfBoundsError((10, 0)))
        );
        assert_eq!(world.toggle((9, 6))?, State::Alive);
    }
    Ok(())
}

#[test]
fn toggle_and_set_cell_state() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(8, 8).world()?;

    assert_eq!(world.toggle((3, 3))?, State::Alive);
    assert_eq!(world.toggle((3, 3))?, State::Dead);

    assert!(world.set_cell_state((2, 2), State::Alive)?);
    assert!(!world.set_cell_state((2, 2), State::Alive)?);
    assert!(world.set_cell_state((2, 2), State::Dead)?);
    assert!(!world.set_cell_state((2, 2), State::Dead)?);
    Ok(())
}

#[test]
fn generation_counter() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(8, 8).world()?;
    assert_eq!(world.generation(), 0);
    world.toggle((1, 1))?;
    world.randomize_seeded(0.3, 3)?;
    world.clear();
    assert_eq!(world.generation(), 0);
    for _ in 0..3 {
        world.advance()?;
    }
    assert_eq!(world.generation(), 3);
    Ok(())
}

#[test]
fn out_of_bounds() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(16, 16).world()?;
    for coord in [(16, 0), (0, 16), (-1, 3), (3, -1)] {
        assert_eq!(world.toggle(coord), Err(SimError::OutOfBoundsError(coord)));
        assert_eq!(
            world.set_cell_state(coord, State::Alive),
            Err(SimError::OutOfBoundsError(coord))
        );
        assert_eq!(
            world.get_cell_state(coord),
            Err(SimError::OutOfBoundsError(coord))
        );
    }
    // A rejected command applies no mutation.
    assert!(world.live_cells().is_empty());
    Ok(())
}

#[test]
fn invalid_config() {
    assert_eq!(
        Config::new(0, 16).world().err(),
        Some(SimError::NonPositiveError)
    );
    assert_eq!(
        Config::new(16, -1).world().err(),
        Some(SimError::NonPositiveError)
    );
    assert!(matches!(
        Config::new(16, 16).set_rule_string("hello").world().err(),
        Some(SimError::ParseRuleError(_))
    ));
    assert_eq!(
        Config::new(16, 16).set_rule_string("B0/S8").world().err(),
        Some(SimError::B0Error)
    );
}

#[test]
fn invalid_saturation() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(8, 8).world()?;
    assert_eq!(
        world.randomize(1.5),
        Err(SimError::SaturationError(1.5))
    );
    assert_eq!(
        world.randomize_seeded(-0.1, 0),
        Err(SimError::SaturationError(-0.1))
    );
    assert!(matches!(
        world.randomize(f64::NAN),
        Err(SimError::SaturationError(_))
    ));
    assert!(world.live_cells().is_empty());
    Ok(())
}

#[test]
fn invalid_resize() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(8, 8).world()?;
    world.toggle((1, 1))?;
    assert_eq!(world.resize(0, 8), Err(SimError::NonPositiveError));
    // The failed resize leaves the board untouched.
    assert_eq!(world.width(), 8);
    assert_eq!(world.live_cells(), vec![(1, 1)]);
    Ok(())
}

#[test]
fn live_set_basics() {
    let mut set = LiveSet::new();
    assert!(set.is_empty());
    assert!(set.insert(5));
    assert!(set.insert(1));
    assert!(!set.insert(5));
    assert_eq!(set.len(), 2);
    assert!(set.contains(1));
    assert!(!set.contains(2));
    assert!(set.remove(1));
    assert!(!set.remove(1));
    assert!(set.insert(9));
    assert!(set.insert(7));

    // Ascending and restartable.
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![5, 7, 9]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![5, 7, 9]);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn scheduler_start_stop_idempotent() -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let mut sched = Scheduler::new(MILLIS_100)?;
    assert!(!sched.is_running());
    assert_eq!(sched.next_fire(), None);

    sched.start(t0);
    assert!(sched.is_running());
    assert_eq!(sched.next_fire(), Some(t0 + MILLIS_100));

    // Starting again while running keeps the pending deadline.
    sched.start(t0 + Duration::from_millis(50));
    assert_eq!(sched.next_fire(), Some(t0 + MILLIS_100));

    sched.stop();
    assert!(!sched.is_running());
    sched.stop();
    assert!(!sched.is_running());
    Ok(())
}

#[test]
fn scheduler_one_tick_per_interval() -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let mut sched = Scheduler::new(MILLIS_100)?;
    let mut world = Config::new(5, 5).world()?;
    for coord in [(2, 1), (2, 2), (2, 3)] {
        world.set_cell_state(coord, State::Alive)?;
    }

    sched.start(t0);
    sched.start(t0);

    // Not due yet.
    assert_eq!(sched.tick(world.as_mut(), t0 + Duration::from_millis(99))?, None);
    assert_eq!(world.generation(), 0);

    // Due: exactly one generation advances, even after the double start.
    let changed = sched.tick(world.as_mut(), t0 + MILLIS_100)?;
    assert_eq!(changed, Some(vec![(2, 1), (1, 2), (3, 2), (2, 3)]));
    assert_eq!(world.generation(), 1);
    assert_eq!(sched.next_fire(), Some(t0 + MILLIS_100 + MILLIS_100));
    assert_eq!(sched.tick(world.as_mut(), t0 + MILLIS_100)?, None);
    assert_eq!(world.generation(), 1);
    Ok(())
}

#[test]
fn scheduler_set_interval_not_retroactive() -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let mut sched = Scheduler::new(MILLIS_100)?;
    let mut world = Config::new(5, 5).world()?;

    sched.start(t0);
    sched.set_interval(Duration::from_millis(10))?;

    // The pending deadline is not rescheduled...
    assert_eq!(sched.next_fire(), Some(t0 + MILLIS_100));

    // ...but the next one uses the new pacing.
    sched.tick(world.as_mut(), t0 + MILLIS_100)?;
    assert_eq!(
        sched.next_fire(),
        Some(t0 + MILLIS_100 + Duration::from_millis(10))
    );
    Ok(())
}

#[test]
fn scheduler_stop_cancels_pending_fire() -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let mut sched = Scheduler::new(MILLIS_100)?;
    let mut world = Config::new(5, 5).world()?;
    world.toggle((2, 2))?;

    sched.start(t0);
    sched.stop();

    // The cancelled deadline has long passed, but a stopped scheduler
    // never fires.
    assert_eq!(sched.tick(world.as_mut(), t0 + Duration::from_secs(10))?, None);
    assert_eq!(world.generation(), 0);
    assert_eq!(world.live_cells(), vec![(2, 2)]);
    Ok(())
}

/// An engine whose `advance` always fails, as if an internal invariant
/// had been violated.
struct BrokenEngine(Config);

impl Engine for BrokenEngine {
    fn width(&self) -> i32 {
        self.0.width
    }

    fn height(&self) -> i32 {
        self.0.height
    }

    fn generation(&self) -> u64 {
        0
    }

    fn population(&self) -> usize {
        0
    }

    fn config(&self) -> &Config {
        &self.0
    }

    fn get_cell_state(&self, coord: Coord) -> Result<State, SimError> {
        Err(SimError::OutOfBoundsError(coord))
    }

    fn live_cells(&self) -> Vec<Coord> {
        Vec::new()
    }

    fn toggle(&mut self, coord: Coord) -> Result<State, SimError> {
        Err(SimError::OutOfBoundsError(coord))
    }

    fn set_cell_state(&mut self, coord: Coord, _state: State) -> Result<bool, SimError> {
        Err(SimError::OutOfBoundsError(coord))
    }

    fn reset(&mut self) {}

    fn clear(&mut self) -> Vec<Coord> {
        Vec::new()
    }

    fn resize(&mut self, _width: i32, _height: i32) -> Result<(), SimError> {
        Ok(())
    }

    fn randomize(&mut self, _saturation: f64) -> Result<Vec<Coord>, SimError> {
        Ok(Vec::new())
    }

    fn randomize_seeded(&mut self, _saturation: f64, _seed: u64) -> Result<Vec<Coord>, SimError> {
        Ok(Vec::new())
    }

    fn advance(&mut self) -> Result<Vec<Coord>, SimError> {
        Err(SimError::InvalidIndexError(99))
    }
}

#[test]
fn scheduler_stops_on_tick_failure() -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let mut sched = Scheduler::new(MILLIS_100)?;
    let mut world = BrokenEngine(Config::new(5, 5));

    sched.start(t0);
    assert_eq!(
        sched.tick(&mut world, t0 + MILLIS_100),
        Err(SimError::InvalidIndexError(99))
    );

    // The failure is fatal to the loop: the scheduler has stopped
    // itself and the stale deadline is gone.
    assert!(!sched.is_running());
    assert_eq!(sched.next_fire(), None);
    assert_eq!(sched.tick(&mut world, t0 + Duration::from_secs(10))?, None);
    Ok(())
}

#[test]
fn scheduler_validation() {
    assert_eq!(
        Scheduler::new(Duration::ZERO).err(),
        Some(SimError::ZeroIntervalError)
    );
    let mut sched = Scheduler::default();
    assert_eq!(sched.interval(), MILLIS_100);
    assert!(!sched.is_running());
    assert_eq!(
        sched.set_interval(Duration::ZERO),
        Err(SimError::ZeroIntervalError)
    );
    assert_eq!(sched.interval(), MILLIS_100);
}

#[test]
fn huge_sparse_board() -> Result<(), Box<dyn Error>> {
    // The area of this board exceeds `i32::MAX`; the index arithmetic
    // must widen before multiplying.
    let mut world = Config::new(50_000, 50_000)
        .set_storage(Storage::Sparse)
        .world()?;
    for coord in [(25_000, 49_998), (25_000, 49_999)] {
        world.set_cell_state(coord, State::Alive)?;
    }
    assert_eq!(
        world.live_cells(),
        vec![(25_000, 49_998), (25_000, 49_999)]
    );

    // Two vertically adjacent cells near the bottom edge: one neighbor
    // each, so both die and nothing is born.
    let changed = world.advance()?;
    assert_eq!(changed, vec![(25_000, 49_998), (25_000, 49_999)]);
    assert!(world.live_cells().is_empty());
    Ok(())
}

#[test]
fn display_formats() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(3, 3).set_storage(Storage::Sparse).world()?;
    for coord in [(1, 0), (1, 1), (1, 2)] {
        world.set_cell_state(coord, State::Alive)?;
    }
    assert_eq!(
        world.rle(),
        String::from(
            "x = 3, y = 3, rule = B3/S23\n\
             .o.$\n\
             .o.$\n\
             .o.!\n"
        )
    );
    assert_eq!(world.plaintext(), String::from(".o.\n.o.\n.o.\n"));
    Ok(())
}
