//! Timed generation advancement.

use crate::{cells::Coord, error::Error, traits::Engine};
use log::debug;
use std::time::{Duration, Instant};

/// Drives repeated generation advancement at a configurable interval.
///
/// The scheduler owns no thread and no timer of its own; it keeps a
/// deadline, and the host loop calls [`tick`](Scheduler::tick) with the
/// current time, sleeping until [`next_fire`](Scheduler::next_fire) in
/// between. Created stopped; [`start`](Scheduler::start) and
/// [`stop`](Scheduler::stop) are idempotent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduler {
    /// Pacing between generations.
    interval: Duration,

    /// When the next tick fires. `None` when stopped.
    deadline: Option<Instant>,
}

/// A stopped scheduler firing every 100 milliseconds.
impl Default for Scheduler {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            deadline: None,
        }
    }
}

impl Scheduler {
    /// Creates a stopped scheduler with the given interval.
    ///
    /// Returns an error if the interval is zero.
    pub fn new(interval: Duration) -> Result<Self, Error> {
        if interval.is_zero() {
            return Err(Error::ZeroIntervalError);
        }
        Ok(Self {
            interval,
            deadline: None,
        })
    }

    /// Whether the scheduler is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pacing between generations.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick fires, or `None` when stopped.
    #[inline]
    pub fn next_fire(&self) -> Option<Instant> {
        self.deadline
    }

    /// How long until the next tick fires, or `None` when stopped.
    ///
    /// Zero when the deadline has already passed.
    pub fn idle_time(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Starts the scheduler; the first tick fires one interval after
    /// `now`.
    ///
    /// No-op if already running: the pending deadline is kept, so two
    /// calls never produce two advancement loops.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            debug!("starting the scheduler, interval {:?}", self.interval);
            self.deadline = Some(now + self.interval);
        }
    }

    /// Stops the scheduler, cancelling the pending tick.
    ///
    /// No-op if already stopped. A stopped scheduler never fires, even
    /// once the cancelled deadline has passed.
    pub fn stop(&mut self) {
        if self.deadline.take().is_some() {
            debug!("stopping the scheduler");
        }
    }

    /// Sets the pacing for subsequent ticks.
    ///
    /// The new interval takes effect from the *next* scheduled tick; a
    /// deadline already pending is not rescheduled. Returns an error if
    /// the interval is zero.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), Error> {
        if interval.is_zero() {
            return Err(Error::ZeroIntervalError);
        }
        self.interval = interval;
        Ok(())
    }

    /// Advances the world once if running and the deadline has passed.
    ///
    /// Returns the changed cells of the advanced generation, or `None`
    /// when the deadline has not been reached. Fires at most once per
    /// call; the next deadline is set one interval after `now`, so a
    /// late caller does not get a burst of catch-up generations.
    ///
    /// A tick failure is fatal to the loop: the scheduler stops itself
    /// before surfacing the error.
    pub fn tick(
        &mut self,
        world: &mut dyn Engine,
        now: Instant,
    ) -> Result<Option<Vec<Coord>>, Error> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(now + self.interval);
                match world.advance() {
                    Ok(changed) => Ok(Some(changed)),
                    Err(e) => {
                        self.stop();
                        Err(e)
                    }
                }
            }
            _ => Ok(None),
        }
    }
}
