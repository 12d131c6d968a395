//! Clock module - the shared shift timer
//!
//! A game advances one step whenever its timer passes [`SHIFT_THRESHOLD`]. The timer is
//! fed by a dedicated clock thread that wakes every [`CLOCK_INTERVAL_MS`] and adds an
//! increment derived from the current speed:
//!
//! | Condition | Increment per wake |
//! |-----------|--------------------|
//! | hold flag set | `HOLD_TIMER_STEP` (0.5) |
//! | speed 1 | `BASE_TIMER_STEP` (0.150) |
//! | speed n > 1 | `SPEED_TIMER_STEP * n` (0.075 x n) |
//!
//! The timer lives behind its own mutex so the clock thread never contends for the game
//! state lock. Speed and hold are published by the simulation loop through atomics and
//! read by the clock on every wake.
//!
//! Lock order: the simulation loop may take the timer lock while it holds the game state
//! lock, never the reverse.
//!
//! [`CLOCK_INTERVAL_MS`]: crate::types::CLOCK_INTERVAL_MS

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::{BASE_TIMER_STEP, HOLD_TIMER_STEP, SHIFT_THRESHOLD, SPEED_TIMER_STEP};

/// Timer increment for one clock wake
pub fn timer_step(speed: u32, hold: bool) -> f32 {
    if hold {
        HOLD_TIMER_STEP
    } else if speed <= 1 {
        BASE_TIMER_STEP
    } else {
        SPEED_TIMER_STEP * speed as f32
    }
}

#[derive(Debug)]
pub struct Clock {
    timer: Mutex<f32>,
    speed: AtomicU32,
    hold: AtomicBool,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            timer: Mutex::new(0.0),
            speed: AtomicU32::new(1),
            hold: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, f32> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// One clock wake: add the increment for the current speed and hold flag
    pub fn advance(&self) {
        let step = timer_step(
            self.speed.load(Ordering::Relaxed),
            self.hold.load(Ordering::Relaxed),
        );
        *self.lock() += step;
    }

    /// Add raw timer units
    pub fn add(&self, units: f32) {
        *self.lock() += units;
    }

    pub fn set_speed(&self, speed: u32) {
        self.speed.store(speed.max(1), Ordering::Relaxed);
    }

    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    pub fn set_hold(&self, hold: bool) {
        self.hold.store(hold, Ordering::Relaxed);
    }

    pub fn hold(&self) -> bool {
        self.hold.load(Ordering::Relaxed)
    }

    pub fn value(&self) -> f32 {
        *self.lock()
    }

    /// Whether the timer has passed the shift threshold
    pub fn elapsed(&self) -> bool {
        *self.lock() > SHIFT_THRESHOLD
    }

    /// Run `step` if the timer has passed the threshold, resetting the timer under the same
    /// lock. Returns `None` without running `step` otherwise.
    pub fn fire<R>(&self, step: impl FnOnce() -> R) -> Option<R> {
        let mut timer = self.lock();
        if *timer <= SHIFT_THRESHOLD {
            return None;
        }
        let out = step();
        *timer = 0.0;
        Some(out)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_step_table() {
        assert_eq!(timer_step(1, false), BASE_TIMER_STEP);
        assert_eq!(timer_step(2, false), 0.150);
        assert_eq!(timer_step(4, false), 0.300);
        assert_eq!(timer_step(3, true), HOLD_TIMER_STEP);
    }

    #[test]
    fn test_fire_waits_for_threshold() {
        let clock = Clock::new();
        assert_eq!(clock.fire(|| 1), None);

        clock.add(1.5);
        assert_eq!(clock.fire(|| 1), None);

        clock.add(0.01);
        assert_eq!(clock.fire(|| 7), Some(7));
        assert_eq!(clock.value(), 0.0);
    }

    #[test]
    fn test_hold_accelerates() {
        let clock = Clock::new();
        clock.set_hold(true);
        for _ in 0..4 {
            clock.advance();
        }
        assert!(clock.elapsed());
    }

    #[test]
    fn test_speed_one_needs_eleven_wakes_at_most() {
        let clock = Clock::new();
        let mut wakes = 0;
        while !clock.elapsed() {
            clock.advance();
            wakes += 1;
        }
        assert!((10..=11).contains(&wakes), "took {wakes} wakes");
    }
}
