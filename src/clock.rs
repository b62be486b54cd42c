//! Fixed-step frame clock
//!
//! Turns variable frame times into whole simulation ticks so the per-tick
//! physics behaves the same on 60 Hz and 144 Hz displays.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed a frame timestamp in milliseconds (as given by
    /// `requestAnimationFrame`) and get the number of ticks to run.
    ///
    /// The very first frame always runs exactly one tick.
    pub fn frame(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => TICK_DT,
        };
        self.last_time = Some(time_ms);
        self.advance(dt)
    }

    /// Accumulate `dt` seconds and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= TICK_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            ticks += 1;
        }

        // Drop whatever backlog the substep cap left behind
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(TICK_DT);
        }

        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_60hz() {
        let mut clock = FrameClock::new();
        let mut total = 0;
        for i in 0..60 {
            total += clock.frame(i as f64 * 1000.0 / 60.0);
        }
        // First frame runs one tick; 59 frame gaps of exactly one tick each
        assert!((59..=60).contains(&total), "got {total}");
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(TICK_DT * 0.5), 0);
        assert_eq!(clock.advance(TICK_DT * 0.6), 1);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        // Backlog dropped: the next short frame does not burst
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.frame(0.0);
        clock.frame(1000.0);
        clock.reset();
        assert_eq!(clock.frame(5000.0), 1);
    }
}
