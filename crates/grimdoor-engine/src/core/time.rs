/// Fixed timestep accumulator.
/// Converts variable frame deltas into exact animation ticks (the scramble
/// effect steps every 30 ms regardless of frame rate).
pub struct FixedTimestep {
    /// The fixed delta per tick, in milliseconds.
    dt_ms: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt_ms: f32) -> Self {
        Self {
            dt_ms,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks
    /// to run. Capped at 10 ticks per frame so a backgrounded tab does not
    /// replay its whole absence on return.
    pub fn accumulate(&mut self, frame_dt_ms: f32) -> u32 {
        self.accumulator += frame_dt_ms;
        self.accumulator = self.accumulator.min(self.dt_ms * 10.0);
        let ticks = (self.accumulator / self.dt_ms) as u32;
        self.accumulator -= ticks as f32 * self.dt_ms;
        ticks
    }

    /// The fixed delta, in milliseconds.
    pub fn dt_ms(&self) -> f32 {
        self.dt_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut ts = FixedTimestep::new(30.0);
        let ticks = ts.accumulate(30.0);
        assert_eq!(ticks, 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(30.0);
        let ticks = ts.accumulate(16.0);
        assert_eq!(ticks, 0);
        let ticks = ts.accumulate(16.0);
        assert_eq!(ticks, 1);
    }

    #[test]
    fn caps_at_ten_ticks() {
        let mut ts = FixedTimestep::new(30.0);
        // Two seconds worth of backlog, but capped at 10
        let ticks = ts.accumulate(2000.0);
        assert_eq!(ticks, 10);
    }
}
