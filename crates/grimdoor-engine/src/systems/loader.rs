//! Loading-screen sequence. Scroll stays locked through an artificial delay
//! after the page loads; when the delay expires the engine releases scroll
//! and decrypts the hero title.

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    WaitingForLoad,
    Counting { elapsed_ms: f32 },
    Done,
}

/// One-shot boot countdown.
#[derive(Debug)]
pub struct LoaderState {
    phase: Phase,
    delay_ms: f32,
}

impl LoaderState {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            phase: Phase::WaitingForLoad,
            delay_ms,
        }
    }

    /// The page finished loading; start the countdown. Repeat calls after
    /// the countdown started are ignored.
    pub fn on_loaded(&mut self) {
        if self.phase == Phase::WaitingForLoad {
            self.phase = Phase::Counting { elapsed_ms: 0.0 };
        }
    }

    /// Advance the countdown. Returns true exactly once, when the delay
    /// expires.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if let Phase::Counting { elapsed_ms } = self.phase {
            let elapsed_ms = elapsed_ms + dt_ms;
            if elapsed_ms >= self.delay_ms {
                self.phase = Phase::Done;
                return true;
            }
            self.phase = Phase::Counting { elapsed_ms };
        }
        false
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_load_before_counting() {
        let mut loader = LoaderState::new(2500.0);
        assert!(!loader.tick(10_000.0));
        loader.on_loaded();
        assert!(!loader.tick(2499.0));
        assert!(loader.tick(1.0));
        assert!(loader.is_done());
    }

    #[test]
    fn fires_exactly_once() {
        let mut loader = LoaderState::new(2500.0);
        loader.on_loaded();
        assert!(loader.tick(3000.0));
        assert!(!loader.tick(3000.0));
    }

    #[test]
    fn repeat_load_events_are_ignored() {
        let mut loader = LoaderState::new(100.0);
        loader.on_loaded();
        loader.tick(60.0);
        loader.on_loaded();
        // Countdown was not restarted
        assert!(loader.tick(40.0));
    }
}
