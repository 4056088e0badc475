//! Text scramble ("decryption") system.
//!
//! Replaces an element's text with random junk characters that resolve back
//! to the original, left to right. A single fixed-rate clock drives every
//! session; progress is stored as whole ticks so a character locks in after
//! exactly `resolve_ticks` ticks, with no float drift.

use std::collections::HashMap;

use crate::bridge::protocol::{DomCommand, ElementId};
use crate::core::rng::Rng;

/// Junk alphabet for unresolved positions. Fixed and independent of the
/// original text, so nothing leaks before a character resolves. Underscores
/// are repeated to weight the noise toward blank-looking output.
pub const SCRAMBLE_CHARS: [char; 26] = [
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
    '_', '_', '_', '_', '_', '_', '_', '_',
];

/// Default number of ticks a character needs before it locks in
/// (1/3 of a character per tick).
pub const DEFAULT_RESOLVE_TICKS: u32 = 3;

/// One running decryption animation bound to one element.
#[derive(Debug, Clone)]
struct ScrambleSession {
    /// Text captured when the session started. The final rendered state is
    /// exactly this sequence.
    original: Vec<char>,
    /// Elapsed ticks. `ticks / resolve_ticks` leading characters are locked.
    ticks: u32,
}

/// Manages all active scramble sessions, keyed by element.
///
/// Invariant: at most one session per element. Starting a session on an
/// element that already has one replaces it, so the stale session never
/// writes again.
#[derive(Debug)]
pub struct ScrambleState {
    sessions: HashMap<ElementId, ScrambleSession>,
    resolve_ticks: u32,
}

impl ScrambleState {
    pub fn new(resolve_ticks: u32) -> Self {
        Self {
            sessions: HashMap::new(),
            resolve_ticks: resolve_ticks.max(1),
        }
    }

    /// Begin a session for `id`, capturing `text` at call time. Cancels any
    /// session already running on the element. Empty text completes
    /// immediately: no session, no output.
    pub fn start(&mut self, id: ElementId, text: &str) {
        let original: Vec<char> = text.chars().collect();
        if original.is_empty() {
            self.sessions.remove(&id);
            return;
        }
        self.sessions.insert(id, ScrambleSession { original, ticks: 0 });
    }

    /// Cancel the session on `id`, if any.
    pub fn cancel(&mut self, id: ElementId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Whether a session is running on `id`.
    pub fn is_active(&self, id: ElementId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether there are no active sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Advance every session one tick and emit the rendered text for each.
    /// Sessions whose whole text has resolved emit the original exactly and
    /// are removed. Order across elements is unspecified; ticks for one
    /// element are strictly sequential.
    pub fn tick(&mut self, rng: &mut Rng, out: &mut Vec<DomCommand>) {
        let mut finished = Vec::new();

        for (&id, session) in self.sessions.iter_mut() {
            session.ticks += 1;
            let resolved = (session.ticks / self.resolve_ticks) as usize;

            if resolved >= session.original.len() {
                out.push(DomCommand::SetText {
                    id,
                    text: session.original.iter().collect(),
                });
                finished.push(id);
            } else {
                let text: String = session
                    .original
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| {
                        if i < resolved {
                            c
                        } else {
                            let pick = rng.next_int(SCRAMBLE_CHARS.len() as u32);
                            SCRAMBLE_CHARS[pick as usize]
                        }
                    })
                    .collect();
                out.push(DomCommand::SetText { id, text });
            }
        }

        for id in finished {
            self.sessions.remove(&id);
        }
    }
}

impl Default for ScrambleState {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVE_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EL: ElementId = ElementId(1);

    fn rendered(out: &[DomCommand]) -> &str {
        match out.last() {
            Some(DomCommand::SetText { text, .. }) => text,
            other => panic!("expected SetText, got {:?}", other),
        }
    }

    #[test]
    fn resolves_left_to_right_then_stops() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(42);
        state.start(EL, "ABC");

        let mut out = Vec::new();
        // Ticks 1-2: nothing locked yet
        for _ in 0..2 {
            state.tick(&mut rng, &mut out);
            assert_eq!(rendered(&out).chars().count(), 3);
        }

        // Tick 3: first character locked
        state.tick(&mut rng, &mut out);
        assert_eq!(rendered(&out).chars().next(), Some('A'));

        // Tick 6: first two characters locked
        for _ in 0..3 {
            state.tick(&mut rng, &mut out);
        }
        let text: Vec<char> = rendered(&out).chars().collect();
        assert_eq!(&text[..2], &['A', 'B']);

        // Tick 9: fully resolved, session gone
        for _ in 0..3 {
            state.tick(&mut rng, &mut out);
        }
        assert_eq!(rendered(&out), "ABC");
        assert!(!state.is_active(EL));

        // Further ticks write nothing
        let before = out.len();
        state.tick(&mut rng, &mut out);
        assert_eq!(out.len(), before);
    }

    #[test]
    fn round_trip_restores_original_text() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(7);
        let original = "THE ABIGAIL PROTOCOL";
        state.start(EL, original);

        let mut out = Vec::new();
        while state.is_active(EL) {
            state.tick(&mut rng, &mut out);
        }
        assert_eq!(rendered(&out), original);
    }

    #[test]
    fn locked_prefix_never_shrinks() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(99);
        let original: Vec<char> = "SYSTEM ONLINE".chars().collect();
        state.start(EL, "SYSTEM ONLINE");

        let mut tick = 0u32;
        while state.is_active(EL) {
            let mut out = Vec::new();
            state.tick(&mut rng, &mut out);
            tick += 1;
            let text: Vec<char> = rendered(&out).chars().collect();
            assert_eq!(text.len(), original.len());
            let resolved = ((tick / DEFAULT_RESOLVE_TICKS) as usize).min(original.len());
            assert_eq!(&text[..resolved], &original[..resolved]);
        }
    }

    #[test]
    fn unresolved_positions_use_junk_alphabet() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(3);
        state.start(EL, "ROADMAP");

        let mut out = Vec::new();
        state.tick(&mut rng, &mut out);
        for c in rendered(&out).chars() {
            assert!(SCRAMBLE_CHARS.contains(&c), "unexpected junk char {:?}", c);
        }
    }

    #[test]
    fn restart_replaces_session() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(5);
        state.start(EL, "FIRST");

        let mut out = Vec::new();
        state.tick(&mut rng, &mut out);
        state.tick(&mut rng, &mut out);

        // A second start mid-animation supersedes the first
        state.start(EL, "SECOND");
        assert_eq!(state.len(), 1);

        while state.is_active(EL) {
            state.tick(&mut rng, &mut out);
        }
        assert_eq!(rendered(&out), "SECOND");
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(1);
        state.start(EL, "");
        assert!(!state.is_active(EL));

        let mut out = Vec::new();
        state.tick(&mut rng, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn restart_with_empty_text_cancels_running_session() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(1);
        state.start(EL, "VISIBLE");
        let mut out = Vec::new();
        state.tick(&mut rng, &mut out);

        state.start(EL, "");
        assert!(!state.is_active(EL));
    }

    #[test]
    fn cancel_stops_a_running_session() {
        let mut state = ScrambleState::default();
        state.start(EL, "HALT");
        assert!(state.cancel(EL));
        assert!(!state.is_active(EL));
        // Cancelling again reports nothing to cancel
        assert!(!state.cancel(EL));
    }

    #[test]
    fn sessions_are_independent_across_elements() {
        let mut state = ScrambleState::default();
        let mut rng = Rng::new(11);
        let a = ElementId(1);
        let b = ElementId(2);
        state.start(a, "AB");
        state.start(b, "LONGER TITLE");

        let mut out = Vec::new();
        // "AB" resolves after 6 ticks, the other keeps going
        for _ in 0..6 {
            state.tick(&mut rng, &mut out);
        }
        assert!(!state.is_active(a));
        assert!(state.is_active(b));
    }
}
