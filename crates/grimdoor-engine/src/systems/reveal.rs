//! Reveal scheduler — fires a one-shot reveal per watched element the first
//! time it enters the viewport. The bridge owns the actual
//! IntersectionObserver; this module only decides, so a page without
//! observer support simply never delivers events and nothing reveals.

use std::collections::HashMap;

use crate::bridge::protocol::ElementId;

/// What a watched element is, which decides its reveal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Roadmap entry: gains the `active` class when revealed.
    TimelineItem,
    /// Section heading: decrypts its text and fades in when revealed.
    GlitchTitle,
}

/// A one-shot reveal produced when a watched element first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub id: ElementId,
    pub kind: ElementKind,
}

/// Tracks watched elements. Each transitions exactly once from watched to
/// revealed; once revealed it is forgotten and later notifications for it
/// are no-ops.
#[derive(Debug, Default)]
pub struct RevealScheduler {
    watched: HashMap<ElementId, ElementKind>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Watching an already-watched element just
    /// updates its kind.
    pub fn watch(&mut self, id: ElementId, kind: ElementKind) {
        self.watched.insert(id, kind);
    }

    /// Number of elements still waiting to reveal.
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Handle an intersection notification. Returns the reveal exactly once,
    /// on the element's first entering transition. Exits, unknown elements,
    /// and repeat notifications return `None`.
    pub fn on_intersection(&mut self, id: ElementId, entering: bool) -> Option<Reveal> {
        if !entering {
            return None;
        }
        self.watched.remove(&id).map(|kind| Reveal { id, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once() {
        let mut sched = RevealScheduler::new();
        let id = ElementId(3);
        sched.watch(id, ElementKind::TimelineItem);

        let first = sched.on_intersection(id, true);
        assert_eq!(
            first,
            Some(Reveal {
                id,
                kind: ElementKind::TimelineItem
            })
        );

        // Re-entering the viewport must not re-trigger
        assert_eq!(sched.on_intersection(id, true), None);
        assert_eq!(sched.watched_count(), 0);
    }

    #[test]
    fn exit_notifications_are_ignored() {
        let mut sched = RevealScheduler::new();
        let id = ElementId(1);
        sched.watch(id, ElementKind::GlitchTitle);

        assert_eq!(sched.on_intersection(id, false), None);
        // Still watched, fires on a later entry
        assert!(sched.on_intersection(id, true).is_some());
    }

    #[test]
    fn unknown_element_is_a_no_op() {
        let mut sched = RevealScheduler::new();
        assert_eq!(sched.on_intersection(ElementId(9), true), None);
    }

    #[test]
    fn elements_reveal_independently() {
        let mut sched = RevealScheduler::new();
        let a = ElementId(1);
        let b = ElementId(2);
        sched.watch(a, ElementKind::TimelineItem);
        sched.watch(b, ElementKind::GlitchTitle);

        assert!(sched.on_intersection(b, true).is_some());
        assert_eq!(sched.watched_count(), 1);
        assert!(sched.on_intersection(a, true).is_some());
    }
}
