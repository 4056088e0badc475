use crate::bridge::protocol::HostEvent;

/// A queue of host events.
/// The bridge writes events as the browser dispatches them; the engine reads
/// and drains them once per frame.
pub struct EventQueue {
    events: Vec<HostEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new host event (called from the DOM bridge).
    pub fn push(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in FIFO order. Clears the queue.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &HostEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
