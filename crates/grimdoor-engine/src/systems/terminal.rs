//! Contact terminal — the simulated transmission sequence behind the
//! contact form. Purely local theater: no data leaves the page. The
//! sequence walks idle → encrypting → uploading → complete and then resets
//! the submit control to its original label.

/// Labels shown on the submit control during the sequence.
pub const ENCRYPTING_LABEL: &str = "ENCRYPTING DATA...";
pub const UPLOADING_LABEL: &str = "UPLOADING TO SERVER [||||||||--]";
pub const COMPLETE_LABEL: &str = "TRANSMISSION COMPLETE";

/// Timing of the fake submission sequence, in milliseconds from submit.
#[derive(Debug, Clone, Copy)]
pub struct TerminalTiming {
    /// When the uploading label appears.
    pub upload_at_ms: f32,
    /// When the sequence completes and inputs are cleared.
    pub complete_at_ms: f32,
    /// How long the completed state lingers before the control resets.
    pub reset_after_ms: f32,
}

impl Default for TerminalTiming {
    fn default() -> Self {
        Self {
            upload_at_ms: 1000.0,
            complete_at_ms: 2500.0,
            reset_after_ms: 3000.0,
        }
    }
}

/// What the sequence asks the page to do at each phase boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalAction {
    ShowEncrypting,
    ShowUploading,
    /// Also the moment the form inputs are cleared.
    ShowComplete,
    /// Sequence finished; restore the label captured at submit time.
    Reset { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Encrypting,
    Uploading,
    Complete,
}

/// State machine for one contact form.
#[derive(Debug)]
pub struct ContactTerminal {
    timing: TerminalTiming,
    phase: Phase,
    elapsed_ms: f32,
    /// Label on the submit control before the sequence started.
    original_label: Option<String>,
}

impl ContactTerminal {
    pub fn new(timing: TerminalTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            elapsed_ms: 0.0,
            original_label: None,
        }
    }

    /// The form was submitted. Starts (or restarts) the sequence and returns
    /// the first action. `button_label` is the control's label at submit
    /// time; it comes back in the final `Reset`.
    pub fn submit(&mut self, button_label: &str) -> TerminalAction {
        self.phase = Phase::Encrypting;
        self.elapsed_ms = 0.0;
        self.original_label = Some(button_label.to_owned());
        TerminalAction::ShowEncrypting
    }

    /// Advance the sequence, pushing every boundary the elapsed time has
    /// passed. A long frame delta can emit several actions in order.
    pub fn tick(&mut self, dt_ms: f32, out: &mut Vec<TerminalAction>) {
        if self.phase == Phase::Idle {
            return;
        }
        self.elapsed_ms += dt_ms;

        if self.phase == Phase::Encrypting && self.elapsed_ms >= self.timing.upload_at_ms {
            self.phase = Phase::Uploading;
            out.push(TerminalAction::ShowUploading);
        }
        if self.phase == Phase::Uploading && self.elapsed_ms >= self.timing.complete_at_ms {
            self.phase = Phase::Complete;
            out.push(TerminalAction::ShowComplete);
        }
        if self.phase == Phase::Complete
            && self.elapsed_ms >= self.timing.complete_at_ms + self.timing.reset_after_ms
        {
            self.phase = Phase::Idle;
            let label = self.original_label.take().unwrap_or_default();
            out.push(TerminalAction::Reset { label });
        }
    }

    /// Whether a sequence is currently running.
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }
}

impl Default for ContactTerminal {
    fn default() -> Self {
        Self::new(TerminalTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_walks_all_phases_in_order() {
        let mut term = ContactTerminal::default();
        assert_eq!(term.submit("TRANSMIT"), TerminalAction::ShowEncrypting);

        let mut out = Vec::new();
        term.tick(999.0, &mut out);
        assert!(out.is_empty());

        term.tick(1.0, &mut out);
        assert_eq!(out, vec![TerminalAction::ShowUploading]);

        out.clear();
        term.tick(1500.0, &mut out);
        assert_eq!(out, vec![TerminalAction::ShowComplete]);

        out.clear();
        term.tick(3000.0, &mut out);
        assert_eq!(
            out,
            vec![TerminalAction::Reset {
                label: "TRANSMIT".into()
            }]
        );
        assert!(!term.is_running());
    }

    #[test]
    fn long_delta_emits_boundaries_in_order() {
        let mut term = ContactTerminal::default();
        term.submit("SEND");

        let mut out = Vec::new();
        term.tick(10_000.0, &mut out);
        assert_eq!(
            out,
            vec![
                TerminalAction::ShowUploading,
                TerminalAction::ShowComplete,
                TerminalAction::Reset {
                    label: "SEND".into()
                },
            ]
        );
    }

    #[test]
    fn resubmit_restarts_with_new_label() {
        let mut term = ContactTerminal::default();
        term.submit("TRANSMIT");

        let mut out = Vec::new();
        term.tick(1200.0, &mut out);
        out.clear();

        // Submit again mid-sequence
        term.submit("TRANSMIT AGAIN");
        term.tick(999.0, &mut out);
        assert!(out.is_empty(), "clock must restart from the new submit");

        term.tick(5000.0, &mut out);
        assert_eq!(
            out.last(),
            Some(&TerminalAction::Reset {
                label: "TRANSMIT AGAIN".into()
            })
        );
    }

    #[test]
    fn idle_terminal_ignores_ticks() {
        let mut term = ContactTerminal::default();
        let mut out = Vec::new();
        term.tick(100_000.0, &mut out);
        assert!(out.is_empty());
    }
}
