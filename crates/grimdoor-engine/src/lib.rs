pub mod api;
pub mod bridge;
pub mod config;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::engine::{PageHandles, SiteEngine};
pub use bridge::protocol::{DomCommand, ElementId, HostEvent};
pub use config::SiteConfig;
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use input::queue::EventQueue;
pub use systems::attention::TabAttention;
pub use systems::loader::LoaderState;
pub use systems::navbar::{anchor_target_y, NavState};
pub use systems::reveal::{ElementKind, Reveal, RevealScheduler};
pub use systems::scramble::{ScrambleState, SCRAMBLE_CHARS};
pub use systems::terminal::{
    ContactTerminal, TerminalAction, TerminalTiming, COMPLETE_LABEL, ENCRYPTING_LABEL,
    UPLOADING_LABEL,
};

#[cfg(feature = "parallax")]
pub use systems::parallax::Parallax;
