use std::collections::HashMap;

use crate::bridge::protocol::{DomCommand, ElementId, HostEvent};
use crate::config::SiteConfig;
use crate::core::rng::Rng;
use crate::core::time::FixedTimestep;
use crate::input::queue::EventQueue;
use crate::systems::attention::TabAttention;
use crate::systems::loader::LoaderState;
use crate::systems::navbar::{anchor_target_y, NavState};
use crate::systems::reveal::{ElementKind, Reveal, RevealScheduler};
use crate::systems::scramble::ScrambleState;
use crate::systems::terminal::{
    ContactTerminal, TerminalAction, COMPLETE_LABEL, ENCRYPTING_LABEL, UPLOADING_LABEL,
};

#[cfg(feature = "parallax")]
use crate::systems::parallax::Parallax;
#[cfg(feature = "parallax")]
use glam::Vec2;

/// Handles to the page chrome the engine drives directly. All optional: a
/// page missing a node simply skips that effect.
#[derive(Debug, Default, Clone)]
pub struct PageHandles {
    pub navbar: Option<ElementId>,
    pub nav_links: Option<ElementId>,
    pub menu_toggle: Option<ElementId>,
    pub hero_title: Option<ElementId>,
    pub contact_form: Option<ElementId>,
    pub submit_button: Option<ElementId>,
    pub parallax_layer: Option<ElementId>,
}

/// The site engine: owns every subsystem, consumes host events, and emits
/// DOM commands. Constructed once at startup and held by the runner — no
/// ambient global state.
pub struct SiteEngine {
    config: SiteConfig,
    handles: PageHandles,
    clock: FixedTimestep,
    rng: Rng,
    pub reveal: RevealScheduler,
    pub scramble: ScrambleState,
    pub nav: NavState,
    pub loader: LoaderState,
    pub terminal: ContactTerminal,
    pub attention: TabAttention,
    #[cfg(feature = "parallax")]
    pub parallax: Parallax,
    /// Text captured for each bound glitch title.
    titles: HashMap<ElementId, String>,
    commands: Vec<DomCommand>,
}

impl SiteEngine {
    pub fn new(config: SiteConfig, seed: u64) -> Self {
        Self {
            clock: FixedTimestep::new(config.scramble_tick_ms),
            rng: Rng::new(seed),
            reveal: RevealScheduler::new(),
            scramble: ScrambleState::new(config.scramble_resolve_ticks),
            nav: NavState::new(),
            loader: LoaderState::new(config.loader_delay_ms),
            terminal: ContactTerminal::new(config.terminal_timing()),
            attention: TabAttention::new(config.attention_title.clone()),
            #[cfg(feature = "parallax")]
            parallax: Parallax::new(config.parallax_strength),
            handles: PageHandles::default(),
            titles: HashMap::new(),
            commands: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn handles(&self) -> &PageHandles {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut PageHandles {
        &mut self.handles
    }

    /// Boot sequence: announce and lock scrolling until the loader expires.
    pub fn boot(&mut self) {
        log::info!("GRIMDOOR GAMES // SYSTEM_READY");
        self.commands
            .push(DomCommand::SetBodyOverflow { visible: false });
    }

    /// Watch a roadmap entry for its one-shot reveal.
    pub fn watch_timeline(&mut self, id: ElementId) {
        self.reveal.watch(id, ElementKind::TimelineItem);
    }

    /// Watch a heading for its one-shot decryption reveal. `text` is the
    /// heading's content at bind time.
    pub fn watch_title(&mut self, id: ElementId, text: &str) {
        self.titles.insert(id, text.to_owned());
        self.reveal.watch(id, ElementKind::GlitchTitle);
    }

    /// Bind the hero title, which decrypts when the loader expires rather
    /// than on intersection.
    pub fn bind_hero(&mut self, id: ElementId, text: &str) {
        self.handles.hero_title = Some(id);
        self.titles.insert(id, text.to_owned());
    }

    /// Remember the real document title for the tab-attention swap.
    pub fn set_page_title(&mut self, title: &str) {
        self.attention.set_page_title(title);
    }

    /// Drain the bridge's queue into the engine.
    pub fn pump(&mut self, queue: &mut EventQueue) {
        for event in queue.drain() {
            self.handle_event(event);
        }
    }

    /// React to a single host event.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Loaded => self.loader.on_loaded(),
            HostEvent::Scroll { y } => {
                if let Some(scrolled) = self.nav.on_scroll(y, self.config.scroll_threshold_px) {
                    if let Some(id) = self.handles.navbar {
                        self.commands.push(if scrolled {
                            DomCommand::AddClass {
                                id,
                                class: "scrolled",
                            }
                        } else {
                            DomCommand::RemoveClass {
                                id,
                                class: "scrolled",
                            }
                        });
                    }
                }
            }
            HostEvent::PointerMove {
                x,
                y,
                viewport_w,
                viewport_h,
            } => {
                #[cfg(feature = "parallax")]
                if let Some(id) = self.handles.parallax_layer {
                    let offset = self
                        .parallax
                        .offset(Vec2::new(x, y), Vec2::new(viewport_w, viewport_h));
                    self.commands.push(DomCommand::SetTranslate {
                        id,
                        x: offset.x,
                        y: offset.y,
                    });
                }
                #[cfg(not(feature = "parallax"))]
                let _ = (x, y, viewport_w, viewport_h);
            }
            HostEvent::Intersection { id, entering } => {
                if let Some(reveal) = self.reveal.on_intersection(id, entering) {
                    self.apply_reveal(reveal);
                }
            }
            HostEvent::VisibilityChange { hidden } => {
                if let Some(title) = self
                    .attention
                    .on_visibility_change(hidden)
                    .map(str::to_owned)
                {
                    self.commands.push(DomCommand::SetTitle { text: title });
                }
            }
            HostEvent::MenuToggle => {
                let open = self.nav.toggle_menu();
                self.set_menu_classes(open);
            }
            HostEvent::NavLinkClick => {
                if self.nav.close_menu() {
                    self.set_menu_classes(false);
                }
            }
            HostEvent::AnchorClick {
                target_top,
                page_y,
                nav_height,
            } => {
                self.commands.push(DomCommand::ScrollTo {
                    y: anchor_target_y(target_top, page_y, nav_height),
                });
            }
            HostEvent::Submit { button_label } => {
                let action = self.terminal.submit(&button_label);
                self.apply_terminal_action(action);
            }
        }
    }

    /// Advance time-driven subsystems by one frame.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.loader.tick(dt_ms) {
            self.commands
                .push(DomCommand::SetBodyOverflow { visible: true });
            if let Some(id) = self.handles.hero_title {
                let text = self.titles.get(&id).cloned().unwrap_or_default();
                self.scramble.start(id, &text);
            }
        }

        let mut actions = Vec::new();
        self.terminal.tick(dt_ms, &mut actions);
        for action in actions {
            self.apply_terminal_action(action);
        }

        let ticks = self.clock.accumulate(dt_ms);
        for _ in 0..ticks {
            self.scramble.tick(&mut self.rng, &mut self.commands);
        }
    }

    /// Take all pending DOM commands, in emission order.
    pub fn drain_commands(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.commands)
    }

    fn apply_reveal(&mut self, reveal: Reveal) {
        match reveal.kind {
            ElementKind::TimelineItem => {
                self.commands.push(DomCommand::AddClass {
                    id: reveal.id,
                    class: "active",
                });
            }
            ElementKind::GlitchTitle => {
                let text = self.titles.get(&reveal.id).cloned().unwrap_or_default();
                self.scramble.start(reveal.id, &text);
                self.commands.push(DomCommand::SetOpacity {
                    id: reveal.id,
                    value: 1.0,
                });
            }
        }
        self.commands.push(DomCommand::Unobserve { id: reveal.id });
    }

    fn set_menu_classes(&mut self, open: bool) {
        for id in [self.handles.nav_links, self.handles.menu_toggle]
            .into_iter()
            .flatten()
        {
            self.commands.push(if open {
                DomCommand::AddClass { id, class: "active" }
            } else {
                DomCommand::RemoveClass { id, class: "active" }
            });
        }
    }

    fn apply_terminal_action(&mut self, action: TerminalAction) {
        let Some(button) = self.handles.submit_button else {
            return;
        };
        match action {
            TerminalAction::ShowEncrypting => {
                self.commands.push(DomCommand::SetStyle {
                    id: button,
                    property: "width",
                    value: "100%".into(),
                });
                self.commands.push(DomCommand::SetText {
                    id: button,
                    text: ENCRYPTING_LABEL.into(),
                });
                self.push_button_colors(button, "var(--color-bg-deep)", "var(--color-cyan-primary)");
                self.commands.push(DomCommand::SetStyle {
                    id: button,
                    property: "border-color",
                    value: "var(--color-cyan-primary)".into(),
                });
            }
            TerminalAction::ShowUploading => {
                self.commands.push(DomCommand::SetText {
                    id: button,
                    text: UPLOADING_LABEL.into(),
                });
            }
            TerminalAction::ShowComplete => {
                self.commands.push(DomCommand::SetText {
                    id: button,
                    text: COMPLETE_LABEL.into(),
                });
                self.push_button_colors(button, "var(--color-cyan-primary)", "#000");
                if let Some(form) = self.handles.contact_form {
                    self.commands.push(DomCommand::ClearInputs { form });
                }
            }
            TerminalAction::Reset { label } => {
                self.commands.push(DomCommand::SetText {
                    id: button,
                    text: label,
                });
                self.push_button_colors(button, "transparent", "var(--color-cyan-primary)");
            }
        }
    }

    fn push_button_colors(&mut self, id: ElementId, background: &str, color: &str) {
        self.commands.push(DomCommand::SetStyle {
            id,
            property: "background-color",
            value: background.into(),
        });
        self.commands.push(DomCommand::SetStyle {
            id,
            property: "color",
            value: color.into(),
        });
    }
}
