//! Wire types between the headless engine and the DOM bridge.
//!
//! The bridge translates browser events into `HostEvent`s and pushes them
//! into the engine's queue; the engine answers with `DomCommand`s the bridge
//! applies to real nodes. The engine itself never touches the DOM.

/// Unique handle for a DOM node registered with the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Host-side notifications the engine subscribes to.
/// Generic — carries measurements, never node references.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The page finished loading (window `load`, or already complete at init).
    Loaded,
    /// Vertical scroll position changed.
    Scroll { y: f32 },
    /// Pointer moved; viewport dimensions ride along for the parallax math.
    PointerMove {
        x: f32,
        y: f32,
        viewport_w: f32,
        viewport_h: f32,
    },
    /// A watched element crossed the visibility threshold.
    Intersection { id: ElementId, entering: bool },
    /// The tab was hidden or became visible again.
    VisibilityChange { hidden: bool },
    /// The mobile menu button was clicked.
    MenuToggle,
    /// A navigation link was clicked (closes the mobile menu).
    NavLinkClick,
    /// An in-page anchor was clicked. Geometry is sampled by the bridge at
    /// click time; the engine only does the offset arithmetic.
    AnchorClick {
        target_top: f32,
        page_y: f32,
        nav_height: f32,
    },
    /// The contact form was submitted. The submit control's label is captured
    /// at submit time so the terminal can restore it afterwards.
    Submit { button_label: String },
}

/// DOM mutations the engine asks the bridge to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum DomCommand {
    /// Replace an element's text content.
    SetText { id: ElementId, text: String },
    /// Add a class to an element's class list.
    AddClass { id: ElementId, class: &'static str },
    /// Remove a class from an element's class list.
    RemoveClass { id: ElementId, class: &'static str },
    /// Set an element's opacity inline style.
    SetOpacity { id: ElementId, value: f32 },
    /// Set an arbitrary inline style property.
    SetStyle {
        id: ElementId,
        property: &'static str,
        value: String,
    },
    /// Replace the document title.
    SetTitle { text: String },
    /// Smooth-scroll the viewport to a vertical position.
    ScrollTo { y: f32 },
    /// Clear every input and textarea inside a form.
    ClearInputs { form: ElementId },
    /// Stop watching an element for intersection changes.
    Unobserve { id: ElementId },
    /// Lock or release page scrolling via the body overflow style.
    SetBodyOverflow { visible: bool },
    /// Translate a decorative layer (parallax drift).
    SetTranslate { id: ElementId, x: f32, y: f32 },
}
