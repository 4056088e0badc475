use grimdoor_engine::{
    DomCommand, ElementId, EventQueue, HostEvent, PageHandles, SiteConfig, SiteEngine,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    ScrollBehavior, ScrollToOptions, Window,
};

/// Attribute stamped on registered nodes so observer callbacks can map a
/// DOM target back to its engine handle.
const ID_ATTR: &str = "data-fx-id";

/// Owns the engine plus everything DOM-shaped: the element registry, the
/// intersection observer, and the command application.
///
/// Every DOM lookup is optional; a page missing a node loses that one
/// effect and nothing else.
pub struct SiteRunner {
    engine: SiteEngine,
    queue: EventQueue,
    elements: Vec<Element>,
    observed: Vec<ElementId>,
    observer: Option<IntersectionObserver>,
    window: Window,
    document: Document,
    last_frame_ms: Option<f64>,
}

impl SiteRunner {
    pub fn new(config: SiteConfig, seed: u64) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            engine: SiteEngine::new(config, seed),
            queue: EventQueue::new(),
            elements: Vec::new(),
            observed: Vec::new(),
            observer: None,
            window,
            document,
            last_frame_ms: None,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        self.engine.config()
    }

    pub fn handles(&self) -> &PageHandles {
        self.engine.handles()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Elements waiting on the intersection observer.
    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    pub fn set_observer(&mut self, observer: IntersectionObserver) {
        self.observer = Some(observer);
    }

    pub fn push(&mut self, event: HostEvent) {
        self.queue.push(event);
    }

    /// Registered node for an engine handle.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    /// Reverse lookup via the stamped attribute.
    pub fn element_id_of(&self, element: &Element) -> Option<ElementId> {
        element
            .get_attribute(ID_ATTR)?
            .parse::<u32>()
            .ok()
            .map(ElementId)
    }

    fn register(&mut self, element: &Element) -> ElementId {
        // A node matched by two selectors keeps its first handle, so the
        // one-session-per-element invariant holds in the engine.
        if let Some(id) = self.element_id_of(element) {
            return id;
        }
        let id = ElementId(self.elements.len() as u32);
        let _ = element.set_attribute(ID_ATTR, &id.0.to_string());
        self.elements.push(element.clone());
        id
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// Wire the page into the engine: chrome handles, the hero title, and
    /// every element watched for a reveal.
    pub fn bind_page(&mut self) {
        self.engine.set_page_title(&self.document.title());

        if let Some(el) = self.query(".navbar") {
            let id = self.register(&el);
            self.engine.handles_mut().navbar = Some(id);
        }
        if let Some(el) = self.query(".nav-links") {
            let id = self.register(&el);
            self.engine.handles_mut().nav_links = Some(id);
        }
        if let Some(el) = self.query(".menu-toggle") {
            let id = self.register(&el);
            self.engine.handles_mut().menu_toggle = Some(id);
        }
        if let Some(el) = self.query(".glitch-wrapper") {
            let id = self.register(&el);
            self.engine.handles_mut().parallax_layer = Some(id);
        }
        if let Some(el) = self.query("#contact-form") {
            let id = self.register(&el);
            self.engine.handles_mut().contact_form = Some(id);
            if let Some(button) = el.query_selector("button").ok().flatten() {
                let button_id = self.register(&button);
                self.engine.handles_mut().submit_button = Some(button_id);
            }
        }
        if let Some(el) = self.query(".glitch") {
            let id = self.register(&el);
            let text = el.text_content().unwrap_or_default();
            self.engine.bind_hero(id, &text);
        }

        if let Ok(items) = self.document.query_selector_all(".timeline-item") {
            for i in 0..items.length() {
                let Some(el) = items.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let id = self.register(&el);
                self.engine.watch_timeline(id);
                self.observed.push(id);
            }
        }
        if let Ok(titles) = self.document.query_selector_all(".title-main, h3") {
            for i in 0..titles.length() {
                let Some(el) = titles.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let id = self.register(&el);
                let text = el.text_content().unwrap_or_default();
                self.engine.watch_title(id, &text);
                self.observed.push(id);
            }
        }

        self.engine.boot();
    }

    /// An in-page anchor was clicked; sample geometry now and queue the
    /// scroll request.
    pub fn push_anchor_click(&mut self, selector: &str) {
        let Some(target) = self.query(selector) else {
            return;
        };
        let target_top = target.get_bounding_client_rect().top() as f32;
        let page_y = self.window.page_y_offset().unwrap_or(0.0) as f32;
        let nav_height = self
            .engine
            .handles()
            .navbar
            .and_then(|id| self.element(id))
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| el.offset_height() as f32)
            .unwrap_or(0.0);
        self.queue.push(HostEvent::AnchorClick {
            target_top,
            page_y,
            nav_height,
        });
    }

    /// One animation frame: drain queued events, advance the engine, apply
    /// the resulting DOM commands.
    pub fn frame(&mut self, now_ms: f64) {
        let dt_ms = match self.last_frame_ms {
            Some(prev) => (now_ms - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        self.engine.pump(&mut self.queue);
        self.engine.tick(dt_ms);
        for command in self.engine.drain_commands() {
            self.apply(command);
        }
    }

    fn apply(&self, command: DomCommand) {
        match command {
            DomCommand::SetText { id, text } => {
                if let Some(el) = self.element(id) {
                    el.set_text_content(Some(&text));
                }
            }
            DomCommand::AddClass { id, class } => {
                if let Some(el) = self.element(id) {
                    let _ = el.class_list().add_1(class);
                }
            }
            DomCommand::RemoveClass { id, class } => {
                if let Some(el) = self.element(id) {
                    let _ = el.class_list().remove_1(class);
                }
            }
            DomCommand::SetOpacity { id, value } => {
                self.set_style(id, "opacity", &value.to_string());
            }
            DomCommand::SetStyle {
                id,
                property,
                value,
            } => {
                self.set_style(id, property, &value);
            }
            DomCommand::SetTitle { text } => {
                self.document.set_title(&text);
            }
            DomCommand::ScrollTo { y } => {
                let options = ScrollToOptions::new();
                options.set_top(y as f64);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            DomCommand::ClearInputs { form } => {
                if let Some(el) = self.element(form) {
                    if let Ok(fields) = el.query_selector_all("input, textarea") {
                        for i in 0..fields.length() {
                            let Some(node) = fields.item(i) else { continue };
                            if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                                input.set_value("");
                            } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
                                area.set_value("");
                            }
                        }
                    }
                }
            }
            DomCommand::Unobserve { id } => {
                if let (Some(observer), Some(el)) = (self.observer.as_ref(), self.element(id)) {
                    observer.unobserve(el);
                }
            }
            DomCommand::SetBodyOverflow { visible } => {
                if let Some(body) = self.document.body() {
                    let _ = body
                        .style()
                        .set_property("overflow", if visible { "visible" } else { "hidden" });
                }
            }
            DomCommand::SetTranslate { id, x, y } => {
                self.set_style(id, "transform", &format!("translate({x}px, {y}px)"));
            }
        }
    }

    fn set_style(&self, id: ElementId, property: &str, value: &str) {
        if let Some(el) = self.element(id) {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property(property, value);
            }
        }
    }
}
