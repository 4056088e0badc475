//! WASM entry point for the Grimdoor promotional site.
//!
//! The page calls `site_init()` (or `site_init_with_config(json)`) once; the
//! bridge binds the DOM, installs listeners and the intersection observer,
//! and pumps the headless engine from a requestAnimationFrame loop. All
//! effects are cosmetic — a missing node or a failed observer degrades to
//! "that effect does not happen", never a broken page.

mod runner;

pub use runner::SiteRunner;

use std::cell::RefCell;
use std::rc::Rc;

use grimdoor_engine::{HostEvent, SiteConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};

/// Boot the site effects with the default tuning.
#[wasm_bindgen]
pub fn site_init() -> Result<(), JsValue> {
    init_with(SiteConfig::default())
}

/// Boot the site effects with a JSON config overriding any subset of the
/// tuning constants.
#[wasm_bindgen]
pub fn site_init_with_config(json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    init_with(config)
}

fn init_with(config: SiteConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now().to_bits())
        .unwrap_or(0x9E37_79B9_7F4A_7C15);

    let mut runner = SiteRunner::new(config, seed)?;
    runner.bind_page();
    let runner = Rc::new(RefCell::new(runner));

    install_observer(&runner);
    install_listeners(&runner)?;
    start_frame_loop(&runner)?;

    log::info!("grimdoor-web: initialized");
    Ok(())
}

/// Build the intersection observer and point it at every watched element.
/// When the browser has no observer support, reveals simply never fire.
fn install_observer(runner: &Rc<RefCell<SiteRunner>>) {
    let cb_runner = Rc::clone(runner);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut r = cb_runner.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if let Some(id) = r.element_id_of(&entry.target()) {
                    r.push(HostEvent::Intersection {
                        id,
                        entering: entry.is_intersecting(),
                    });
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    {
        let r = runner.borrow();
        init.set_root_margin(&r.config().reveal_root_margin);
        init.set_threshold(&JsValue::from_f64(r.config().reveal_threshold as f64));
    }

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        log::warn!("IntersectionObserver unavailable; reveal animations disabled");
        return;
    };
    callback.forget();

    let mut r = runner.borrow_mut();
    for id in r.observed().to_vec() {
        if let Some(el) = r.element(id) {
            observer.observe(el);
        }
    }
    r.set_observer(observer);
}

fn install_listeners(runner: &Rc<RefCell<SiteRunner>>) -> Result<(), JsValue> {
    let window = runner.borrow().window().clone();
    let document = runner.borrow().document().clone();

    // Page load. If the wasm module initialized after the load event
    // already fired, start the loader countdown right away.
    if document.ready_state() == "complete" {
        runner.borrow_mut().push(HostEvent::Loaded);
    } else {
        let r = Rc::clone(runner);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            r.borrow_mut().push(HostEvent::Loaded);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Scroll position for the navbar styling.
    {
        let r = Rc::clone(runner);
        let w = window.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| {
            let y = w.scroll_y().unwrap_or(0.0) as f32;
            r.borrow_mut().push(HostEvent::Scroll { y });
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Pointer position for the parallax drift.
    {
        let r = Rc::clone(runner);
        let w = window.clone();
        let cb = Closure::wrap(Box::new(move |event: MouseEvent| {
            let viewport_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let viewport_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            r.borrow_mut().push(HostEvent::PointerMove {
                x: event.page_x() as f32,
                y: event.page_y() as f32,
                viewport_w: viewport_w as f32,
                viewport_h: viewport_h as f32,
            });
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Tab visibility for the title swap.
    {
        let r = Rc::clone(runner);
        let d = document.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| {
            let hidden = d.hidden();
            r.borrow_mut().push(HostEvent::VisibilityChange { hidden });
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Mobile menu button.
    let toggle = {
        let r = runner.borrow();
        r.handles().menu_toggle.and_then(|id| r.element(id).cloned())
    };
    if let Some(toggle) = toggle {
        let r = Rc::clone(runner);
        let cb = Closure::wrap(Box::new(move |_: Event| {
            r.borrow_mut().push(HostEvent::MenuToggle);
        }) as Box<dyn FnMut(_)>);
        toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // In-page anchors: hijack the jump into a smooth scroll. Anchors inside
    // the nav menu also close it.
    if let Ok(anchors) = document.query_selector_all("a[href^='#']") {
        for i in 0..anchors.length() {
            let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(href) = anchor.get_attribute("href") else {
                continue;
            };
            if href.len() <= 1 {
                continue;
            }
            let in_nav = anchor.closest(".nav-links").ok().flatten().is_some();
            let r = Rc::clone(runner);
            let cb = Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                let mut runner = r.borrow_mut();
                if in_nav {
                    runner.push(HostEvent::NavLinkClick);
                }
                runner.push_anchor_click(&href);
            }) as Box<dyn FnMut(_)>);
            anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }

    // Contact form: swallow the submit and run the terminal sequence.
    let form = {
        let r = runner.borrow();
        r.handles().contact_form.and_then(|id| r.element(id).cloned())
    };
    if let Some(form) = form {
        let r = Rc::clone(runner);
        let form_nodes = form.clone();
        let cb = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let button_label = form_nodes
                .query_selector("button")
                .ok()
                .flatten()
                .and_then(|b| b.text_content())
                .unwrap_or_default();
            r.borrow_mut().push(HostEvent::Submit { button_label });
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

/// Self-rescheduling requestAnimationFrame pump. The closure holds a clone
/// of its own handle, which keeps the loop alive for the page's lifetime.
fn start_frame_loop(runner: &Rc<RefCell<SiteRunner>>) -> Result<(), JsValue> {
    let window = runner.borrow().window().clone();

    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&handle);
    let r = Rc::clone(runner);
    let w = window.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        r.borrow_mut().frame(now_ms);
        if let Some(cb) = inner.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = handle.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
