use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::SCRAMBLE_SELECTOR;
use crate::core::constants::SCRAMBLE_TICK_MS;
use crate::core::ScrambleEngine;
use crate::dom;

/// Finds `[data-scramble]` elements and decrypts their text in place. Under
/// reduced motion the text is left as authored.
pub fn wire_scrambles(document: &web::Document, reduce_motion: bool) {
    let targets = dom::query_all(document, SCRAMBLE_SELECTOR);
    if targets.is_empty() {
        return;
    }
    log::info!("[scramble] wiring {} element(s)", targets.len());
    if reduce_motion {
        return;
    }
    for el in targets {
        start_reveal(el);
    }
}

fn start_reveal(el: web::HtmlElement) {
    let text = el.text_content().unwrap_or_default();
    if text.is_empty() {
        return;
    }
    let engine = Rc::new(RefCell::new(ScrambleEngine::new(&text)));
    el.set_text_content(Some(""));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let last = Rc::new(RefCell::new(Instant::now()));
    let pending = Rc::new(RefCell::new(0.0_f64)); // ms owed to the reveal cadence
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !el.is_connected() {
            return;
        }
        let now = Instant::now();
        let dt_ms = (now - *last.borrow()).as_secs_f64() * 1000.0;
        *last.borrow_mut() = now;
        let mut owed = pending.borrow_mut();
        *owed += dt_ms;

        let mut eng = engine.borrow_mut();
        let mut rng = rand::thread_rng();
        let mut display = None;
        while *owed >= SCRAMBLE_TICK_MS && !eng.is_done() {
            *owed -= SCRAMBLE_TICK_MS;
            display = Some(eng.tick(&mut rng));
        }
        if let Some(s) = display {
            el.set_text_content(Some(&s));
        }
        if eng.is_done() {
            return;
        }
        if let Some(w) = web::window() {
            let cb = tick_clone.borrow();
            if let Some(c) = cb.as_ref() {
                _ = w.request_animation_frame(c.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let cb = tick.borrow();
        if let Some(c) = cb.as_ref() {
            _ = w.request_animation_frame(c.as_ref().unchecked_ref());
        }
    }
}
