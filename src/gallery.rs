use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ATTR_AUTOPLAY, ATTR_PAUSE_ON_HOVER, GALLERY_SELECTOR};
use crate::core::geometry::round3;
use crate::core::{GalleryEngine, GalleryLayout};
use crate::dom;

// Last drag sample; velocity feeds the fling on release.
struct DragSample {
    last_x: f32,
    last_ms: f64,
    velocity: f32, // px/s, signed
}

pub fn wire_galleries(document: &web::Document) {
    let tracks = dom::query_all(document, GALLERY_SELECTOR);
    if tracks.is_empty() {
        return;
    }
    log::info!("[gallery] wiring {} ring(s)", tracks.len());
    for track in tracks {
        wire_gallery(track);
    }
}

/// One rolling gallery: the annotated element is the rotating track and its
/// children are the faces, laid out once around the cylinder.
fn wire_gallery(track: web::HtmlElement) {
    let faces = track.children();
    let face_count = faces.length() as usize;
    if face_count == 0 {
        return;
    }
    let autoplay = dom::data_flag(&track, ATTR_AUTOPLAY);
    let pause_on_hover = dom::data_flag(&track, ATTR_PAUSE_ON_HOVER);
    let layout = GalleryLayout::new(face_count, dom::viewport_width());

    _ = track
        .style()
        .set_property("width", &format!("{}px", layout.cylinder_width));
    for i in 0..face_count {
        if let Some(face) = faces.item(i as u32) {
            if let Ok(el) = face.dyn_into::<web::HtmlElement>() {
                let style = el.style();
                _ = style.set_property("width", &format!("{}px", layout.face_width));
                _ = style.set_property(
                    "transform",
                    &format!(
                        "rotateY({}deg) translateZ({}px)",
                        round3(layout.face_angle(i)),
                        round3(layout.radius)
                    ),
                );
            }
        }
    }

    let engine = Rc::new(RefCell::new(GalleryEngine::new(
        layout,
        autoplay,
        pause_on_hover,
    )));
    apply_rotation(&track, engine.borrow().rotation());

    wire_drag(&track, &engine);
    wire_hover(&track, &engine);
    if autoplay {
        start_spin(track, engine);
    }
}

fn wire_drag(track: &web::HtmlElement, engine: &Rc<RefCell<GalleryEngine>>) {
    let epoch = Instant::now();
    let sample = Rc::new(RefCell::new(DragSample {
        last_x: 0.0,
        last_ms: 0.0,
        velocity: 0.0,
    }));

    {
        let engine = engine.clone();
        let sample = sample.clone();
        let track_el = track.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            engine.borrow_mut().begin_drag();
            let mut s = sample.borrow_mut();
            s.last_x = ev.client_x() as f32;
            s.last_ms = epoch.elapsed().as_secs_f64() * 1000.0;
            s.velocity = 0.0;
            _ = track_el.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = track.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = engine.clone();
        let sample = sample.clone();
        let track_el = track.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut eng = engine.borrow_mut();
            if !eng.is_dragging() {
                return;
            }
            let now = epoch.elapsed().as_secs_f64() * 1000.0;
            let x = ev.client_x() as f32;
            let mut s = sample.borrow_mut();
            let dx = x - s.last_x;
            let dt = now - s.last_ms;
            if dt > 1.0 {
                s.velocity = dx / dt as f32 * 1000.0;
            }
            s.last_x = x;
            s.last_ms = now;
            eng.drag_by(dx);
            apply_rotation(&track_el, eng.rotation());
        }) as Box<dyn FnMut(_)>);
        _ = track.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for event in ["pointerup", "pointercancel"] {
        let engine = engine.clone();
        let sample = sample.clone();
        let track_el = track.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut eng = engine.borrow_mut();
            if !eng.is_dragging() {
                return;
            }
            eng.end_drag(sample.borrow().velocity);
            apply_rotation(&track_el, eng.rotation());
        }) as Box<dyn FnMut(_)>);
        _ = track.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_hover(track: &web::HtmlElement, engine: &Rc<RefCell<GalleryEngine>>) {
    for (event, hovered) in [("pointerenter", true), ("pointerleave", false)] {
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            engine.borrow_mut().set_hovered(hovered);
        }) as Box<dyn FnMut(_)>);
        _ = track.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Autoplay loop driven by requestAnimationFrame; dies with the element.
fn start_spin(track: web::HtmlElement, engine: Rc<RefCell<GalleryEngine>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let last = Rc::new(RefCell::new(Instant::now()));
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !track.is_connected() {
            return;
        }
        let now = Instant::now();
        let dt = (now - *last.borrow()).as_secs_f32();
        *last.borrow_mut() = now;
        if engine.borrow_mut().tick(dt) {
            apply_rotation(&track, engine.borrow().rotation());
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

fn apply_rotation(track: &web::HtmlElement, deg: f32) {
    _ = track.style().set_property(
        "transform",
        &format!("rotate3d(0, 1, 0, {}deg)", round3(deg)),
    );
}
