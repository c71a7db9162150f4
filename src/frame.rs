use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::geometry::round3;
use crate::core::{GlowVars, Rotation, TiltEngine};
use crate::dom;

type RafHandle = Rc<RefCell<Option<i32>>>;
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives one tilt card.
///
/// Owns the engine cell, the wrapper element, and one animation-frame handle
/// per loop kind (smoothing, release). At most one loop of each kind can be
/// live: re-triggering the smoothing loop reuses the scheduled frame, and a
/// release start cancels both kinds before scheduling. Every frame guards
/// against a detached element and bails without writing.
pub struct TiltAnimator {
    engine: Rc<RefCell<TiltEngine>>,
    wrap: web::HtmlElement,
    orientation_sensitivity: f32,
    epoch: Instant,
    smoothing_raf: RafHandle,
    release_raf: RafHandle,
    smoothing_cb: FrameClosure,
    release_cb: FrameClosure,
}

impl TiltAnimator {
    pub fn new(
        engine: Rc<RefCell<TiltEngine>>,
        wrap: web::HtmlElement,
        orientation_sensitivity: f32,
    ) -> Self {
        let epoch = Instant::now();
        let smoothing_raf: RafHandle = Rc::new(RefCell::new(None));
        let release_raf: RafHandle = Rc::new(RefCell::new(None));
        let smoothing_cb: FrameClosure = Rc::new(RefCell::new(None));
        let release_cb: FrameClosure = Rc::new(RefCell::new(None));

        {
            let engine = engine.clone();
            let wrap = wrap.clone();
            let raf = smoothing_raf.clone();
            let cb = smoothing_cb.clone();
            *smoothing_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                *raf.borrow_mut() = None;
                if !wrap.is_connected() {
                    engine.borrow_mut().detach();
                    return;
                }
                let step = engine.borrow_mut().step_smoothing();
                if let Some((rotation, done)) = step {
                    apply_rotation(&wrap, rotation);
                    if !done {
                        schedule(&raf, &cb);
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        {
            let engine = engine.clone();
            let wrap = wrap.clone();
            let raf = release_raf.clone();
            let cb = release_cb.clone();
            *release_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                *raf.borrow_mut() = None;
                if !wrap.is_connected() {
                    engine.borrow_mut().detach();
                    return;
                }
                let now = epoch.elapsed().as_secs_f64() * 1000.0;
                let frame = engine.borrow_mut().step_release(now);
                if let Some(f) = frame {
                    apply_glow(&wrap, &f.glow);
                    apply_rotation(&wrap, f.rotation);
                    if !f.done {
                        schedule(&raf, &cb);
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        TiltAnimator {
            engine,
            wrap,
            orientation_sensitivity,
            epoch,
            smoothing_raf,
            release_raf,
            smoothing_cb,
            release_cb,
        }
    }

    pub fn wrap(&self) -> &web::HtmlElement {
        &self.wrap
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Pointer entered: the release glide (if any) is cancelled and live
    /// updates take over.
    pub fn pointer_enter(&self) {
        cancel(&self.release_raf);
        self.engine.borrow_mut().pointer_enter();
    }

    /// Live pointer/touch sample in client coordinates.
    pub fn pointer_move(&self, client_x: f64, client_y: f64) {
        if self.detach_if_disconnected() {
            return;
        }
        let (offset, size) = dom::client_offset(&self.wrap, client_x, client_y);
        let glow = {
            let mut eng = self.engine.borrow_mut();
            eng.set_box(size);
            eng.pointer_move(offset)
        };
        if let Some(g) = glow {
            apply_glow(&self.wrap, &g);
            self.ensure_smoothing();
        }
    }

    /// Gyroscope sample; dropped by the engine unless the card is idle.
    pub fn orientation(&self, beta: f32, gamma: f32) {
        if self.detach_if_disconnected() {
            return;
        }
        let size = dom::element_box(&self.wrap);
        let glow = {
            let mut eng = self.engine.borrow_mut();
            eng.set_box(size);
            eng.orientation_input(beta, gamma, self.orientation_sensitivity)
        };
        if let Some(g) = glow {
            apply_glow(&self.wrap, &g);
            self.ensure_smoothing();
        }
    }

    /// Pointer left: glide home from the last known point.
    pub fn start_release(&self, duration_ms: f64) {
        cancel(&self.smoothing_raf);
        cancel(&self.release_raf);
        if self.detach_if_disconnected() {
            return;
        }
        {
            let mut eng = self.engine.borrow_mut();
            eng.set_box(dom::element_box(&self.wrap));
            eng.pointer_leave(self.now_ms(), duration_ms);
        }
        schedule(&self.release_raf, &self.release_cb);
    }

    /// Glide home from an explicit point (settle-in animation).
    pub fn start_glide(&self, from: Vec2, duration_ms: f64) {
        cancel(&self.smoothing_raf);
        cancel(&self.release_raf);
        if self.detach_if_disconnected() {
            return;
        }
        {
            let mut eng = self.engine.borrow_mut();
            eng.set_box(dom::element_box(&self.wrap));
            eng.begin_release(from, self.now_ms(), duration_ms);
        }
        schedule(&self.release_raf, &self.release_cb);
    }

    pub fn cancel_all(&self) {
        cancel(&self.smoothing_raf);
        cancel(&self.release_raf);
    }

    // The smoothing loop reuses its scheduled frame when already live.
    fn ensure_smoothing(&self) {
        if self.engine.borrow().needs_smoothing() {
            schedule(&self.smoothing_raf, &self.smoothing_cb);
        }
    }

    fn detach_if_disconnected(&self) -> bool {
        if self.wrap.is_connected() {
            return false;
        }
        self.engine.borrow_mut().detach();
        self.cancel_all();
        true
    }
}

fn schedule(raf: &RafHandle, cb: &FrameClosure) {
    if raf.borrow().is_some() {
        return;
    }
    if let Some(w) = web::window() {
        let cb_ref = cb.borrow();
        if let Some(c) = cb_ref.as_ref() {
            if let Ok(id) = w.request_animation_frame(c.as_ref().unchecked_ref()) {
                *raf.borrow_mut() = Some(id);
            }
        }
    }
}

fn cancel(raf: &RafHandle) {
    if let Some(id) = raf.borrow_mut().take() {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn apply_rotation(wrap: &web::HtmlElement, r: Rotation) {
    dom::set_css_var(wrap, VAR_ROTATE_X, &format!("{}deg", round3(r.x)));
    dom::set_css_var(wrap, VAR_ROTATE_Y, &format!("{}deg", round3(r.y)));
    dom::set_css_var(wrap, VAR_ROTATE_Z, &format!("{}deg", round3(r.z)));
}

fn apply_glow(wrap: &web::HtmlElement, g: &GlowVars) {
    dom::set_css_var(wrap, VAR_POINTER_X, &format!("{}%", round3(g.pointer_x_pct)));
    dom::set_css_var(wrap, VAR_POINTER_Y, &format!("{}%", round3(g.pointer_y_pct)));
    dom::set_css_var(wrap, VAR_BACKGROUND_X, &format!("{}%", round3(g.background_x_pct)));
    dom::set_css_var(wrap, VAR_BACKGROUND_Y, &format!("{}%", round3(g.background_y_pct)));
    dom::set_css_var(
        wrap,
        VAR_POINTER_FROM_CENTER,
        &round3(g.from_center).to_string(),
    );
    dom::set_css_var(wrap, VAR_POINTER_FROM_TOP, &round3(g.from_top).to_string());
    dom::set_css_var(wrap, VAR_POINTER_FROM_LEFT, &round3(g.from_left).to_string());
}
