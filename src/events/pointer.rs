use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::ACTIVE_CLASS;
use crate::core::constants::{POINTER_RELEASE_MS, TOUCH_RELEASE_MS};
use crate::dom;
use crate::frame::TiltAnimator;

/// Wires pointer and touch handlers for one card. Touch listeners are passive
/// so page scrolling stays responsive; enter/leave toggle the `active` class
/// the stylesheet keys its glow on.
pub fn wire_card(animator: &Rc<TiltAnimator>) {
    wire_pointerenter(animator);
    wire_pointermove(animator);
    wire_pointerleave(animator);
    wire_touch(animator);
}

fn wire_pointerenter(animator: &Rc<TiltAnimator>) {
    let a = animator.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        a.pointer_enter();
        dom::add_class(a.wrap(), ACTIVE_CLASS);
    }) as Box<dyn FnMut(_)>);
    _ = animator
        .wrap()
        .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(animator: &Rc<TiltAnimator>) {
    let a = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        a.pointer_move(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    _ = animator
        .wrap()
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(animator: &Rc<TiltAnimator>) {
    let a = animator.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        a.start_release(POINTER_RELEASE_MS);
        dom::remove_class(a.wrap(), ACTIVE_CLASS);
    }) as Box<dyn FnMut(_)>);
    _ = animator
        .wrap()
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(animator: &Rc<TiltAnimator>) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);

    {
        let a = animator.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            a.pointer_enter();
            dom::add_class(a.wrap(), ACTIVE_CLASS);
        }) as Box<dyn FnMut(_)>);
        _ = animator
            .wrap()
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        closure.forget();
    }

    {
        let a = animator.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().item(0) {
                a.pointer_move(t.client_x() as f64, t.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        _ = animator
            .wrap()
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        closure.forget();
    }

    for event in ["touchend", "touchcancel"] {
        let a = animator.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            a.start_release(TOUCH_RELEASE_MS);
            dom::remove_class(a.wrap(), ACTIVE_CLASS);
        }) as Box<dyn FnMut(_)>);
        _ = animator
            .wrap()
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        closure.forget();
    }
}
