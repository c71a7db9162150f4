use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::frame::TiltAnimator;

/// Gyroscope-driven tilt, gated the way mobile platforms require.
///
/// Platforms that expose `DeviceOrientationEvent.requestPermission` (iOS)
/// only grant it from a user gesture, so the request hangs off a click on the
/// card; elsewhere the subscription is immediate. Denied or unsupported is an
/// expected terminal state: the card simply stays pointer-driven.
pub fn wire(animator: &Rc<TiltAnimator>) {
    let ctor = match orientation_ctor() {
        Some(c) => c,
        None => {
            log::info!("[orientation] DeviceOrientationEvent unsupported");
            return;
        }
    };
    match permission_hook(&ctor) {
        Some(hook) => wire_click_activation(animator, ctor, hook),
        None => subscribe(animator.clone()),
    }
}

fn orientation_ctor() -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("DeviceOrientationEvent"))
        .ok()
        .filter(|v| !v.is_undefined())
}

fn permission_hook(ctor: &JsValue) -> Option<js_sys::Function> {
    js_sys::Reflect::get(ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
}

fn wire_click_activation(animator: &Rc<TiltAnimator>, ctor: JsValue, hook: js_sys::Function) {
    let a = animator.clone();
    let activated = Rc::new(Cell::new(false));
    let closure = Closure::wrap(Box::new(move || {
        if activated.get() {
            return;
        }
        activated.set(true);
        let a = a.clone();
        let ctor = ctor.clone();
        let hook = hook.clone();
        let activated = activated.clone();
        spawn_local(async move {
            match request_permission(&ctor, &hook).await {
                Ok(true) => {
                    log::info!("[orientation] permission granted");
                    subscribe(a);
                }
                Ok(false) => {
                    // a later click may ask again
                    log::info!("[orientation] permission denied; card stays pointer-driven");
                    activated.set(false);
                }
                Err(_) => {
                    log::info!("[orientation] permission request rejected");
                    activated.set(false);
                }
            }
        });
    }) as Box<dyn FnMut()>);
    _ = animator
        .wrap()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn request_permission(ctor: &JsValue, hook: &js_sys::Function) -> Result<bool, JsValue> {
    let promise: js_sys::Promise = hook.call0(ctor)?.dyn_into()?;
    let state = JsFuture::from(promise).await?;
    Ok(state.as_string().as_deref() == Some("granted"))
}

fn subscribe(animator: Rc<TiltAnimator>) {
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
            animator.orientation(beta as f32, gamma as f32);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    }
    closure.forget();
    log::info!("[orientation] gyroscope active");
}
