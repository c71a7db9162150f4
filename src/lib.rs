#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod gallery;
mod scramble;

use crate::constants::*;
use crate::core::constants::{
    INTRO_GLIDE_MS, INTRO_OFFSET_RIGHT_PX, INTRO_OFFSET_TOP_PX, ORIENTATION_SENSITIVITY,
};
use crate::core::{TiltConfig, TiltEngine};
use crate::frame::TiltAnimator;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduce_motion = dom::prefers_reduced_motion();
    let viewport_width = dom::viewport_width();

    let cards = dom::query_all(&document, TILT_CARD_SELECTOR);
    log::info!(
        "[tilt] wiring {} card(s), reduce_motion={}",
        cards.len(),
        reduce_motion
    );
    for wrap in cards {
        wire_card(wrap, viewport_width, reduce_motion);
    }

    gallery::wire_galleries(&document);
    scramble::wire_scrambles(&document, reduce_motion);
    Ok(())
}

fn wire_card(wrap: web::HtmlElement, viewport_width: f32, reduce_motion: bool) {
    let cfg = card_config(&wrap).scaled_for_viewport(viewport_width);
    let mut engine = TiltEngine::new(cfg);
    engine.set_reduce_motion(reduce_motion);
    engine.set_box(dom::element_box(&wrap));
    let engine = Rc::new(RefCell::new(engine));

    let sensitivity =
        dom::data_f32(&wrap, ATTR_TILT_SENSITIVITY).unwrap_or(ORIENTATION_SENSITIVITY);
    let animator = Rc::new(TiltAnimator::new(engine, wrap.clone(), sensitivity));
    events::pointer::wire_card(&animator);
    if dom::data_flag(&wrap, ATTR_MOBILE_TILT) {
        events::orientation::wire(&animator);
    }

    // settle-in: the simulated pointer parks near the top-right corner and
    // glides home; under reduced motion only the glow variables move
    let size = dom::element_box(&wrap);
    let from = Vec2::new(size.x - INTRO_OFFSET_RIGHT_PX, INTRO_OFFSET_TOP_PX);
    animator.start_glide(from, INTRO_GLIDE_MS);
}

fn card_config(wrap: &web::HtmlElement) -> TiltConfig {
    let d = TiltConfig::default();
    TiltConfig {
        max_tilt_x: dom::data_f32(wrap, ATTR_MAX_TILT_X).unwrap_or(d.max_tilt_x),
        max_tilt_y: dom::data_f32(wrap, ATTR_MAX_TILT_Y).unwrap_or(d.max_tilt_y),
        max_tilt_z: dom::data_f32(wrap, ATTR_MAX_TILT_Z).unwrap_or(d.max_tilt_z),
        smoothing_factor: dom::data_f32(wrap, ATTR_SMOOTHING)
            .map(|f| f.clamp(0.01, 0.99))
            .unwrap_or(d.smoothing_factor),
        responsive_scaling: wrap
            .get_attribute(ATTR_RESPONSIVE_TILT)
            .map(|v| v != "false")
            .unwrap_or(true),
    }
}
