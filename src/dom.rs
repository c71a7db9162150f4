use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;

#[inline]
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Rendered box of an element in CSS pixels.
#[inline]
pub fn element_box(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Client coordinates mapped into an element's box.
#[inline]
pub fn client_offset(el: &web::Element, client_x: f64, client_y: f64) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let offset = Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    );
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    (offset, size)
}

#[inline]
pub fn set_css_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

/// `data-*` attribute parsed as a float.
#[inline]
pub fn data_f32(el: &web::Element, attr: &str) -> Option<f32> {
    el.get_attribute(attr).and_then(|v| v.parse::<f32>().ok())
}

/// Attribute-presence flag; an explicit `"false"` opts out.
#[inline]
pub fn data_flag(el: &web::Element, attr: &str) -> bool {
    el.get_attribute(attr).map(|v| v != "false").unwrap_or(false)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}
