// Host-side tests for the pure geometry mapper.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec2;

#[test]
fn normalize_top_left_corner() {
    let pos = normalize_in_box(Vec2::new(0.0, 0.0), Vec2::new(300.0, 400.0));
    assert_eq!(pos.percent_x, 0.0);
    assert_eq!(pos.percent_y, 0.0);
    assert_eq!(pos.centered_x, -50.0);
    assert_eq!(pos.centered_y, -50.0);
}

#[test]
fn normalize_center() {
    let pos = normalize_in_box(Vec2::new(150.0, 200.0), Vec2::new(300.0, 400.0));
    assert_eq!(pos.percent_x, 50.0);
    assert_eq!(pos.percent_y, 50.0);
    assert_eq!(pos.centered_x, 0.0);
    assert_eq!(pos.centered_y, 0.0);
}

#[test]
fn normalize_clamps_outside_events() {
    // fast pointer exits can deliver coordinates outside the box
    let pos = normalize_in_box(Vec2::new(-25.0, 900.0), Vec2::new(300.0, 400.0));
    assert_eq!(pos.percent_x, 0.0);
    assert_eq!(pos.percent_y, 100.0);
    assert_eq!(pos.centered_x, -50.0);
    assert_eq!(pos.centered_y, 50.0);
}

#[test]
fn normalize_is_idempotent() {
    let a = normalize_in_box(Vec2::new(42.0, 17.5), Vec2::new(300.0, 400.0));
    let b = normalize_in_box(Vec2::new(42.0, 17.5), Vec2::new(300.0, 400.0));
    assert_eq!(a, b);
}

#[test]
fn degenerate_box_maps_to_center() {
    let pos = normalize_in_box(Vec2::new(10.0, 10.0), Vec2::new(0.0, 400.0));
    assert_eq!(pos.percent_x, 50.0);
    assert_eq!(pos.percent_y, 50.0);
    assert_eq!(pos.centered_x, 0.0);
    assert_eq!(pos.centered_y, 0.0);
}

#[test]
fn remap_endpoints_and_midpoint() {
    assert_eq!(remap(0.0, 0.0, 100.0, 35.0, 65.0), 35.0);
    assert_eq!(remap(100.0, 0.0, 100.0, 35.0, 65.0), 65.0);
    assert_eq!(remap(50.0, 0.0, 100.0, 35.0, 65.0), 50.0);
}

#[test]
fn round3_truncates_style_noise() {
    assert_eq!(round3(1.23456), 1.235);
    assert_eq!(round3(-0.0004), -0.0);
    assert_eq!(round3(14.0), 14.0);
}

#[test]
fn ease_in_out_cubic_shape() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    // slow start, slow end
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
    assert!(ease_in_out_cubic(0.1) < 0.1);
    assert!(ease_in_out_cubic(0.9) > 0.9);
}

#[test]
fn box_center_is_half_size() {
    assert_eq!(box_center(Vec2::new(300.0, 400.0)), Vec2::new(150.0, 200.0));
}
