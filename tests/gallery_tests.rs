// Host-side tests for the rolling gallery engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gallery {
    include!("../src/core/gallery.rs");
}

use gallery::*;

#[test]
fn wide_layout_geometry() {
    let layout = GalleryLayout::new(10, 1024.0);
    assert_eq!(layout.cylinder_width, 2160.0);
    assert!((layout.face_width - 388.8).abs() < 1e-3);
    assert!((layout.radius - 2160.0 / (2.0 * std::f32::consts::PI)).abs() < 1e-3);
    assert_eq!(layout.face_angle(0), 0.0);
    assert_eq!(layout.face_angle(5), 180.0);
    assert_eq!(layout.face_angle(9), 324.0);
}

#[test]
fn narrow_layout_shrinks_the_cylinder() {
    let layout = GalleryLayout::new(10, 640.0);
    assert_eq!(layout.cylinder_width, 1320.0);
    assert!((layout.face_width - 237.6).abs() < 1e-3);
}

#[test]
fn face_count_is_never_zero() {
    let layout = GalleryLayout::new(0, 1024.0);
    assert_eq!(layout.face_count, 1);
    assert_eq!(layout.face_angle(0), 0.0);
}

#[test]
fn drag_rotates_by_factor() {
    let layout = GalleryLayout::new(8, 1024.0);
    let mut eng = GalleryEngine::new(layout, false, false);

    // a drag that never began does nothing
    eng.drag_by(100.0);
    assert_eq!(eng.rotation(), 0.0);

    eng.begin_drag();
    assert!(eng.is_dragging());
    eng.drag_by(100.0);
    assert!((eng.rotation() - 5.0).abs() < 1e-5);
    eng.drag_by(-40.0);
    assert!((eng.rotation() - 3.0).abs() < 1e-5);

    eng.end_drag(200.0);
    assert!(!eng.is_dragging());
    assert!((eng.rotation() - 13.0).abs() < 1e-4);
}

#[test]
fn autoplay_spins_a_full_turn_in_its_period() {
    let layout = GalleryLayout::new(8, 1024.0);
    let mut eng = GalleryEngine::new(layout, true, false);
    for _ in 0..20 {
        assert!(eng.tick(1.0));
    }
    assert!((eng.rotation() - -360.0).abs() < 1e-3);
    assert!(eng.normalized_rotation().abs() < 1e-3 || (eng.normalized_rotation() - 360.0).abs() < 1e-3);
}

#[test]
fn hover_pauses_only_when_asked() {
    let layout = GalleryLayout::new(8, 1024.0);

    let mut pausing = GalleryEngine::new(layout, true, true);
    pausing.set_hovered(true);
    assert!(!pausing.tick(1.0));
    assert_eq!(pausing.rotation(), 0.0);
    pausing.set_hovered(false);
    assert!(pausing.tick(1.0));

    let mut indifferent = GalleryEngine::new(layout, true, false);
    indifferent.set_hovered(true);
    assert!(indifferent.tick(1.0));
}

#[test]
fn dragging_suspends_autoplay() {
    let layout = GalleryLayout::new(8, 1024.0);
    let mut eng = GalleryEngine::new(layout, true, false);
    eng.begin_drag();
    assert!(!eng.tick(1.0));
    eng.end_drag(0.0);
    assert!(eng.tick(1.0));
}

#[test]
fn disabled_autoplay_never_ticks() {
    let layout = GalleryLayout::new(8, 1024.0);
    let mut eng = GalleryEngine::new(layout, false, false);
    assert!(!eng.tick(1.0));
    assert_eq!(eng.rotation(), 0.0);
}
