// Host-side tests for the tilt engine: rotation targets, smoothing, release
// glides, and input arbitration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use geometry::normalize_in_box;
use glam::Vec2;
use tilt::*;

fn pos_at(x: f32, y: f32, w: f32, h: f32) -> geometry::NormalizedPosition {
    normalize_in_box(Vec2::new(x, y), Vec2::new(w, h))
}

#[test]
fn top_left_corner_scenario() {
    // 300x400 box, maxima 14: the documented corner case
    let cfg = TiltConfig::default();
    let pos = pos_at(0.0, 0.0, 300.0, 400.0);
    assert_eq!(pos.centered_x, -50.0);
    assert_eq!(pos.centered_y, -50.0);
    let r = rotation_target(&pos, &cfg);
    assert!((r.x - -14.0).abs() < 1e-4);
    assert!((r.y - 14.0).abs() < 1e-4);
}

#[test]
fn rotation_saturates_at_configured_maxima() {
    let cfg = TiltConfig::default();
    for ix in 0..=10 {
        for iy in 0..=10 {
            let pos = pos_at(ix as f32 * 30.0, iy as f32 * 40.0, 300.0, 400.0);
            let r = rotation_target(&pos, &cfg);
            assert!(r.x.abs() <= cfg.max_tilt_x + 1e-4, "rotate_x {} out of range", r.x);
            assert!(r.y.abs() <= cfg.max_tilt_y + 1e-4, "rotate_y {} out of range", r.y);
            assert!(r.z.abs() <= cfg.max_tilt_z + 1e-4, "rotate_z {} out of range", r.z);
        }
    }
}

#[test]
fn spin_vanishes_at_dead_center() {
    for max_z in [0.0, 8.0, 45.0, 180.0] {
        let cfg = TiltConfig {
            max_tilt_z: max_z,
            ..TiltConfig::default()
        };
        let r = rotation_target(&pos_at(150.0, 200.0, 300.0, 400.0), &cfg);
        assert_eq!(r.z, 0.0);
    }
}

#[test]
fn glow_tracks_pointer_and_band() {
    let corner = glow_vars(&pos_at(0.0, 0.0, 300.0, 400.0));
    assert_eq!(corner.pointer_x_pct, 0.0);
    assert_eq!(corner.background_x_pct, 35.0);
    assert_eq!(corner.background_y_pct, 35.0);
    assert_eq!(corner.from_top, 0.0);
    assert_eq!(corner.from_left, 0.0);
    // corner distance saturates the scalar
    assert_eq!(corner.from_center, 1.0);

    let center = glow_vars(&pos_at(150.0, 200.0, 300.0, 400.0));
    assert_eq!(center.background_x_pct, 50.0);
    assert_eq!(center.from_center, 0.0);
}

// Engine whose bottom-left corner maps to the target {10, 10, 10}:
// centered (-50, 50) gives x = 10, y = 10, and the 135-degree polar angle
// at full radial distance gives z = (135/180) * (40/3) = 10.
fn engine_with_ten_target() -> TiltEngine {
    let cfg = TiltConfig {
        max_tilt_x: 10.0,
        max_tilt_y: 10.0,
        max_tilt_z: 40.0 / 3.0,
        ..TiltConfig::default()
    };
    let mut eng = TiltEngine::new(cfg);
    eng.set_box(Vec2::new(100.0, 100.0));
    eng.pointer_enter();
    let glow = eng.pointer_move(Vec2::new(0.0, 100.0));
    assert!(glow.is_some());
    eng
}

#[test]
fn smoothing_converges_within_sixty_frames() {
    let mut eng = engine_with_ten_target();
    let target = eng.target();
    assert!((target.x - 10.0).abs() < 1e-3);
    assert!((target.y - 10.0).abs() < 1e-3);
    assert!((target.z - 10.0).abs() < 1e-3);

    let mut frames = 0;
    loop {
        let (current, done) = eng.step_smoothing().expect("engine is attached");
        frames += 1;
        // monotone approach, never past the target
        assert!(current.x <= target.x + 1e-5);
        assert!(current.y <= target.y + 1e-5);
        assert!(current.z <= target.z + 1e-5);
        if done {
            break;
        }
        assert!(frames < 60, "smoothing failed to converge");
    }
    assert!(frames <= 60);
    // exact snap on termination
    assert_eq!(eng.current(), target);
    assert!(!eng.needs_smoothing());
}

#[test]
fn finished_smoothing_is_a_stable_no_op() {
    let mut eng = engine_with_ten_target();
    while let Some((_, done)) = eng.step_smoothing() {
        if done {
            break;
        }
    }
    let settled = eng.current();
    let (again, done) = eng.step_smoothing().expect("engine is attached");
    assert!(done);
    assert_eq!(again, settled);
}

#[test]
fn reduced_motion_pins_rotation_but_not_glow() {
    let mut eng = TiltEngine::new(TiltConfig::default());
    eng.set_box(Vec2::new(300.0, 400.0));
    eng.set_reduce_motion(true);
    eng.pointer_enter();
    let glow = eng.pointer_move(Vec2::new(0.0, 0.0)).expect("glow still updates");
    assert_eq!(eng.target(), Rotation::ZERO);
    assert_eq!(glow.pointer_x_pct, 0.0);
    assert_eq!(glow.from_center, 1.0);
    assert_eq!(glow.background_x_pct, 35.0);
}

#[test]
fn release_glides_back_to_rest() {
    let mut eng = TiltEngine::new(TiltConfig::default());
    eng.set_box(Vec2::new(300.0, 400.0));
    eng.pointer_enter();
    // right edge, vertical center
    eng.pointer_move(Vec2::new(300.0, 200.0));
    assert!(eng.target().y < 0.0);

    eng.pointer_leave(1000.0, 600.0);
    assert_eq!(eng.phase(), TiltPhase::Releasing);

    let first = eng.step_release(1000.0).expect("glide running");
    assert!(!first.done);
    assert!(first.rotation.y < 0.0, "starts from the last pointer position");

    let mid = eng.step_release(1300.0).expect("glide running");
    assert!(!mid.done);
    assert!(mid.rotation.y.abs() < first.rotation.y.abs());

    let last = eng.step_release(1600.0).expect("glide running");
    assert!(last.done);
    assert_eq!(last.rotation, Rotation::ZERO);
    assert_eq!(eng.current(), Rotation::ZERO);
    assert_eq!(eng.phase(), TiltPhase::Idle);

    // the glide cleared itself; no further frames are produced
    assert!(eng.step_release(1700.0).is_none());
}

#[test]
fn pointer_enter_cancels_release() {
    let mut eng = TiltEngine::new(TiltConfig::default());
    eng.set_box(Vec2::new(300.0, 400.0));
    eng.pointer_move(Vec2::new(300.0, 200.0));
    eng.pointer_leave(0.0, 600.0);
    assert_eq!(eng.phase(), TiltPhase::Releasing);

    eng.pointer_enter();
    assert_eq!(eng.phase(), TiltPhase::Hovering);
    assert!(eng.step_release(100.0).is_none());
}

#[test]
fn pointer_move_reclaims_a_releasing_card() {
    let mut eng = TiltEngine::new(TiltConfig::default());
    eng.set_box(Vec2::new(300.0, 400.0));
    eng.pointer_move(Vec2::new(300.0, 200.0));
    eng.pointer_leave(0.0, 600.0);

    assert!(eng.pointer_move(Vec2::new(150.0, 0.0)).is_some());
    assert_eq!(eng.phase(), TiltPhase::Hovering);
    assert!(eng.step_release(100.0).is_none());
}

#[test]
fn detach_stops_everything() {
    let mut eng = engine_with_ten_target();
    eng.pointer_leave(0.0, 600.0);
    eng.detach();

    assert!(eng.is_detached());
    assert_eq!(eng.current(), Rotation::ZERO);
    assert_eq!(eng.target(), Rotation::ZERO);
    // a stale frame callback firing after unmount produces no writes
    assert!(eng.step_smoothing().is_none());
    assert!(eng.step_release(100.0).is_none());
    assert!(eng.pointer_move(Vec2::new(10.0, 10.0)).is_none());
    assert!(eng.orientation_input(30.0, 10.0, 5.0).is_none());
    assert!(!eng.needs_smoothing());
}

#[test]
fn orientation_only_drives_an_idle_card() {
    let mut eng = TiltEngine::new(TiltConfig::default());
    eng.set_box(Vec2::new(300.0, 400.0));

    assert!(eng.orientation_input(30.0, 10.0, 5.0).is_some());
    assert_eq!(eng.phase(), TiltPhase::Idle);

    eng.pointer_enter();
    assert!(eng.orientation_input(30.0, 10.0, 5.0).is_none());

    eng.pointer_move(Vec2::new(10.0, 10.0));
    eng.pointer_leave(0.0, 600.0);
    assert!(eng.orientation_input(30.0, 10.0, 5.0).is_none());

    // glide finishes; the gyroscope may speak again
    while let Some(frame) = eng.step_release(10_000.0) {
        if frame.done {
            break;
        }
    }
    assert_eq!(eng.phase(), TiltPhase::Idle);
    assert!(eng.orientation_input(30.0, 10.0, 5.0).is_some());
}

#[test]
fn orientation_mapping_uses_rest_pitch() {
    let size = Vec2::new(300.0, 400.0);
    // at rest pitch and no roll the synthetic pointer sits at (h/2, w/2)
    let rest = orientation_offset(20.0, 0.0, size, 5.0);
    assert_eq!(rest, Vec2::new(200.0, 150.0));

    let rolled = orientation_offset(20.0, 10.0, size, 5.0);
    assert_eq!(rolled, Vec2::new(250.0, 150.0));

    let pitched = orientation_offset(30.0, 0.0, size, 5.0);
    assert_eq!(pitched, Vec2::new(200.0, 200.0));
}

#[test]
fn narrow_viewports_scale_the_maxima() {
    let cfg = TiltConfig::default().scaled_for_viewport(400.0);
    assert!((cfg.max_tilt_x - 14.0 * 0.8).abs() < 1e-5);
    assert!((cfg.max_tilt_y - 14.0 * 0.8).abs() < 1e-5);
    assert!((cfg.max_tilt_z - 8.0 * 0.8).abs() < 1e-5);

    let wide = TiltConfig::default().scaled_for_viewport(800.0);
    assert_eq!(wide.max_tilt_x, 14.0);

    let fixed = TiltConfig {
        responsive_scaling: false,
        ..TiltConfig::default()
    }
    .scaled_for_viewport(400.0);
    assert_eq!(fixed.max_tilt_x, 14.0);
}
