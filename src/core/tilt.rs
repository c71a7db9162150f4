use glam::Vec2;

use super::constants::*;
use super::geometry::{box_center, ease_in_out_cubic, normalize_in_box, remap, NormalizedPosition};

/// Rotation state in degrees, as written to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

/// Immutable per-card tilt configuration, supplied at wiring time.
#[derive(Clone, Copy, Debug)]
pub struct TiltConfig {
    pub max_tilt_x: f32,
    pub max_tilt_y: f32,
    pub max_tilt_z: f32,
    pub smoothing_factor: f32,
    pub responsive_scaling: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        TiltConfig {
            max_tilt_x: MAX_TILT_X_DEG,
            max_tilt_y: MAX_TILT_Y_DEG,
            max_tilt_z: MAX_TILT_Z_DEG,
            smoothing_factor: SMOOTHING_FACTOR,
            responsive_scaling: true,
        }
    }
}

impl TiltConfig {
    /// Gentler maxima on narrow viewports, when enabled.
    pub fn scaled_for_viewport(mut self, viewport_width: f32) -> Self {
        if self.responsive_scaling && viewport_width < NARROW_VIEWPORT_PX {
            self.max_tilt_x *= NARROW_TILT_SCALE;
            self.max_tilt_y *= NARROW_TILT_SCALE;
            self.max_tilt_z *= NARROW_TILT_SCALE;
        }
        self
    }
}

/// Pointer-tracking values written immediately (not smoothed): glow position,
/// background parallax band, and distance-from-center scalars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowVars {
    pub pointer_x_pct: f32,
    pub pointer_y_pct: f32,
    pub background_x_pct: f32,
    pub background_y_pct: f32,
    pub from_center: f32,
    pub from_top: f32,
    pub from_left: f32,
}

pub fn glow_vars(pos: &NormalizedPosition) -> GlowVars {
    GlowVars {
        pointer_x_pct: pos.percent_x,
        pointer_y_pct: pos.percent_y,
        background_x_pct: remap(
            pos.percent_x,
            0.0,
            100.0,
            BACKGROUND_BAND_MIN_PCT,
            BACKGROUND_BAND_MAX_PCT,
        ),
        background_y_pct: remap(
            pos.percent_y,
            0.0,
            100.0,
            BACKGROUND_BAND_MIN_PCT,
            BACKGROUND_BAND_MAX_PCT,
        ),
        from_center: (pos.centered_y.hypot(pos.centered_x) / 50.0).clamp(0.0, 1.0),
        from_top: pos.percent_y / 100.0,
        from_left: pos.percent_x / 100.0,
    }
}

/// Target rotation for a normalized pointer position.
///
/// X follows the vertical offset, Y the (negated) horizontal offset so the
/// card faces the pointer, and Z couples a spin to the polar angle scaled by
/// distance from center, so it vanishes at dead center and saturates at the
/// configured maximum near the edges.
pub fn rotation_target(pos: &NormalizedPosition, cfg: &TiltConfig) -> Rotation {
    let nx = pos.centered_x / 50.0;
    let ny = pos.centered_y / 50.0;
    let radial = nx.hypot(ny).min(1.0);
    let angle_deg = ny.atan2(nx).to_degrees();
    Rotation {
        x: ny * cfg.max_tilt_x,
        y: -nx * cfg.max_tilt_y,
        z: (angle_deg / 180.0) * cfg.max_tilt_z * radial,
    }
}

/// Maps gyroscope readings into the synthetic pointer coordinate space fed to
/// the same pipeline as mouse/touch input.
pub fn orientation_offset(beta: f32, gamma: f32, size: Vec2, sensitivity: f32) -> Vec2 {
    Vec2::new(
        size.y * 0.5 + gamma * sensitivity,
        size.x * 0.5 + (beta - ORIENTATION_BETA_REST_DEG) * sensitivity,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltPhase {
    Idle,
    Hovering,
    Releasing,
}

#[derive(Clone, Copy, Debug)]
struct ReleaseAnim {
    start_ms: f64,
    duration_ms: f64,
    from: Vec2,
}

/// One frame of a running release glide.
#[derive(Clone, Copy, Debug)]
pub struct ReleaseFrame {
    pub glow: GlowVars,
    pub rotation: Rotation,
    pub done: bool,
}

/// Per-card interaction state: target/current rotation, the live phase, and
/// the in-flight release glide if any.
///
/// The engine is presentation-agnostic and clock-free; callers feed it pixel
/// offsets and millisecond timestamps and apply whatever it returns. Exactly
/// one engine owns the rotation state of one element; rotation is advanced by
/// the smoothing step XOR a release glide, never both.
pub struct TiltEngine {
    cfg: TiltConfig,
    size: Vec2,
    reduce_motion: bool,
    phase: TiltPhase,
    target: Rotation,
    current: Rotation,
    last_point: Vec2,
    release: Option<ReleaseAnim>,
    detached: bool,
}

impl TiltEngine {
    pub fn new(cfg: TiltConfig) -> Self {
        TiltEngine {
            cfg,
            size: Vec2::ZERO,
            reduce_motion: false,
            phase: TiltPhase::Idle,
            target: Rotation::ZERO,
            current: Rotation::ZERO,
            last_point: Vec2::ZERO,
            release: None,
            detached: false,
        }
    }

    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    pub fn current(&self) -> Rotation {
        self.current
    }

    pub fn target(&self) -> Rotation {
        self.target
    }

    /// Element box in pixels; refreshed from the layout before each input.
    pub fn set_box(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn set_reduce_motion(&mut self, on: bool) {
        self.reduce_motion = on;
    }

    pub fn pointer_enter(&mut self) {
        if self.detached {
            return;
        }
        self.release = None;
        self.phase = TiltPhase::Hovering;
    }

    /// Live pointer (or touch) input. Sets the rotation target and returns the
    /// glow values to write immediately; the rotation itself reaches the
    /// element through the smoothing loop.
    pub fn pointer_move(&mut self, offset: Vec2) -> Option<GlowVars> {
        if self.detached {
            return None;
        }
        // a move always claims the card for the pointer
        self.release = None;
        self.phase = TiltPhase::Hovering;
        self.last_point = offset;
        let pos = normalize_in_box(offset, self.size);
        self.target = self.dynamic_target(&pos);
        Some(glow_vars(&pos))
    }

    /// Gyroscope input. Pointer wins: samples are dropped unless the card is
    /// idle, so a hover or an in-flight release is never fought over.
    pub fn orientation_input(&mut self, beta: f32, gamma: f32, sensitivity: f32) -> Option<GlowVars> {
        if self.detached || self.phase != TiltPhase::Idle {
            return None;
        }
        let offset = orientation_offset(beta, gamma, self.size, sensitivity);
        self.last_point = offset;
        let pos = normalize_in_box(offset, self.size);
        self.target = self.dynamic_target(&pos);
        Some(glow_vars(&pos))
    }

    pub fn needs_smoothing(&self) -> bool {
        !self.detached && self.current != self.target
    }

    /// One frame of exponential smoothing toward the target. Returns the
    /// rotation to write and whether the loop is finished; once every axis
    /// delta falls under the epsilon the current value snaps to the target
    /// exactly so the loop does not trickle tiny writes forever.
    pub fn step_smoothing(&mut self) -> Option<(Rotation, bool)> {
        if self.detached {
            return None;
        }
        let dx = self.target.x - self.current.x;
        let dy = self.target.y - self.current.y;
        let dz = self.target.z - self.current.z;
        if dx.abs() < SMOOTHING_EPSILON_DEG
            && dy.abs() < SMOOTHING_EPSILON_DEG
            && dz.abs() < SMOOTHING_EPSILON_DEG
        {
            self.current = self.target;
            return Some((self.current, true));
        }
        self.current.x += dx * self.cfg.smoothing_factor;
        self.current.y += dy * self.cfg.smoothing_factor;
        self.current.z += dz * self.cfg.smoothing_factor;
        Some((self.current, false))
    }

    /// Starts a timed glide of the simulated pointer from `from` back to the
    /// element center. Replaces any glide already in flight; the caller is
    /// responsible for cancelling its smoothing loop (rotation is written
    /// directly while a glide runs).
    pub fn begin_release(&mut self, from: Vec2, now_ms: f64, duration_ms: f64) {
        if self.detached {
            return;
        }
        self.phase = TiltPhase::Releasing;
        self.release = Some(ReleaseAnim {
            start_ms: now_ms,
            duration_ms: duration_ms.max(1.0),
            from,
        });
    }

    /// Pointer left the card: glide home from wherever it last was.
    pub fn pointer_leave(&mut self, now_ms: f64, duration_ms: f64) {
        let from = self.last_point;
        self.begin_release(from, now_ms, duration_ms);
    }

    /// One frame of the release glide. The eased point runs through the same
    /// geometry/rotation pipeline as live input, but the rotation is applied
    /// directly (the easing curve already provides the smooth motion). Ends
    /// exactly at rest: the final point is the box center, which maps to a
    /// zero rotation.
    pub fn step_release(&mut self, now_ms: f64) -> Option<ReleaseFrame> {
        if self.detached {
            return None;
        }
        let anim = self.release?;
        let progress = ((now_ms - anim.start_ms) / anim.duration_ms).clamp(0.0, 1.0) as f32;
        let eased = ease_in_out_cubic(progress);
        let point = anim.from.lerp(box_center(self.size), eased);
        self.last_point = point;
        let pos = normalize_in_box(point, self.size);
        let rotation = self.dynamic_target(&pos);
        self.target = rotation;
        self.current = rotation;
        let done = progress >= 1.0;
        if done {
            self.release = None;
            self.phase = TiltPhase::Idle;
        }
        Some(ReleaseFrame {
            glow: glow_vars(&pos),
            rotation,
            done,
        })
    }

    /// The element is gone: drop every loop and reset rotation ownership.
    /// All further inputs and steps are no-ops.
    pub fn detach(&mut self) {
        self.detached = true;
        self.release = None;
        self.phase = TiltPhase::Idle;
        self.target = Rotation::ZERO;
        self.current = Rotation::ZERO;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    // Reduced motion suppresses dynamic rotation; glow keeps tracking.
    fn dynamic_target(&self, pos: &NormalizedPosition) -> Rotation {
        if self.reduce_motion {
            Rotation::ZERO
        } else {
            rotation_target(pos, &self.cfg)
        }
    }
}
