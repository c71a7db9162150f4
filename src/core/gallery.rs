use super::constants::*;

/// Cylinder geometry for the rolling gallery: faces are distributed around a
/// ring whose circumference is the configured cylinder width.
#[derive(Clone, Copy, Debug)]
pub struct GalleryLayout {
    pub cylinder_width: f32,
    pub face_count: usize,
    pub face_width: f32,
    pub radius: f32,
}

impl GalleryLayout {
    pub fn new(face_count: usize, viewport_width: f32) -> Self {
        let cylinder_width = if viewport_width <= GALLERY_NARROW_VIEWPORT_PX {
            GALLERY_CYLINDER_WIDTH_NARROW_PX
        } else {
            GALLERY_CYLINDER_WIDTH_PX
        };
        let face_count = face_count.max(1);
        GalleryLayout {
            cylinder_width,
            face_count,
            face_width: cylinder_width / face_count as f32 * GALLERY_FACE_WIDTH_RATIO,
            radius: cylinder_width / (2.0 * std::f32::consts::PI),
        }
    }

    /// Y-rotation of face `index` around the ring.
    pub fn face_angle(&self, index: usize) -> f32 {
        360.0 / self.face_count as f32 * index as f32
    }
}

/// Rotation state of one gallery ring: autoplay spin, drag, and fling.
pub struct GalleryEngine {
    layout: GalleryLayout,
    rotation_deg: f32,
    autoplay: bool,
    pause_on_hover: bool,
    hovered: bool,
    dragging: bool,
}

impl GalleryEngine {
    pub fn new(layout: GalleryLayout, autoplay: bool, pause_on_hover: bool) -> Self {
        GalleryEngine {
            layout,
            rotation_deg: 0.0,
            autoplay,
            pause_on_hover,
            hovered: false,
            dragging: false,
        }
    }

    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    pub fn rotation(&self) -> f32 {
        self.rotation_deg
    }

    /// Rotation folded into `[0, 360)`.
    pub fn normalized_rotation(&self) -> f32 {
        self.rotation_deg.rem_euclid(360.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Horizontal drag delta in pixels since the previous sample.
    pub fn drag_by(&mut self, dx_px: f32) {
        if self.dragging {
            self.rotation_deg += dx_px * GALLERY_DRAG_FACTOR;
        }
    }

    /// Drag released with the given horizontal velocity (px/s); the ring gets
    /// one fling impulse and autoplay (if enabled) resumes from there.
    pub fn end_drag(&mut self, velocity_px_per_sec: f32) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.rotation_deg += velocity_px_per_sec * GALLERY_DRAG_FACTOR;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Advances the autoplay spin. Returns true when the rotation changed and
    /// the presentation should be rewritten.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if !self.autoplay || self.dragging || (self.pause_on_hover && self.hovered) {
            return false;
        }
        self.rotation_deg -= 360.0 / GALLERY_SPIN_PERIOD_SEC * dt_sec;
        true
    }
}
