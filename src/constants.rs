/// DOM hooks and style output names.
///
/// Selectors/attributes locate the annotated elements at wiring time; the
/// custom-property names are the contract with the stylesheet, which owns the
/// actual visual transform.
// Elements opting into each feature
pub const TILT_CARD_SELECTOR: &str = "[data-tilt-card]";
pub const GALLERY_SELECTOR: &str = "[data-rolling-gallery]";
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";

// Per-card configuration attributes
pub const ATTR_MAX_TILT_X: &str = "data-max-tilt-x";
pub const ATTR_MAX_TILT_Y: &str = "data-max-tilt-y";
pub const ATTR_MAX_TILT_Z: &str = "data-max-tilt-z";
pub const ATTR_SMOOTHING: &str = "data-smoothing";
pub const ATTR_RESPONSIVE_TILT: &str = "data-responsive-tilt";
pub const ATTR_MOBILE_TILT: &str = "data-mobile-tilt";
pub const ATTR_TILT_SENSITIVITY: &str = "data-tilt-sensitivity";

// Gallery configuration attributes
pub const ATTR_AUTOPLAY: &str = "data-autoplay";
pub const ATTR_PAUSE_ON_HOVER: &str = "data-pause-on-hover";

// Class toggled while a card is being interacted with
pub const ACTIVE_CLASS: &str = "active";

// Smoothed rotation output
pub const VAR_ROTATE_X: &str = "--rotate-x";
pub const VAR_ROTATE_Y: &str = "--rotate-y";
pub const VAR_ROTATE_Z: &str = "--rotate-z";

// Immediate pointer/glow output
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_BACKGROUND_X: &str = "--background-x";
pub const VAR_BACKGROUND_Y: &str = "--background-y";
pub const VAR_POINTER_FROM_CENTER: &str = "--pointer-from-center";
pub const VAR_POINTER_FROM_TOP: &str = "--pointer-from-top";
pub const VAR_POINTER_FROM_LEFT: &str = "--pointer-from-left";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
