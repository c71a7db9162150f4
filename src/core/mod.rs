pub mod constants;
pub mod gallery;
pub mod geometry;
pub mod scramble;
pub mod tilt;

pub use gallery::{GalleryEngine, GalleryLayout};
pub use scramble::ScrambleEngine;
pub use tilt::{GlowVars, Rotation, TiltConfig, TiltEngine};
