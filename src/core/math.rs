//! Type definitions and constants.

pub type Float = f32;

pub mod consts {
    use super::Float;
    pub use std::f32::consts::*;
    pub const FRAC_PI_180: Float = PI / 180.0;
}

/// Convert an angle from degrees into radians.
pub fn radians(deg: Float) -> Float {
    consts::FRAC_PI_180 * deg
}
