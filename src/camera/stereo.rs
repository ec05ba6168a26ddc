use glam::Vec3;
use crate::core::math::Float;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

/// Stereo rig state. The eye separation is derived from the probed focus
/// distance during the camera update pass, not set directly.
#[derive(Debug, Copy, Clone)]
pub struct StereoRig {
    pub enabled: bool,
    pub eye_separation: Float,
    pub left_filter: Vec3,
    pub right_filter: Vec3,
}

impl Default for StereoRig {
    fn default() -> StereoRig {
        StereoRig {
            enabled: false,
            eye_separation: 0.25,
            left_filter: Vec3::ONE,
            right_filter: Vec3::ONE,
        }
    }
}
