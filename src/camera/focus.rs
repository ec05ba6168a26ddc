use glam::{Vec2, Vec3};
use crate::core::math::Float;
use super::film::Resolution;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FocusMode {
    /// Probe the scene at the canvas center every synchronization pass.
    CenterScreen,
    /// Probe the scene at a fixed canvas point.
    ScreenPoint,
    /// Keep the distance from the last explicit probe.
    Probed,
    /// Focal distance is set directly, probes never override it.
    Manual,
}

/// Focus state. Only `focal_distance` feeds ray generation; the probe
/// fields record the last scene hit that drove it.
#[derive(Debug, Copy, Clone)]
pub struct Focus {
    pub mode: FocusMode,
    /// Canvas position probed in `ScreenPoint` and `Probed` modes.
    pub screen_point: Vec2,
    pub focal_distance: Float,
    /// Last probed hit distance.
    pub t: Float,
    /// Last probed hit position.
    pub p: Vec3,
    /// Last probed hit normal.
    pub n: Vec3,
    pub dot_wn: Float,
}

impl Focus {
    /// Canvas position the orchestrator should probe for the active mode,
    /// or `None` when the focal distance is manual.
    pub fn probe_target(&self, resolution: &Resolution) -> Option<Vec2> {
        match self.mode {
            FocusMode::CenterScreen => Some(Vec2::new(
                0.5 * resolution.xy.x as Float,
                0.5 * resolution.xy.y as Float,
            )),
            FocusMode::ScreenPoint | FocusMode::Probed => Some(self.screen_point),
            FocusMode::Manual => None,
        }
    }

    /// Store the result of a focus probe. Outside of manual mode the probed
    /// hit distance becomes the focal distance.
    pub fn apply_probe(&mut self, t: Float, p: Vec3, n: Vec3, dot_wn: Float) {
        self.t = t;
        self.p = p;
        self.n = n;
        self.dot_wn = dot_wn;

        if self.mode != FocusMode::Manual {
            self.focal_distance = t;
        }
    }
}

impl Default for Focus {
    fn default() -> Focus {
        Focus {
            mode: FocusMode::CenterScreen,
            screen_point: Vec2::ZERO,
            focal_distance: 1.0,
            t: 0.0,
            p: Vec3::ZERO,
            n: Vec3::ZERO,
            dot_wn: 0.0,
        }
    }
}
