//! Turntable animation sequencer.

use glam::Vec3;
use crate::core::math::{Float, radians};

/// Fixed sequencer frame rate in frames per second.
pub const FRAME_RATE: Float = 30.0;

/// Orbits the eye around a target at fixed latitude and distance, one yaw
/// step per frame. The sequencer only does frame accounting and placement;
/// the orchestrator moves the camera and renders each frame.
#[derive(Debug, Copy, Clone)]
pub struct Turntable {
    pub enabled: bool,
    /// Sequence duration in seconds.
    pub duration: Float,
    pub current_frame: u32,
    /// Derived from the duration; valid after `update`.
    pub frame_count: u32,
    pub samples_per_frame: u32,
    /// Orbit radius.
    pub distance: Float,
    /// Orbit latitude in degrees.
    pub latitude: Float,
    /// Yaw at frame zero, in degrees.
    pub initial_angle: Float,
    /// Total yaw swept over the sequence, in degrees.
    pub max_angle: Float,
    /// Yaw step per frame in radians; valid after `update`.
    pub delta_theta: Float,
}

impl Turntable {
    /// Reset to the first frame and start running.
    pub fn start(&mut self) {
        self.enabled = true;
        self.current_frame = 0;
        debug!("turntable started, {} frames", self.frame_count);
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.current_frame = 0;
    }

    /// Advance to the next frame. Returns `false` once the sequence is
    /// complete, at which point the sequencer has stopped itself.
    pub fn next_frame(&mut self) -> bool {
        self.current_frame += 1;

        if self.current_frame >= self.frame_count {
            self.enabled = false;
            debug!("turntable finished after {} frames", self.current_frame);
            return false;
        }

        true
    }

    /// Recompute the frame count and per-frame yaw step. Must be called
    /// after changing the duration or angle range.
    pub fn update(&mut self) {
        self.frame_count = (self.duration * FRAME_RATE) as u32;

        if self.frame_count == 0 {
            if self.duration > 0.0 {
                warn!("turntable duration {}s is shorter than one frame", self.duration);
            }
            self.delta_theta = 0.0;
        } else {
            self.delta_theta = radians(self.max_angle) / self.frame_count as Float;
        }
    }

    /// Eye placement for the current frame.
    pub fn sample(&self, target: Vec3) -> Vec3 {
        let theta = radians(self.initial_angle) + self.current_frame as Float * self.delta_theta;
        let phi = radians(self.latitude);

        target
            + self.distance
                * Vec3::new(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin())
    }
}

impl Default for Turntable {
    fn default() -> Turntable {
        let mut animation = Turntable {
            enabled: false,
            duration: 3.0,
            current_frame: 0,
            frame_count: 0,
            samples_per_frame: 250,
            distance: 5.0,
            latitude: 0.0,
            initial_angle: -90.0,
            max_angle: 360.0,
            delta_theta: 0.0,
        };
        animation.update();
        animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::consts::PI;

    #[test]
    fn frame_accounting() {
        let animation = Turntable::default();
        assert_eq!(animation.frame_count, 90);
        assert!((animation.delta_theta - 2.0 * PI / 90.0).abs() < 1e-6);
    }

    #[test]
    fn runs_for_exactly_frame_count_frames() {
        let mut animation = Turntable::default();
        animation.start();
        assert!(animation.enabled);

        for _ in 0..animation.frame_count - 1 {
            assert!(animation.next_frame());
            assert!(animation.enabled);
        }
        assert!(!animation.next_frame());
        assert!(!animation.enabled);
    }

    #[test]
    fn stop_resets_frame() {
        let mut animation = Turntable::default();
        animation.start();
        animation.next_frame();
        animation.next_frame();
        animation.stop();
        assert_eq!(animation.current_frame, 0);
        assert!(!animation.enabled);
    }

    #[test]
    fn first_frame_matches_initial_angle() {
        let mut animation = Turntable::default();
        animation.start();

        // Initial angle -90 degrees puts the eye on the negative z axis.
        let eye = animation.sample(Vec3::ZERO);
        assert!((eye - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-4);

        let around = animation.sample(Vec3::new(1.0, 2.0, 3.0));
        assert!((around - Vec3::new(1.0, 2.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn half_turn_after_half_the_frames() {
        let mut animation = Turntable::default();
        animation.start();
        for _ in 0..animation.frame_count / 2 {
            assert!(animation.next_frame());
        }

        // -90 + 180 degrees of yaw lands on the positive z axis.
        let eye = animation.sample(Vec3::ZERO);
        assert!((eye - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-3);
    }

    #[test]
    fn short_duration_has_no_frames() {
        let mut animation = Turntable::default();
        animation.duration = 0.01;
        animation.update();
        assert_eq!(animation.frame_count, 0);
        assert_eq!(animation.delta_theta, 0.0);

        animation.start();
        assert!(!animation.next_frame());
    }
}
