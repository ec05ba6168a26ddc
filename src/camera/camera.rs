//! Camera placement, ray generation and inverse projection.

use glam::{Quat, Vec2, Vec3};
use crate::core::bounds::BoundingBox;
use crate::core::math::{Float, radians, consts::PI};
use super::animation::Turntable;
use super::aperture::Aperture;
use super::film::Film;
use super::focus::Focus;
use super::stereo::{Eye, StereoRig};

/// Floor for the focal distance when deriving the per-pixel area proxy, so
/// projection densities stay finite.
const MIN_FOCAL_DISTANCE: Float = 1e-4;

/// Ratio of the probed focus distance that separates the stereo eyes.
const EYE_SEPARATION_SCALE: Float = 1.0 / 30.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraType {
    Perspective,
    Orthographic,
    Environment,
    Realistic,
    FishEye,
}

/// Preset placements derived from the scene bounds. `User` leaves the
/// current placement alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewMode {
    User,
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    IsometricFrontLeftTop,
    IsometricFrontRightTop,
    IsometricFrontLeftBottom,
    IsometricFrontRightBottom,
    IsometricBackLeftTop,
    IsometricBackRightTop,
    IsometricBackLeftBottom,
    IsometricBackRightBottom,
}

/// A physically plausible camera for Monte-Carlo light transport.
///
/// All fields are plain data: mutate placement or optics directly, then
/// call [`update`](Camera::update) before the next read of derived state.
/// The hot path (`generate_ray`, `project`) takes `&self` only, so one
/// synchronized camera can be shared read-only across any number of
/// render lanes.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub camera_type: CameraType,
    pub scene_bounds: BoundingBox,
    /// Near clip distance, consumed by the integrator when clipping is on.
    pub hither: Float,
    /// Far clip distance.
    pub yon: Float,
    pub clipping_enabled: bool,
    pub from: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_v: Float,
    /// Per-pixel area proxy for the projection density; derived.
    pub area_pixel: Float,
    /// Forward basis vector; derived.
    pub n: Vec3,
    /// Horizontal basis vector; derived.
    pub u: Vec3,
    /// Vertical basis vector; derived.
    pub v: Vec3,
    pub film: Film,
    pub focus: Focus,
    pub aperture: Aperture,
    pub stereo: StereoRig,
    pub animation: Turntable,
    /// Set by the interactive operators; cleared by `update`.
    pub dirty: bool,
}

impl Camera {
    /// Recompute every derived quantity from the current placement and
    /// optics parameters: the orthonormal basis, the film screen window,
    /// the pixel area proxy, the aperture table, the stereo eye separation
    /// and the animation frame accounting. Call after any batch of
    /// parameter changes, before the next `generate_ray` or `project`.
    ///
    /// A degenerate placement (eye on target, or up parallel to the view
    /// axis) keeps the previous basis.
    pub fn update(&mut self) {
        let los = self.target - self.from;
        if los.length_squared() > 1e-12 {
            let n = los.normalize();
            let u = self.up.cross(n);
            if u.length_squared() > 1e-12 {
                self.n = n;
                self.u = u.normalize();
                self.v = n.cross(self.u).normalize();
            } else {
                warn!("camera up vector is parallel to the view axis, keeping previous basis");
            }
        } else {
            warn!("camera eye and target coincide, keeping previous basis");
        }

        self.film.update(self.fov_v, self.aperture.size);

        let focal_distance = self.focus.focal_distance.max(MIN_FOCAL_DISTANCE);
        self.area_pixel = self.film.resolution.aspect_ratio / (focal_distance * focal_distance);

        self.aperture.update(self.film.f_stop);

        self.stereo.eye_separation = 0.5 * self.focus.t * EYE_SEPARATION_SCALE;

        self.animation.update();

        self.dirty = false;
    }

    /// Generate a primary ray through `pixel`. With a nonzero aperture the
    /// origin is displaced across the lens by `aperture_rnd` and the
    /// direction refocused at the focal distance, the thin lens model. The
    /// returned direction is unit length.
    pub fn generate_ray(&self, pixel: Vec2, aperture_rnd: Vec2) -> (Vec3, Vec3) {
        let screen_point = Vec2::new(
            self.film.screen[0][0] + self.film.inv_screen.x * pixel.x,
            self.film.screen[1][0] + self.film.inv_screen.y * pixel.y,
        );

        let mut ray_o = self.from;
        let mut ray_d = (self.n - screen_point.x * self.u - screen_point.y * self.v).normalize();

        if self.aperture.size != 0.0 {
            // Sample the lens
            let lens_uv = self.aperture.size * self.aperture.sample(aperture_rnd);

            let li = self.u * lens_uv.x + self.v * lens_uv.y;
            ray_o += li;
            ray_d = (ray_d * self.focus.focal_distance - li).normalize();
        }

        (ray_o, ray_d)
    }

    /// Generate a primary ray for one eye of the stereo rig: the same
    /// model with the origin shifted half the eye separation along the
    /// horizontal basis axis.
    pub fn generate_ray_stereo(&self, eye: Eye, pixel: Vec2, aperture_rnd: Vec2) -> (Vec3, Vec3) {
        let (ray_o, ray_d) = self.generate_ray(pixel, aperture_rnd);

        let shift = match eye {
            Eye::Left => 0.5 * self.stereo.eye_separation,
            Eye::Right => -0.5 * self.stereo.eye_separation,
        };

        (ray_o + shift * self.u, ray_d)
    }

    /// Map a world-space direction leaving the eye back onto the sensor.
    /// Returns the pixel coordinate and the solid-angle-to-image-area
    /// density, or `None` when the direction faces away from the camera or
    /// misses the screen window. `None` is a routine outcome meaning the
    /// path cannot contribute through the lens.
    pub fn project(&self, w: Vec3) -> Option<(Float, Float, Float)> {
        let cos_theta = w.dot(self.n);
        if cos_theta <= 0.0 {
            return None;
        }

        let la = (1.0 / cos_theta) * w;
        let laa = la - self.n;
        let u = -laa.dot(self.u);
        let v = -laa.dot(self.v);

        if u < self.film.screen[0][0]
            || u > self.film.screen[0][1]
            || v < self.film.screen[1][0]
            || v > self.film.screen[1][1]
        {
            return None;
        }

        let ua = u / self.film.screen[0][1].abs();
        let va = v / self.film.screen[1][1].abs();

        let half_w = 0.5 * self.film.resolution.xy.x as Float;
        let half_h = 0.5 * self.film.resolution.xy.y as Float;

        // pdf = 1/A_pix * r^2 / cos(forward, dir), where r^2 is also 1/cos^2
        let pdf = 8.0 * PI / (self.area_pixel * cos_theta * cos_theta * cos_theta);

        Some((half_w + ua * half_w, half_h + va * half_h, pdf))
    }

    /// Move the eye along the line of sight, away from the target for a
    /// positive amount. Zooming in stops short of the target.
    pub fn zoom(&mut self, amount: Float) {
        let mut reverse_los = self.from - self.target;

        if amount > 0.0 {
            reverse_los *= 1.1;
        } else if amount < 0.0 && reverse_los.length() > 0.0005 {
            reverse_los *= 0.9;
        }

        self.from = reverse_los + self.target;
        self.dirty = true;
    }

    /// Translate the eye and target together across the view plane. The
    /// arguments are screen-space motions scaled against the film width.
    pub fn pan(&mut self, down_degrees: Float, right_degrees: Float) {
        let los = self.target - self.from;

        let right = los.cross(self.up);
        if right.length_squared() < 1e-12 {
            warn!("pan with a line of sight parallel to up, ignoring");
            return;
        }
        let right = right.normalize();

        let length = los.length();
        let window_width = self.film.resolution.xy.x as Float;

        let u = length * (right_degrees / window_width);
        let v = length * (down_degrees / window_width);

        self.from = self.from + right * u - self.up * v;
        self.target = self.target + right * u - self.up * v;
        self.dirty = true;
    }

    /// Rotate the eye (and the up vector) around the target: pitch about
    /// the local horizontal axis, then yaw about the world vertical axis,
    /// both in degrees.
    pub fn orbit(&mut self, down_degrees: Float, right_degrees: Float) {
        let mut reverse_los = self.from - self.target;

        let right = self.up.cross(reverse_los);
        if right.length_squared() < 1e-12 {
            warn!("orbit with a line of sight parallel to up, ignoring");
            return;
        }
        let right = right.normalize();

        let pitch = Quat::from_axis_angle(right, radians(down_degrees));
        let yaw = Quat::from_axis_angle(Vec3::Y, radians(right_degrees));

        reverse_los = yaw * (pitch * reverse_los);
        self.up = yaw * (pitch * self.up);

        self.from = reverse_los + self.target;
        self.dirty = true;
    }

    /// Snap the placement to a preset view of the scene bounds and
    /// resynchronize.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        let length = 1.5 * self.scene_bounds.max_length();

        let (offset, up) = match view_mode {
            ViewMode::User => return,
            ViewMode::Front => (Vec3::new(0.0, 0.0, -length), Vec3::Y),
            ViewMode::Back => (Vec3::new(0.0, 0.0, length), Vec3::Y),
            ViewMode::Left => (Vec3::new(length, 0.0, 0.0), Vec3::Y),
            ViewMode::Right => (Vec3::new(-length, 0.0, 0.0), Vec3::Y),
            ViewMode::Top => (Vec3::new(0.0, length, 0.0), Vec3::Z),
            ViewMode::Bottom => (Vec3::new(0.0, -length, 0.0), Vec3::NEG_Z),
            ViewMode::IsometricFrontLeftTop => (Vec3::new(length, length, -length), Vec3::Y),
            ViewMode::IsometricFrontRightTop => (Vec3::new(-length, length, -length), Vec3::Y),
            ViewMode::IsometricFrontLeftBottom => (Vec3::new(length, -length, -length), Vec3::Y),
            ViewMode::IsometricFrontRightBottom => (Vec3::new(-length, -length, -length), Vec3::Y),
            ViewMode::IsometricBackLeftTop => (Vec3::new(length, length, length), Vec3::Y),
            ViewMode::IsometricBackRightTop => (Vec3::new(-length, length, length), Vec3::Y),
            ViewMode::IsometricBackLeftBottom => (Vec3::new(length, -length, length), Vec3::Y),
            ViewMode::IsometricBackRightBottom => (Vec3::new(-length, -length, length), Vec3::Y),
        };

        self.target = self.scene_bounds.center();
        self.up = up;
        self.from = self.target + offset;

        self.update();
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            camera_type: CameraType::Perspective,
            scene_bounds: BoundingBox::default(),
            hither: 1.0,
            yon: 50000.0,
            clipping_enabled: false,
            from: Vec3::new(500.0, 500.0, 500.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_v: 35.0,
            area_pixel: 1.0,
            n: Vec3::Z,
            u: Vec3::X,
            v: Vec3::Y,
            film: Film::default(),
            focus: Focus::default(),
            aperture: Aperture::default(),
            stereo: StereoRig::default(),
            animation: Turntable::default(),
            dirty: true,
        }
    }
}
