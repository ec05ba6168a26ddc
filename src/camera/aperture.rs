//! Aperture state and bokeh shape sampling.

use glam::Vec2;
use crate::core::math::{Float, radians, consts::PI};
use crate::core::sampling::concentric_sample_disk;

/// Largest supported polygonal blade count.
pub const MAX_APERTURE_BLADES: usize = 12;

/// Radial weighting applied to polygonal lens samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApertureBias {
    Center,
    Edge,
    Uniform,
}

/// Lens aperture: a circular disk for two blades, a regular polygon for
/// three to twelve, a degenerate point otherwise.
#[derive(Debug, Copy, Clone)]
pub struct Aperture {
    /// Physical lens radius; zero disables depth of field.
    pub size: Float,
    pub blade_count: u32,
    pub bias: ApertureBias,
    /// Blade rotation in degrees.
    pub rotation: Float,
    /// Unit directions at the wedge boundaries, one entry per blade plus
    /// two wrap entries for interpolation. Valid only after `update`.
    pub blade_dirs: [Vec2; MAX_APERTURE_BLADES + 2],
}

impl Aperture {
    /// Rebuild the blade direction table. Must be called after any change
    /// to the blade count or rotation; counts outside `2..=12` leave the
    /// table untouched and sample as a degenerate aperture.
    pub fn update(&mut self, _f_stop: Float) {
        let n = self.blade_count as usize;

        if n < 3 || n > MAX_APERTURE_BLADES {
            if self.blade_count != 2 {
                warn!("aperture blade count {} has no bokeh shape", self.blade_count);
            }
            return;
        }

        let mut w = radians(self.rotation);
        let wi = 2.0 * PI / n as Float;

        for dir in self.blade_dirs.iter_mut().take(n + 2) {
            *dir = Vec2::new(w.cos(), w.sin());
            w += wi;
        }
    }

    /// Map a uniform sample in `[0,1)^2` onto the aperture shape. The
    /// result is a point on the unit-radius shape; the caller scales it by
    /// the physical size.
    pub fn sample(&self, u: Vec2) -> Vec2 {
        match self.blade_count {
            2 => concentric_sample_disk(u),
            3..=12 => self.sample_polygon(u),
            _ => Vec2::ZERO,
        }
    }

    /// Triangular wedge sampling: pick a wedge from the integer part of
    /// `u.x`, reuse its fractional part as the radial coordinate, and blend
    /// the wedge's boundary directions to place the point inside the
    /// triangle.
    fn sample_polygon(&self, u: Vec2) -> Vec2 {
        let n = self.blade_count as Float;

        let idx = num::clamp((u.x * n) as usize, 0, self.blade_count as usize - 1);

        let x = num::clamp((u.x - idx as Float / n) * n, 0.0, 1.0);
        let x = self.bias_distance(x);

        let b1 = x * u.y;
        let b0 = x - b1;

        self.blade_dirs[idx] * b0 + self.blade_dirs[idx + 1] * b1
    }

    fn bias_distance(&self, r: Float) -> Float {
        match self.bias {
            ApertureBias::Center => (r.sqrt() * r).sqrt(),
            ApertureBias::Edge => (1.0 - r * r).sqrt(),
            ApertureBias::Uniform => r,
        }
    }
}

impl Default for Aperture {
    fn default() -> Aperture {
        Aperture {
            size: 0.0,
            blade_count: 5,
            bias: ApertureBias::Uniform,
            rotation: 0.0,
            blade_dirs: [Vec2::ZERO; MAX_APERTURE_BLADES + 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::core::sampler::Sampler;

    fn polygon_contains(aperture: &Aperture, p: Vec2) -> bool {
        // Convex containment: p must sit on the inner side of every edge of
        // the counterclockwise blade polygon.
        let n = aperture.blade_count as usize;
        for i in 0..n {
            let a = aperture.blade_dirs[i];
            let b = aperture.blade_dirs[i + 1];
            let edge = b - a;
            let to_p = p - a;
            if edge.x * to_p.y - edge.y * to_p.x < -1e-5 {
                return false;
            }
        }
        true
    }

    #[test]
    fn table_directions() {
        let mut aperture = Aperture::default();
        aperture.blade_count = 6;
        aperture.rotation = 0.0;
        aperture.update(8.0);

        assert!((aperture.blade_dirs[0] - Vec2::new(1.0, 0.0)).length() < 1e-6);
        for i in 0..8 {
            assert!((aperture.blade_dirs[i].length() - 1.0).abs() < 1e-5);
        }
        // One full turn brings the wrap entry back to the start.
        assert!((aperture.blade_dirs[6] - aperture.blade_dirs[0]).length() < 1e-4);
    }

    #[test]
    fn rotation_is_applied() {
        let mut aperture = Aperture::default();
        aperture.blade_count = 4;
        aperture.rotation = 90.0;
        aperture.update(8.0);

        assert!((aperture.blade_dirs[0] - Vec2::new(0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn polygon_samples_are_contained() {
        let mut rng = Rng::new(17);
        for blades in 3..=12 {
            for bias in [ApertureBias::Uniform, ApertureBias::Center, ApertureBias::Edge].iter() {
                let mut aperture = Aperture::default();
                aperture.blade_count = blades;
                aperture.bias = *bias;
                aperture.rotation = 10.0;
                aperture.update(8.0);

                for _ in 0..500 {
                    let p = aperture.sample(rng.get_2d());
                    assert!(
                        polygon_contains(&aperture, p),
                        "blades {} bias {:?} point {}",
                        blades,
                        bias,
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn two_blades_sample_the_disk() {
        let mut aperture = Aperture::default();
        aperture.blade_count = 2;
        aperture.update(8.0);

        let mut rng = Rng::new(29);
        for _ in 0..1000 {
            assert!(aperture.sample(rng.get_2d()).length() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn unsupported_blade_count_is_degenerate() {
        let mut aperture = Aperture::default();
        aperture.blade_count = 13;
        aperture.update(8.0);

        let mut rng = Rng::new(31);
        assert_eq!(aperture.sample(rng.get_2d()), Vec2::ZERO);

        aperture.blade_count = 1;
        assert_eq!(aperture.sample(rng.get_2d()), Vec2::ZERO);
    }

    #[test]
    fn out_of_range_table_stays_untouched() {
        let mut aperture = Aperture::default();
        aperture.blade_count = 6;
        aperture.update(8.0);
        let table = aperture.blade_dirs;

        aperture.blade_count = 20;
        aperture.update(8.0);
        assert_eq!(aperture.blade_dirs, table);
    }
}
