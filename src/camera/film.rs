//! Film state: resolution, the camera-space screen window and the
//! photographic exposure factor consumed by tone mapping.

use glam::{UVec2, Vec2};
use crate::core::math::{Float, radians};

/// Pixel resolution with its derived reciprocals and aspect ratio.
#[derive(Debug, Copy, Clone)]
pub struct Resolution {
    pub xy: UVec2,
    pub inv_xy: Vec2,
    /// Width over height.
    pub aspect_ratio: Float,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Resolution {
        let mut resolution = Resolution {
            xy: UVec2::new(width, height),
            inv_xy: Vec2::ZERO,
            aspect_ratio: 1.0,
        };
        resolution.update();
        resolution
    }

    /// Recompute the derived fields after `xy` changes. Zero extents are
    /// clamped to one pixel so the reciprocals stay finite.
    pub fn update(&mut self) {
        if self.xy.x == 0 || self.xy.y == 0 {
            warn!("film resolution needs at least one pixel per axis, clamping {}", self.xy);
            self.xy = self.xy.max(UVec2::ONE);
        }
        self.inv_xy = Vec2::new(1.0 / self.xy.x as Float, 1.0 / self.xy.y as Float);
        self.aspect_ratio = self.xy.x as Float / self.xy.y as Float;
    }
}

impl Default for Resolution {
    fn default() -> Resolution {
        Resolution::new(800, 600)
    }
}

/// Tone-map parameter block. The factor is derived by `Film::update`;
/// applying it is the post process pipeline's job.
#[derive(Debug, Copy, Clone)]
pub struct ToneMap {
    pub factor: Float,
}

impl Default for ToneMap {
    fn default() -> ToneMap {
        ToneMap { factor: 1.0 }
    }
}

/// Bloom parameter block, carried for the post process pipeline.
#[derive(Debug, Copy, Clone)]
pub struct Bloom {
    pub radius: Float,
    pub weight: Float,
    pub n_samples: u32,
}

impl Default for Bloom {
    fn default() -> Bloom {
        Bloom {
            radius: 100.0,
            weight: 0.1,
            n_samples: 12,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Film {
    pub resolution: Resolution,
    /// Camera-space image plane extents, `screen[axis][0]` holding the
    /// minimum and `screen[axis][1]` the maximum.
    pub screen: [[Float; 2]; 2],
    /// Screen span per pixel along each axis.
    pub inv_screen: Vec2,
    pub iso: Float,
    pub exposure: Float,
    pub f_stop: Float,
    pub gamma: Float,
    pub tone_map: ToneMap,
    pub bloom: Bloom,
}

impl Film {
    /// Recompute the screen window and exposure factor. Must be called
    /// whenever the field of view, resolution, aperture size or any of the
    /// exposure inputs change; the screen window and its reciprocal are
    /// only ever rewritten together. A non-positive f-stop is clamped
    /// before it reaches the exposure divisor.
    pub fn update(&mut self, fov_v: Float, _aperture_size: Float) {
        self.resolution.update();

        let scale = (0.5 * radians(fov_v)).tan();

        if self.resolution.aspect_ratio > 1.0 {
            self.screen[0][0] = -scale;
            self.screen[0][1] = scale;
            self.screen[1][0] = -scale / self.resolution.aspect_ratio;
            self.screen[1][1] = scale / self.resolution.aspect_ratio;
        } else {
            self.screen[0][0] = -scale / self.resolution.aspect_ratio;
            self.screen[0][1] = scale / self.resolution.aspect_ratio;
            self.screen[1][0] = -scale;
            self.screen[1][1] = scale;
        }

        self.inv_screen.x = (self.screen[0][1] - self.screen[0][0]) * self.resolution.inv_xy.x;
        self.inv_screen.y = (self.screen[1][1] - self.screen[1][0]) * self.resolution.inv_xy.y;

        let f_stop = self.f_stop.max(1e-4);
        self.tone_map.factor = self.exposure / (f_stop * f_stop)
            * (self.iso / 10.0)
            * (118.0 as Float / 255.0).powf(self.gamma);
    }
}

impl Default for Film {
    fn default() -> Film {
        Film {
            resolution: Resolution::default(),
            screen: [[0.0; 2]; 2],
            inv_screen: Vec2::ZERO,
            iso: 400.0,
            exposure: 10.0,
            f_stop: 8.0,
            gamma: 2.2,
            tone_map: ToneMap::default(),
            bloom: Bloom::default(),
        }
    }
}
