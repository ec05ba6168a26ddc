use glam::Vec2;
use std::fmt;
use crate::core::math::Float;
use crate::core::sampler::Sampler;
use crate::core::sampling::{mutate_metro, stratified_sample_2d};

/// Per-ray sample state. Produced either as a fresh stratified draw or as a
/// small-step mutation of a previous sample; both feed ray generation the
/// same way.
#[derive(Default, Debug, Copy, Clone)]
pub struct CameraSample {
    pub image_xy: Vec2,
    pub lens_uv: Vec2,
    pub time: Float,
}

impl CameraSample {
    /// Independent draw: a stratified image sample for cell `(x, y)` of a
    /// `kernel_size` square grid, an unstratified lens pair and a time
    /// scalar.
    pub fn large_step<S: Sampler>(&mut self, rnd: &mut S, x: u32, y: u32, kernel_size: u32) {
        self.image_xy = stratified_sample_2d(x, y, rnd.get_2d(), kernel_size, kernel_size);
        self.lens_uv = rnd.get_2d();
        self.time = rnd.get_1d();
    }

    /// Perturb all five components with local, symmetric Metropolis steps.
    /// Out-of-range results are left to the integrator to reject.
    pub fn mutate<S: Sampler>(&mut self, rnd: &mut S) {
        self.image_xy.x = mutate_metro(rnd, self.image_xy.x);
        self.image_xy.y = mutate_metro(rnd, self.image_xy.y);
        self.lens_uv.x = mutate_metro(rnd, self.lens_uv.x);
        self.lens_uv.y = mutate_metro(rnd, self.lens_uv.y);
        self.time = mutate_metro(rnd, self.time);
    }
}

impl fmt::Display for CameraSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ image_xy: {}, lens_uv: {}, time {} ]",
            self.image_xy, self.lens_uv, self.time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::core::sampling::MUTATE_SIZE_MAX;

    #[test]
    fn large_step_stays_in_cell() {
        let mut rng = Rng::new(41);
        let kernel_size = 16;
        for y in (0..kernel_size).step_by(5) {
            for x in (0..kernel_size).step_by(5) {
                let mut sample = CameraSample::default();
                sample.large_step(&mut rng, x as u32, y as u32, kernel_size as u32);

                let k = kernel_size as Float;
                assert!(sample.image_xy.x >= x as Float / k);
                assert!(sample.image_xy.x < (x + 1) as Float / k);
                assert!(sample.image_xy.y >= y as Float / k);
                assert!(sample.image_xy.y < (y + 1) as Float / k);

                assert!(sample.lens_uv.x >= 0.0 && sample.lens_uv.x < 1.0);
                assert!(sample.lens_uv.y >= 0.0 && sample.lens_uv.y < 1.0);
                assert!(sample.time >= 0.0 && sample.time < 1.0);
            }
        }
    }

    #[test]
    fn mutation_moves_every_component_locally() {
        let mut rng = Rng::new(43);
        let mut sample = CameraSample::default();
        sample.large_step(&mut rng, 3, 3, 8);

        for _ in 0..100 {
            let before = sample;
            sample.mutate(&mut rng);

            let bound = MUTATE_SIZE_MAX + 1e-6;
            assert!((sample.image_xy.x - before.image_xy.x).abs() <= bound);
            assert!((sample.image_xy.y - before.image_xy.y).abs() <= bound);
            assert!((sample.lens_uv.x - before.lens_uv.x).abs() <= bound);
            assert!((sample.lens_uv.y - before.lens_uv.y).abs() <= bound);
            assert!((sample.time - before.time).abs() <= bound);

            assert!(sample.image_xy != before.image_xy);
        }
    }
}
