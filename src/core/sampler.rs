use glam::Vec2;
use super::math::Float;
use super::rng::Rng;

/// Source of canonical uniform samples consumed by the lens and
/// camera-sample code. Implementations must return values in `[0, 1)`.
pub trait Sampler {
    fn get_1d(&mut self) -> Float;

    fn get_2d(&mut self) -> Vec2;
}

impl Sampler for Rng {
    fn get_1d(&mut self) -> Float {
        self.uniform_float()
    }

    fn get_2d(&mut self) -> Vec2 {
        Vec2::new(self.uniform_float(), self.uniform_float())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_range() {
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let u = rng.get_2d();
            assert!(u.x >= 0.0 && u.x < 1.0);
            assert!(u.y >= 0.0 && u.y < 1.0);
        }
    }
}
