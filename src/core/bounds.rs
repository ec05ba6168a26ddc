use glam::Vec3;
use super::math::Float;

/// Axis-aligned scene bounding volume, consumed by the preset view
/// placements.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> BoundingBox {
        BoundingBox { min, max }
    }

    pub fn center(&self) -> Vec3 {
        0.5 * (self.min + self.max)
    }

    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest extent over the three axes.
    pub fn max_length(&self) -> Float {
        self.diagonal().max_element()
    }
}

impl Default for BoundingBox {
    fn default() -> BoundingBox {
        BoundingBox {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_extent() {
        let bb = BoundingBox::new(Vec3::new(-2.0, -1.0, 0.0), Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(bb.center(), Vec3::new(0.0, 1.0, 0.5));
        assert_eq!(bb.diagonal(), Vec3::new(4.0, 4.0, 1.0));
        assert_eq!(bb.max_length(), 4.0);
    }
}
