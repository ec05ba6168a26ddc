//! Sampling routines shared by the lens and sample-mutation code.

use glam::Vec2;
use super::rng::ONE_MINUS_EPSILON;
use super::math::{Float, consts::{FRAC_PI_4, FRAC_PI_2}};
use super::sampler::Sampler;

/// Smallest magnitude of a Metropolis small-step perturbation.
pub const MUTATE_SIZE_MIN: Float = 1.0 / 1024.0;
/// Largest magnitude of a Metropolis small-step perturbation.
pub const MUTATE_SIZE_MAX: Float = 1.0 / 64.0;

/// Map a uniform point on the unit square onto the unit disk with low
/// distortion, preserving relative sample spacing.
pub fn concentric_sample_disk(u: Vec2) -> Vec2 {
    // Map uniform random numbers to $[-1,1]^2$
    let u_offset = u * 2.0 - Vec2::new(1.0, 1.0);

    // Handle degeneracy at the origin
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Vec2::ZERO;
    }

    // Apply concentric mapping to point
    let theta: Float;
    let r: Float;
    if u_offset.x.abs() > u_offset.y.abs() {
        r = u_offset.x;
        theta = FRAC_PI_4 * (u_offset.y / u_offset.x);
    } else {
        r = u_offset.y;
        theta = FRAC_PI_2 - FRAC_PI_4 * (u_offset.x / u_offset.y);
    }
    r * Vec2::new(theta.cos(), theta.sin())
}

/// Jittered sample for cell `(x, y)` of an `nx` by `ny` stratification grid,
/// returned as a point in `[0,1)^2` over the whole grid.
pub fn stratified_sample_2d(x: u32, y: u32, u: Vec2, nx: u32, ny: u32) -> Vec2 {
    Vec2::new(
        ((x as Float + u.x) / nx as Float).min(ONE_MINUS_EPSILON),
        ((y as Float + u.y) / ny as Float).min(ONE_MINUS_EPSILON),
    )
}

/// Perturb `x` by an exponentially distributed small step, the local move of
/// a Metropolis sampler. The result may leave `[0,1)`; range policy belongs
/// to the caller so rejected proposals are not silently teleported.
pub fn mutate_metro<S: Sampler>(rnd: &mut S, x: Float) -> Float {
    let dx = MUTATE_SIZE_MAX
        * (-(MUTATE_SIZE_MAX / MUTATE_SIZE_MIN).ln() * rnd.get_1d()).exp();
    if rnd.get_1d() < 0.5 {
        x + dx
    } else {
        x - dx
    }
}
