pub mod math;
pub use math::*;
pub mod rng;
pub use rng::*;
pub mod sampler;
pub use sampler::*;
pub mod sampling;
pub use sampling::*;
pub mod bounds;
pub use bounds::*;
