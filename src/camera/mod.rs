pub mod film;
pub use film::*;
pub mod aperture;
pub use aperture::*;
pub mod focus;
pub use focus::*;
pub mod stereo;
pub use stereo::*;
pub mod animation;
pub use animation::*;
pub mod sample;
pub use sample::*;
pub mod camera;
pub use camera::*;
