#[macro_use]
extern crate log;

pub mod core;
pub mod camera;
