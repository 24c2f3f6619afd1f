//! Uniform random points on the surface and inside the volume of a sphere.

pub mod math;
pub mod common;
pub mod math_random;
pub mod xorwow;
pub mod sphere;
pub mod spherical;
pub mod ball;
pub mod config;
pub mod selftest;

pub use math::{Real,Real3,r3};
pub use math_random::{Random,UniformSource};
pub use sphere::Sphere;
pub use spherical::sample_surface;
pub use ball::{sample_volume,try_sample_volume};
