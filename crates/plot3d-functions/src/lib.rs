//! plot3d surface functions: pure `(u, v, t) -> Point3` mappings.
//!
//! Every function maps the normalized domain `u, v in [-1, 1]` and a time
//! value `t` (seconds) to a 3D position. Functions are stateless and
//! addressed through [`FunctionId`]; see [`catalog`] for the dispatch table.

pub mod catalog;

mod multi_wave;
mod ripple;
mod sphere;
mod torus;
mod wave;

pub use catalog::{lookup, FunctionId, SurfaceFunction};
pub use multi_wave::multi_wave;
pub use ripple::ripple;
pub use sphere::sphere;
pub use torus::torus;
pub use wave::wave;
