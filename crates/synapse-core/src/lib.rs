pub mod activation;
pub mod constants;
pub mod field;
pub mod magnet;
pub mod params;
pub mod particles;
pub mod render;
pub mod simulation;

pub use field::{Bounds, Edge, Node};
pub use magnet::{magnetic_target, MagnetParams, Spring2};
pub use params::*;
pub use particles::{Direction, EnergyParticle};
pub use render::{DrawSurface, GradientStop, Rgba};
pub use simulation::*;
