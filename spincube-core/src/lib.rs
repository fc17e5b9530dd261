/// Spincube Core Library - Shared geometry and rasterization logic
///
/// This library provides the stateless core functionality for the terminal
/// cube renderer: the cube topology, rotation transform, harmonized angle
/// driver, perspective projection, and grid rasterization.

pub mod geometry;
pub mod projection;
pub mod raster;
pub mod spin;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Cube, ScreenPoint, EDGES, FACES};
pub use projection::Projector;
pub use spin::{harmonized_angles, Spin};
pub use transform::{rotate_point, rotation_matrix, Angles};
