/// Perspective projection onto a fixed character grid
use nalgebra::Point3;

use crate::geometry::ScreenPoint;

/// Default grid width in columns
pub const GRID_COLS: usize = 100;
/// Default grid height in rows
pub const GRID_ROWS: usize = 50;
/// Default projection scale
pub const SCALE: f64 = 20.0;
/// Default camera distance added to every z before the perspective divide
pub const Z_OFFSET: f64 = 5.0;

/// Maps rotated 3D points to integer grid coordinates.
///
/// The camera sits at the origin looking down +z, so each point's z is
/// pushed out by `z_offset` before dividing. `z_offset` must stay larger
/// than the cube's rotated extent or the divide blows up.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    cols: usize,
    rows: usize,
    scale: f64,
    z_offset: f64,
}

impl Projector {
    pub fn new(cols: usize, rows: usize, scale: f64, z_offset: f64) -> Self {
        debug_assert!(z_offset > 0.0);
        Self {
            cols,
            rows,
            scale,
            z_offset,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Perspective-divide a point and center it on the grid.
    ///
    /// y is negated because rows grow downward while model y grows upward.
    pub fn project(&self, point: &Point3<f64>) -> ScreenPoint {
        let z = point.z + self.z_offset;

        let col = (point.x * self.scale / z).floor() as i32 + self.cols as i32 / 2;
        let row = (-point.y * self.scale / z).floor() as i32 + self.rows as i32 / 2;

        ScreenPoint::new(col, row)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(GRID_COLS, GRID_ROWS, SCALE, Z_OFFSET)
    }
}
