/// Per-frame rendering: rotate, project, rasterize into the grid
use nalgebra::Matrix4;
use spincube_core::raster::{fill_quad, line_points};
use spincube_core::{rotate_point, rotation_matrix, Angles, Cube, Projector, ScreenPoint, EDGES, FACES};

use crate::surface::CharGrid;

/// Glyph used for both edges and filled faces
pub const FILL_GLYPH: char = '#';

/// Display mode, selected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Scanline-fill all 6 faces
    Filled,
    /// Trace the 12 edges only
    Edges,
}

/// Render one frame of the cube into the grid.
///
/// Returns the number of primitives drawn (12 edges or 6 face fills).
pub fn render_frame(
    grid: &mut CharGrid,
    cube: &Cube,
    angles: &Angles,
    projector: &Projector,
    mode: DrawMode,
) -> usize {
    grid.clear();

    let matrix = rotation_matrix(angles);
    let projected = project_vertices(cube, &matrix, projector);

    match mode {
        DrawMode::Edges => draw_edges(grid, &projected),
        DrawMode::Filled => draw_faces(grid, &projected),
    }
}

/// Rotate and project all 8 vertices for this frame
fn project_vertices(cube: &Cube, matrix: &Matrix4<f64>, projector: &Projector) -> [ScreenPoint; 8] {
    let mut projected = [ScreenPoint::new(0, 0); 8];
    for (slot, vertex) in projected.iter_mut().zip(cube.vertices().iter()) {
        *slot = projector.project(&rotate_point(matrix, vertex));
    }
    projected
}

fn draw_edges(grid: &mut CharGrid, projected: &[ScreenPoint; 8]) -> usize {
    for &(a, b) in EDGES.iter() {
        for point in line_points(projected[a], projected[b]) {
            grid.put(point.row, point.col, FILL_GLYPH);
        }
    }
    EDGES.len()
}

fn draw_faces(grid: &mut CharGrid, projected: &[ScreenPoint; 8]) -> usize {
    for face in FACES.iter() {
        let corners = [
            projected[face[0]],
            projected[face[1]],
            projected[face[2]],
            projected[face[3]],
        ];
        for point in fill_quad(corners) {
            grid.put(point.row, point.col, FILL_GLYPH);
        }
    }
    FACES.len()
}
