/// Cube geometry and fixed topology tables
use nalgebra::Point3;

/// Integer character-grid coordinates produced by projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenPoint {
    pub col: i32,
    pub row: i32,
}

impl ScreenPoint {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// The cube's 12 edges as vertex-index pairs
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // back face
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // connecting edges
];

/// The cube's 6 faces as ordered vertex-index quads.
/// The ordering is only used to walk the 4 boundary edges of a face,
/// never for backface culling.
pub const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 1, 5, 4],
    [4, 5, 6, 7],
    [2, 3, 7, 6],
    [0, 4, 7, 3],
    [1, 5, 6, 2],
];

/// The 8 canonical cube corners around the origin.
///
/// Built once at startup; rendering only ever derives rotated copies,
/// the canonical set is never mutated.
#[derive(Debug, Clone)]
pub struct Cube {
    vertices: [Point3<f64>; 8],
}

impl Cube {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let hd = depth / 2.0;

        Self {
            vertices: [
                Point3::new(-hw, -hh, -hd), // 0 - left  bottom front
                Point3::new(hw, -hh, -hd),  // 1 - right bottom front
                Point3::new(hw, hh, -hd),   // 2 - right top    front
                Point3::new(-hw, hh, -hd),  // 3 - left  top    front
                Point3::new(-hw, -hh, hd),  // 4 - left  bottom back
                Point3::new(hw, -hh, hd),   // 5 - right bottom back
                Point3::new(hw, hh, hd),    // 6 - right top    back
                Point3::new(-hw, hh, hd),   // 7 - left  top    back
            ],
        }
    }

    /// Cube with equal extents on all three axes
    pub fn with_edge(size: f64) -> Self {
        Self::new(size, size, size)
    }

    pub fn vertices(&self) -> &[Point3<f64>; 8] {
        &self.vertices
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::with_edge(4.0)
    }
}
