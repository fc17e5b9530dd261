/// 3D rotation transform
use nalgebra::{Matrix4, Point3, Vector3};

/// Rotation angles around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Angles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Default for Angles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation matrix rotating around X, then Y, then Z.
///
/// Each axis rotation is applied to the output of the previous one,
/// so the composition order matters: swapping it changes the motion.
pub fn rotation_matrix(angles: &Angles) -> Matrix4<f64> {
    let rx = Matrix4::new_rotation(Vector3::new(angles.x, 0.0, 0.0));
    let ry = Matrix4::new_rotation(Vector3::new(0.0, angles.y, 0.0));
    let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, angles.z));

    rz * ry * rx
}

/// Rotate a single point through a rotation matrix
pub fn rotate_point(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
    matrix.transform_point(point)
}
