/// Harmonized spin: time-varying rotation angles from a single scalar
use crate::transform::Angles;

/// Angles as a pure function of a monotonically increasing factor.
///
/// Several sine and cosine waves with different frequencies and amplitudes
/// combine into a rich, non-uniform tumbling motion. The amplitudes read
/// like degrees but the sums are fed to the rotation as radians; the
/// resulting fast tumble is the intended look.
pub fn harmonized_angles(factor: f64) -> Angles {
    Angles {
        x: (0.01 * factor).sin() * 40.0 + (0.005 * factor).cos() * 30.0,
        y: (0.015 * factor).sin() * 50.0 + (0.01 * factor).cos() * 20.0,
        z: (0.02 * factor).sin() * 60.0 + (0.02 * factor).cos() * 10.0,
    }
}

/// Animation state: the factor scalar and its fixed per-frame step.
///
/// Angles are recomputed from the factor every tick rather than
/// incremented, so no accumulation error can build up.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    factor: f64,
    step: f64,
}

impl Spin {
    pub const DEFAULT_STEP: f64 = 0.1;

    pub fn new(step: f64) -> Self {
        Self { factor: 0.0, step }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Current rotation angles for this point in the animation
    pub fn angles(&self) -> Angles {
        harmonized_angles(self.factor)
    }

    /// Move the animation forward by one frame
    pub fn advance(&mut self) {
        self.factor += self.step;
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_angles_at_factor_zero() {
        // sin terms vanish, cos terms contribute their full amplitude
        let angles = harmonized_angles(0.0);
        assert!((angles.x - 30.0).abs() < TOLERANCE);
        assert!((angles.y - 20.0).abs() < TOLERANCE);
        assert!((angles.z - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_deterministic_for_equal_factors() {
        for factor in [0.0, 0.1, 17.3, 5000.0] {
            assert_eq!(harmonized_angles(factor), harmonized_angles(factor));
        }
    }

    #[test]
    fn test_advance_moves_factor_by_step() {
        let mut spin = Spin::new(0.1);
        assert_eq!(spin.factor(), 0.0);
        spin.advance();
        spin.advance();
        assert!((spin.factor() - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_spin_angles_match_free_function() {
        let mut spin = Spin::default();
        for _ in 0..10 {
            spin.advance();
        }
        assert_eq!(spin.angles(), harmonized_angles(spin.factor()));
    }
}
