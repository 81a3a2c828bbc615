/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default absolute tolerance for corner-consistency checks.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` when `a` and `b` are no further apart than `tolerance`.
#[must_use]
pub fn approx_equal(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    nalgebra::distance(a, b) <= tolerance
}

/// Linear blend `a * (1 - t) + b * t`.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_equal_within_tolerance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0 + 1e-12);
        assert!(approx_equal(&a, &b, TOLERANCE));
    }

    #[test]
    fn approx_equal_outside_tolerance() {
        let a = Point3::origin();
        let b = Point3::new(1.0, 0.0, 0.0);
        assert!(!approx_equal(&a, &b, TOLERANCE));
        assert!(approx_equal(&a, &b, 1.0));
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Point3::origin();
        let b = Point3::new(2.0, 0.0, 0.0);
        assert!((lerp(&a, &b, 0.5) - Point3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((lerp(&a, &b, 1.5) - Point3::new(3.0, 0.0, 0.0)).norm() < TOLERANCE);
    }
}
