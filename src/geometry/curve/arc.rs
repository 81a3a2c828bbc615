use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Curve;

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The curve parameter `t` in `[0, 1]` sweeps the
/// angle linearly from `start_angle` to `end_angle` (in radians) around
/// the normal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Angle at `t = 0`, in radians
    /// * `end_angle` - Angle at `t = 1`, in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// or the reference direction is not perpendicular to the normal.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the swept angle, `end_angle - start_angle`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Maps the curve parameter to an angle.
    fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + t * self.sweep()
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc(center={}, radius={}, start_angle={}, end_angle={})",
            self.center, self.radius, self.start_angle, self.end_angle
        )
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point3 {
        let angle = self.angle_at(t);
        let x = self.radius * angle.cos();
        let y = self.radius * angle.sin();
        self.center + self.ref_dir * x + self.binormal() * y
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn clone_box(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn quarter_arc() -> Arc {
        Arc::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2).unwrap()
    }

    #[test]
    fn evaluate_endpoints() {
        let a = quarter_arc();
        assert!((a.evaluate(0.0) - Point3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((a.evaluate(1.0) - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn evaluate_stays_on_circle() {
        let a = quarter_arc();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let r = (a.evaluate(t) - a.center()).norm();
            assert!((r - 2.0).abs() < 1e-12, "t={t}, r={r}");
        }
    }

    #[test]
    fn reversed_sweep() {
        let a = Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), PI, 0.0).unwrap();
        assert!((a.evaluate(0.0) - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((a.evaluate(0.5) - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((a.sweep() + PI).abs() < TOLERANCE);
    }

    #[test]
    fn normalizes_frame_vectors() {
        let a = Arc::new(
            Point3::origin(),
            1.0,
            Vector3::new(0.0, 0.0, 3.0),
            Vector3::new(5.0, 0.0, 0.0),
            0.0,
            FRAC_PI_2,
        )
        .unwrap();
        assert!((a.normal().norm() - 1.0).abs() < TOLERANCE);
        assert!((a.evaluate(0.0) - Point3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn invalid_radius() {
        let r = Arc::new(Point3::origin(), 0.0, Vector3::z(), Vector3::x(), 0.0, PI);
        assert!(r.is_err());
    }

    #[test]
    fn zero_normal() {
        let r = Arc::new(Point3::origin(), 1.0, Vector3::zeros(), Vector3::x(), 0.0, PI);
        assert!(r.is_err());
    }

    #[test]
    fn non_perpendicular_ref_dir() {
        let r = Arc::new(
            Point3::origin(),
            1.0,
            Vector3::z(),
            Vector3::new(1.0, 0.0, 1.0),
            0.0,
            PI,
        );
        assert!(r.is_err());
    }
}
