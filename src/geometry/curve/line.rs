use std::fmt;

use crate::math::{lerp, Point3, Vector3};

use super::Curve;

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = p0 * (1 - t) + p1 * t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p0: Point3,
    p1: Point3,
}

impl Line {
    /// Creates a new line from its start and end points.
    ///
    /// Coincident endpoints are allowed; the line then evaluates to a single point.
    #[must_use]
    pub fn new(p0: Point3, p1: Point3) -> Self {
        Self { p0, p1 }
    }

    /// Returns the start point (`t = 0`).
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.p0
    }

    /// Returns the end point (`t = 1`).
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.p1
    }

    /// Returns the vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.p1 - self.p0
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line(p0={}, p1={})", self.p0, self.p1)
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        lerp(&self.p0, &self.p1, t)
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn clone_box(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn x_line() -> Line {
        Line::new(Point3::new(1.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0))
    }

    #[test]
    fn evaluate_endpoints() {
        let l = x_line();
        assert!((l.evaluate(0.0) - l.start()).norm() < TOLERANCE);
        assert!((l.evaluate(1.0) - l.end()).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_midpoint() {
        let p = x_line().evaluate(0.5);
        assert!((p - Point3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_outside_range_extrapolates() {
        let l = x_line();
        assert!((l.evaluate(-0.5) - Point3::new(0.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((l.evaluate(2.0) - Point3::new(5.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_many_matches_scalar() {
        let l = x_line();
        let ts = [0.0, 0.1, 0.7, 1.3];
        let pts = l.evaluate_many(&ts);
        assert_eq!(pts.len(), ts.len());
        for (p, &t) in pts.iter().zip(&ts) {
            assert_eq!(*p, l.evaluate(t));
        }
    }

    #[test]
    fn length_and_direction() {
        let l = x_line();
        assert!((l.length() - 2.0).abs() < TOLERANCE);
        assert!((l.direction() - Vector3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn describe_lists_endpoints() {
        let d = x_line().describe();
        assert!(d.starts_with("Line(p0="), "{d}");
        assert!(d.contains("p1="), "{d}");
    }
}
