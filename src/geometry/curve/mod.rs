mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use std::fmt;

use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The nominal `[0, 1]` domain shared by all boundary curves.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns whether `t` lies inside the domain (inclusive).
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }
}

/// Trait for parametric curves in 3D space.
///
/// Curves are parameterised over `t` in `[0, 1]`. Evaluation is total:
/// parameters outside the domain are extrapolated, never clamped.
pub trait Curve: fmt::Debug + Send + Sync {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// Evaluates the curve at every parameter in `ts`, in order.
    fn evaluate_many(&self, ts: &[f64]) -> Vec<Point3> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Human-readable identification of the curve.
    fn describe(&self) -> String;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    /// Returns an owned copy of the curve behind a new box.
    fn clone_box(&self) -> Box<dyn Curve>;
}

impl Clone for Box<dyn Curve> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_domain_contains_endpoints() {
        let d = CurveDomain::unit();
        assert!(d.contains(0.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.5));
    }

    #[test]
    fn boxed_curve_clone_is_independent() {
        let a: Box<dyn Curve> = Box::new(Line::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
        ));
        let b = a.clone();
        assert_eq!(a.describe(), b.describe());
        assert_eq!(a.evaluate(0.5), b.evaluate(0.5));
    }
}
