mod coons_patch;

pub use coons_patch::{CoonsPatch, CoonsPatchBuilder, DefinedBy, PatchParams};

use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the r parameter range.
    pub r_min: f64,
    /// End of the r parameter range.
    pub r_max: f64,
    /// Start of the s parameter range.
    pub s_min: f64,
    /// End of the s parameter range.
    pub s_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(r_min: f64, r_max: f64, s_min: f64, s_max: f64) -> Self {
        Self {
            r_min,
            r_max,
            s_min,
            s_max,
        }
    }

    /// The unit square `[0, 1] x [0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Returns whether `(r, s)` lies inside the domain (inclusive).
    #[must_use]
    pub fn contains(&self, r: f64, s: f64) -> bool {
        (self.r_min..=self.r_max).contains(&r) && (self.s_min..=self.s_max).contains(&s)
    }
}

/// Trait for parametric surfaces in 3D space.
///
/// Evaluation is total: `(r, s)` outside the domain is extrapolated with the
/// same mapping. Callers that need clamping must clamp themselves.
pub trait Surface: fmt::Debug + Send + Sync {
    /// Evaluates the surface at parameters `(r, s)`.
    fn evaluate(&self, r: f64, s: f64) -> Point3;

    /// Evaluates the surface at each pair `(rs[i], ss[i])`.
    ///
    /// Every element is computed through [`Surface::evaluate`], so batched
    /// results are bit-identical to the scalar ones.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterLengthMismatch`] if `rs` and `ss`
    /// differ in length.
    fn evaluate_many(&self, rs: &[f64], ss: &[f64]) -> Result<Vec<Point3>> {
        if rs.len() != ss.len() {
            return Err(GeometryError::ParameterLengthMismatch {
                r: rs.len(),
                s: ss.len(),
            }
            .into());
        }
        tracing::trace!(count = rs.len(), "batched surface evaluation");
        Ok(rs
            .iter()
            .zip(ss)
            .map(|(&r, &s)| self.evaluate(r, s))
            .collect())
    }

    /// Human-readable identification of the surface.
    fn describe(&self) -> String;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::unit()
    }
}
