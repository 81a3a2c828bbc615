use std::fmt;

use thiserror::Error;

use crate::math::Point3;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CoonsError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// One of the four corners of a patch, named by its `(r, s)` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// `(r, s) = (0, 0)`
    P00,
    /// `(r, s) = (1, 0)`
    P10,
    /// `(r, s) = (1, 1)`
    P11,
    /// `(r, s) = (0, 1)`
    P01,
}

impl Corner {
    /// All corners in counter-clockwise order starting at the origin.
    pub const ALL: [Corner; 4] = [Corner::P00, Corner::P10, Corner::P11, Corner::P01];

    /// Returns the `(r, s)` parameters of the corner.
    #[must_use]
    pub fn params(self) -> (f64, f64) {
        match self {
            Corner::P00 => (0.0, 0.0),
            Corner::P10 => (1.0, 0.0),
            Corner::P11 => (1.0, 1.0),
            Corner::P01 => (0.0, 1.0),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::P00 => "p00",
            Corner::P10 => "p10",
            Corner::P11 => "p11",
            Corner::P01 => "p01",
        };
        f.write_str(name)
    }
}

/// Errors raised while assembling a patch from its inputs.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(
        "patch needs four edges or four corners, got {curves} edge(s) and {corners} corner(s)"
    )]
    IncompleteBoundary { curves: usize, corners: usize },

    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("open corner {corner}: {expected} vs {found} (distance {distance:e})")]
    OpenCorner {
        corner: Corner,
        expected: Point3,
        found: Point3,
        distance: f64,
    },

    #[error("parameter sequences differ in length: r has {r}, s has {s}")]
    ParameterLengthMismatch { r: usize, s: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`CoonsError`].
pub type Result<T> = std::result::Result<T, CoonsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_names() {
        let names: Vec<String> = Corner::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["p00", "p10", "p11", "p01"]);
    }

    #[test]
    fn open_corner_message_names_the_corner() {
        let err: CoonsError = GeometryError::OpenCorner {
            corner: Corner::P11,
            expected: Point3::new(1.0, 1.0, 0.0),
            found: Point3::new(2.0, 1.0, 0.0),
            distance: 1.0,
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("open corner p11"), "{msg}");
    }

    #[test]
    fn incomplete_boundary_message() {
        let err: CoonsError = ConfigurationError::IncompleteBoundary {
            curves: 1,
            corners: 1,
        }
        .into();
        assert!(matches!(err, CoonsError::Configuration(_)));
        assert!(err.to_string().contains("1 edge(s) and 1 corner(s)"));
    }
}
