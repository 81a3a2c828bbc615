use std::fmt;

use crate::error::{ConfigurationError, Corner, GeometryError, Result};
use crate::geometry::curve::{Curve, Line};
use crate::math::{approx_equal, Point3, TOLERANCE};

use super::Surface;

/// Parameters controlling patch construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchParams {
    /// Maximum distance allowed between the endpoints of adjacent edges
    /// meeting at a corner.
    pub tolerance: f64,
}

impl Default for PatchParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl PatchParams {
    /// Creates parameters with the given corner tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigurationError::InvalidTolerance(self.tolerance).into());
        }
        Ok(())
    }
}

/// How a patch was specified by its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinedBy {
    /// Four boundary curves.
    Edges,
    /// Four corner points joined by straight lines.
    Corners,
}

/// A surface defined by transfinite interpolation of four boundary curves.
///
/// ```text
///            north
///     p01 ----------- p11
///      |               |
/// west |               | east       s
///      |               |            ^
///     p00 ----------- p10           |
///            south                  +--> r
/// ```
///
/// South and north run in `r`, west and east run in `s`. The patch owns its
/// own copies of every curve and point, and is immutable once built.
#[derive(Debug, Clone)]
pub struct CoonsPatch {
    north: Box<dyn Curve>,
    east: Box<dyn Curve>,
    south: Box<dyn Curve>,
    west: Box<dyn Curve>,
    p00: Point3,
    p10: Point3,
    p11: Point3,
    p01: Point3,
    defined_by: DefinedBy,
    tolerance: f64,
}

impl CoonsPatch {
    /// Creates a patch from four boundary curves, using the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OpenCorner`] if adjacent edges do not meet.
    pub fn from_edges(
        north: &dyn Curve,
        east: &dyn Curve,
        south: &dyn Curve,
        west: &dyn Curve,
    ) -> Result<Self> {
        Self::from_edges_with_params(north, east, south, west, &PatchParams::default())
    }

    /// Creates a patch from four boundary curves.
    ///
    /// The corners are taken from the ends of `south` and `north`; the ends of
    /// `west` and `east` must agree with them within `params.tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTolerance`] for a bad tolerance, or
    /// [`GeometryError::OpenCorner`] for the first corner where adjacent edges
    /// do not meet.
    pub fn from_edges_with_params(
        north: &dyn Curve,
        east: &dyn Curve,
        south: &dyn Curve,
        west: &dyn Curve,
        params: &PatchParams,
    ) -> Result<Self> {
        params.validate()?;
        let tolerance = params.tolerance;

        let north = north.clone_box();
        let east = east.clone_box();
        let south = south.clone_box();
        let west = west.clone_box();

        let p00 = south.evaluate(0.0);
        let p10 = south.evaluate(1.0);
        let p01 = north.evaluate(0.0);
        let p11 = north.evaluate(1.0);

        check_corner(Corner::P00, &p00, &west.evaluate(0.0), tolerance)?;
        check_corner(Corner::P10, &p10, &east.evaluate(0.0), tolerance)?;
        check_corner(Corner::P01, &p01, &west.evaluate(1.0), tolerance)?;
        check_corner(Corner::P11, &p11, &east.evaluate(1.0), tolerance)?;

        tracing::debug!(tolerance, "coons patch defined by edges");

        Ok(Self {
            north,
            east,
            south,
            west,
            p00,
            p10,
            p11,
            p01,
            defined_by: DefinedBy::Edges,
            tolerance,
        })
    }

    /// Creates a patch from four corner points joined by straight edges.
    #[must_use]
    pub fn from_corners(p00: Point3, p10: Point3, p11: Point3, p01: Point3) -> Self {
        Self::corners_with_tolerance(p00, p10, p11, p01, TOLERANCE)
    }

    fn corners_with_tolerance(
        p00: Point3,
        p10: Point3,
        p11: Point3,
        p01: Point3,
        tolerance: f64,
    ) -> Self {
        tracing::debug!(tolerance, "coons patch defined by corners");
        Self {
            north: Box::new(Line::new(p01, p11)),
            east: Box::new(Line::new(p10, p11)),
            south: Box::new(Line::new(p00, p10)),
            west: Box::new(Line::new(p00, p01)),
            p00,
            p10,
            p11,
            p01,
            defined_by: DefinedBy::Corners,
            tolerance,
        }
    }

    /// Returns a builder for assembling a patch from optional parts.
    #[must_use]
    pub fn builder() -> CoonsPatchBuilder {
        CoonsPatchBuilder::default()
    }

    /// Returns the north boundary (`s = 1`).
    #[must_use]
    pub fn north(&self) -> &dyn Curve {
        self.north.as_ref()
    }

    /// Returns the east boundary (`r = 1`).
    #[must_use]
    pub fn east(&self) -> &dyn Curve {
        self.east.as_ref()
    }

    /// Returns the south boundary (`s = 0`).
    #[must_use]
    pub fn south(&self) -> &dyn Curve {
        self.south.as_ref()
    }

    /// Returns the west boundary (`r = 0`).
    #[must_use]
    pub fn west(&self) -> &dyn Curve {
        self.west.as_ref()
    }

    #[must_use]
    pub fn p00(&self) -> &Point3 {
        &self.p00
    }

    #[must_use]
    pub fn p10(&self) -> &Point3 {
        &self.p10
    }

    #[must_use]
    pub fn p11(&self) -> &Point3 {
        &self.p11
    }

    #[must_use]
    pub fn p01(&self) -> &Point3 {
        &self.p01
    }

    /// Returns the corner point at `corner`.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> &Point3 {
        match corner {
            Corner::P00 => &self.p00,
            Corner::P10 => &self.p10,
            Corner::P11 => &self.p11,
            Corner::P01 => &self.p01,
        }
    }

    /// Returns how the patch was specified.
    #[must_use]
    pub fn defined_by(&self) -> DefinedBy {
        self.defined_by
    }

    /// Returns whether the patch was built from four corner points.
    #[must_use]
    pub fn is_defined_by_corners(&self) -> bool {
        self.defined_by == DefinedBy::Corners
    }

    /// Returns the corner tolerance the patch was built with.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Checks that the endpoint `found` of one edge coincides with `expected`.
fn check_corner(corner: Corner, expected: &Point3, found: &Point3, tolerance: f64) -> Result<()> {
    if approx_equal(expected, found, tolerance) {
        return Ok(());
    }
    let distance = nalgebra::distance(expected, found);
    tracing::warn!(%corner, distance, tolerance, "coons patch has an open corner");
    Err(GeometryError::OpenCorner {
        corner,
        expected: *expected,
        found: *found,
        distance,
    }
    .into())
}

impl fmt::Display for CoonsPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.defined_by {
            DefinedBy::Corners => write!(
                f,
                "CoonsPatch(p00={}, p10={}, p11={}, p01={})",
                self.p00, self.p10, self.p11, self.p01
            ),
            DefinedBy::Edges => write!(
                f,
                "CoonsPatch(north={}, east={}, south={}, west={})",
                self.north.describe(),
                self.east.describe(),
                self.south.describe(),
                self.west.describe()
            ),
        }
    }
}

impl Surface for CoonsPatch {
    fn evaluate(&self, r: f64, s: f64) -> Point3 {
        let south_r = self.south.evaluate(r).coords;
        let north_r = self.north.evaluate(r).coords;
        let west_s = self.west.evaluate(s).coords;
        let east_s = self.east.evaluate(s).coords;

        let bilinear = self.p00.coords * ((1.0 - r) * (1.0 - s))
            + self.p01.coords * ((1.0 - r) * s)
            + self.p10.coords * (r * (1.0 - s))
            + self.p11.coords * (r * s);

        Point3::from(
            south_r * (1.0 - s) + north_r * s + west_s * (1.0 - r) + east_s * r - bilinear,
        )
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Assembles a [`CoonsPatch`] from optional edges and corners.
///
/// Four edges take precedence over corners; otherwise four corners are
/// required.
#[derive(Debug, Clone, Default)]
pub struct CoonsPatchBuilder {
    north: Option<Box<dyn Curve>>,
    east: Option<Box<dyn Curve>>,
    south: Option<Box<dyn Curve>>,
    west: Option<Box<dyn Curve>>,
    p00: Option<Point3>,
    p10: Option<Point3>,
    p11: Option<Point3>,
    p01: Option<Point3>,
    params: PatchParams,
}

impl CoonsPatchBuilder {
    #[must_use]
    pub fn north(mut self, curve: &dyn Curve) -> Self {
        self.north = Some(curve.clone_box());
        self
    }

    #[must_use]
    pub fn east(mut self, curve: &dyn Curve) -> Self {
        self.east = Some(curve.clone_box());
        self
    }

    #[must_use]
    pub fn south(mut self, curve: &dyn Curve) -> Self {
        self.south = Some(curve.clone_box());
        self
    }

    #[must_use]
    pub fn west(mut self, curve: &dyn Curve) -> Self {
        self.west = Some(curve.clone_box());
        self
    }

    #[must_use]
    pub fn p00(mut self, point: Point3) -> Self {
        self.p00 = Some(point);
        self
    }

    #[must_use]
    pub fn p10(mut self, point: Point3) -> Self {
        self.p10 = Some(point);
        self
    }

    #[must_use]
    pub fn p11(mut self, point: Point3) -> Self {
        self.p11 = Some(point);
        self
    }

    #[must_use]
    pub fn p01(mut self, point: Point3) -> Self {
        self.p01 = Some(point);
        self
    }

    /// Overrides the construction parameters.
    #[must_use]
    pub fn params(mut self, params: PatchParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the patch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::IncompleteBoundary`] if neither all four
    /// edges nor all four corners were given, [`ConfigurationError::InvalidTolerance`]
    /// for a bad tolerance, or [`GeometryError::OpenCorner`] if the edges do
    /// not meet.
    pub fn build(self) -> Result<CoonsPatch> {
        if let (Some(north), Some(east), Some(south), Some(west)) =
            (&self.north, &self.east, &self.south, &self.west)
        {
            return CoonsPatch::from_edges_with_params(
                &**north,
                &**east,
                &**south,
                &**west,
                &self.params,
            );
        }

        if let (Some(p00), Some(p10), Some(p11), Some(p01)) =
            (self.p00, self.p10, self.p11, self.p01)
        {
            self.params.validate()?;
            return Ok(CoonsPatch::corners_with_tolerance(
                p00,
                p10,
                p11,
                p01,
                self.params.tolerance,
            ));
        }

        let curves = [&self.north, &self.east, &self.south, &self.west]
            .iter()
            .filter(|c| c.is_some())
            .count();
        let corners = [self.p00, self.p10, self.p11, self.p01]
            .iter()
            .filter(|p| p.is_some())
            .count();
        Err(ConfigurationError::IncompleteBoundary { curves, corners }.into())
    }
}
