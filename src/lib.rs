//! Transfinite interpolation of four-sided surface patches.
//!
//! A [`CoonsPatch`] maps the unit square `(r, s)` onto the surface bounded by
//! four curves (or four corners joined by lines), reproducing every boundary
//! exactly along the edges of the square.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{CoonsError, Corner, Result};
pub use geometry::{CoonsPatch, Curve, Line, Surface};
