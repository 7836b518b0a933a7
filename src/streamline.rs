// Core geometric types for tractography data: streamlines and bundles.
// A streamline is an ordered sequence of 3D points tracing a fiber path, stored
// as an (k, 3) array. Point order along the first axis is semantically
// meaningful, it encodes spatial progression along the fiber.

use ndarray::Array2;

use crate::error::{Result, TractmapsError};

/// An ordered sequence of 3D points, shape `(k, 3)` with `k >= 1`.
pub type Streamline = Array2<f32>;

/// An ordered collection of streamlines. Order among streamlines carries no
/// meaning beyond indexing.
pub type Bundle = Vec<Streamline>;

/// Build a streamline from a slice of point triples.
pub fn streamline_from_points(points: &[[f32; 3]]) -> Streamline {
    let mut arr = Array2::<f32>::zeros((points.len(), 3));
    for (row, point) in points.iter().enumerate() {
        for (col, coord) in point.iter().enumerate() {
            arr[[row, col]] = *coord;
        }
    }
    arr
}

/// Verify that a bundle is usable as input: at least one streamline, every
/// streamline has at least one point, and all points are 3D.
pub fn check_bundle(bundle: &Bundle) -> Result<()> {
    if bundle.is_empty() {
        return Err(TractmapsError::EmptyBundle);
    }
    for streamline in bundle {
        if streamline.nrows() == 0 {
            return Err(TractmapsError::EmptyStreamline);
        }
        if streamline.ncols() != 3 {
            return Err(TractmapsError::InvalidPointDimensions(streamline.ncols()));
        }
    }
    Ok(())
}
