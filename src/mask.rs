// Binary masking of volumetric data by an intensity window.
// The workflow-level NIfTI load and save around this operation are external
// collaborators; the mask itself is computed over an in-memory volume.

use ndarray::ArrayD;

use crate::error::{Result, TractmapsError};

/// Compute a binary mask over `data`: an element is 1 where
/// `lower < v && v < upper`, 0 elsewhere (both bounds strict).
///
/// Fails with [`TractmapsError::InvalidMaskBounds`] if `lower >= upper`; no
/// output is produced in that case.
pub fn binary_mask(data: &ArrayD<f32>, lower: f32, upper: f32) -> Result<ArrayD<u8>> {
    if lower >= upper {
        return Err(TractmapsError::InvalidMaskBounds);
    }
    Ok(data.mapv(|v| if v > lower && v < upper { 1_u8 } else { 0_u8 }))
}

/// Convenience form of [`binary_mask`] with an open upper bound.
pub fn binary_mask_lower(data: &ArrayD<f32>, lower: f32) -> Result<ArrayD<u8>> {
    binary_mask(data, lower, f32::INFINITY)
}
