//! Color helpers for viewer options and assignment-map rendering.

use crate::error::{Result, TractmapsError};

/// Expand a 1- or 3-component color argument to an RGB triple.
///
/// A single value is broadcast to all three channels; any other component
/// count is a configuration error.
pub fn expand_color(components: &[f32]) -> Result<[f32; 3]> {
    match components {
        [v] => Ok([*v, *v, *v]),
        [r, g, b] => Ok([*r, *g, *b]),
        other => Err(TractmapsError::InvalidColorComponents(other.len())),
    }
}

/// Map per-point segment labels to RGB colors from a per-segment palette.
/// One color triple per point, parallel to `labels`.
pub fn segment_colors(
    labels: &[Vec<usize>],
    palette: &[[f32; 3]],
) -> Result<Vec<Vec<[f32; 3]>>> {
    if let Some(max_label) = labels.iter().flat_map(|l| l.iter().copied()).max() {
        if max_label >= palette.len() {
            return Err(TractmapsError::PaletteTooSmall);
        }
    }
    Ok(labels
        .iter()
        .map(|streamline_labels| {
            streamline_labels
                .iter()
                .map(|&label| palette[label])
                .collect()
        })
        .collect())
}
