//! Segment assignment maps for tractography bundles.
//!
//! The model bundle is reduced to a centroid path of `n_segments` points: every
//! model streamline is resampled to `n_segments` equidistant points along its
//! own arc length, then corresponding points are averaged across streamlines.
//! Each point of the target bundle is then labeled with the index of the
//! nearest centroid point, which partitions the target into `n_segments`
//! ordinal segments along the model skeleton. This is the segmentation scheme
//! used by the BUAN along-tract analysis framework.

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

use crate::error::{Result, TractmapsError};
use crate::resample::resample;
use crate::streamline::{check_bundle, Bundle};

/// Compute the centroid path of a bundle: `n_segments` points, the i-th being
/// the coordinate-wise mean of the i-th arc-length-resampled point across all
/// streamlines of the bundle.
pub fn centroid_path(model_bundle: &Bundle, n_segments: usize) -> Result<Array2<f32>> {
    if n_segments < 1 {
        return Err(TractmapsError::InvalidSegmentCount);
    }
    check_bundle(model_bundle)?;

    let mut centroids = Array2::<f32>::zeros((n_segments, 3));
    for streamline in model_bundle {
        centroids += &resample(streamline, n_segments);
    }
    centroids /= model_bundle.len() as f32;
    Ok(centroids)
}

/// Index of the centroid nearest to `point`. Ties go to the lowest index.
fn nearest_centroid(point: ArrayView1<f32>, centroids: &Array2<f32>) -> usize {
    let mut best_index = 0_usize;
    let mut best_sq_dist = f32::INFINITY;
    for (index, centroid) in centroids.outer_iter().enumerate() {
        let mut sq_dist = 0.0_f32;
        for c in 0..3 {
            let d = point[c] - centroid[c];
            sq_dist += d * d;
        }
        if sq_dist < best_sq_dist {
            best_index = index;
            best_sq_dist = sq_dist;
        }
    }
    best_index
}

/// Label every point of every streamline in `target_bundle` with the index of
/// the nearest point on the centroid path of `model_bundle`.
///
/// The result parallels the target bundle: one `Vec<usize>` per streamline,
/// one label per point, labels in `0..n_segments`. The model and target may be
/// the same bundle (the common case for visualization). All validation happens
/// before any computation; over valid inputs the function is total and
/// deterministic.
pub fn assignment_map(
    model_bundle: &Bundle,
    target_bundle: &Bundle,
    n_segments: usize,
) -> Result<Vec<Vec<usize>>> {
    check_bundle(target_bundle)?;
    let centroids = centroid_path(model_bundle, n_segments)?;

    // Centroids are fixed from here on; per-streamline labeling is independent.
    let labels = target_bundle
        .par_iter()
        .map(|streamline| {
            streamline
                .outer_iter()
                .map(|point| nearest_centroid(point, &centroids))
                .collect::<Vec<usize>>()
        })
        .collect();
    Ok(labels)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::streamline::streamline_from_points;
    use approx::assert_abs_diff_eq;

    fn line_bundle() -> Bundle {
        vec![
            streamline_from_points(&[[0., 0., 0.], [4., 0., 0.], [8., 0., 0.]]),
            streamline_from_points(&[[0., 2., 0.], [8., 2., 0.]]),
        ]
    }

    #[test]
    fn centroid_path_averages_resampled_streamlines() {
        let centroids = centroid_path(&line_bundle(), 3).unwrap();
        assert_eq!(centroids.nrows(), 3);
        // both streamlines span x in [0, 8], offset by 2 in y
        assert_abs_diff_eq!(centroids[[0, 0]], 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(centroids[[1, 0]], 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(centroids[[2, 0]], 8.0, epsilon = 1e-5);
        for i in 0..3 {
            assert_abs_diff_eq!(centroids[[i, 1]], 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn zero_segments_is_a_configuration_error() {
        assert!(matches!(
            assignment_map(&line_bundle(), &line_bundle(), 0),
            Err(TractmapsError::InvalidSegmentCount)
        ));
    }

    #[test]
    fn empty_model_bundle_is_rejected_before_computation() {
        let empty: Bundle = Vec::new();
        assert!(matches!(
            assignment_map(&empty, &line_bundle(), 4),
            Err(TractmapsError::EmptyBundle)
        ));
    }

    #[test]
    fn ties_break_toward_the_lower_segment_index() {
        // model: 2 points at x = 0 and x = 2; target point at x = 1 is
        // equidistant from both centroids.
        let model = vec![streamline_from_points(&[[0., 0., 0.], [2., 0., 0.]])];
        let target = vec![streamline_from_points(&[[1., 0., 0.]])];
        let labels = assignment_map(&model, &target, 2).unwrap();
        assert_eq!(labels, vec![vec![0]]);
    }

    #[test]
    fn a_single_point_target_streamline_is_labeled() {
        let model = vec![streamline_from_points(&[[0., 0., 0.], [10., 0., 0.]])];
        let target = vec![streamline_from_points(&[[9., 1., 0.]])];
        let labels = assignment_map(&model, &target, 5).unwrap();
        assert_eq!(labels, vec![vec![4]]);
    }
}
