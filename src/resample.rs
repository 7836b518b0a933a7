//! Constant-arc-length resampling of streamlines.
//!
//! Resampling places `n` stations equidistantly along the cumulative arc
//! length of a streamline and linearly interpolates the coordinates at each
//! station. It works for both up- and down-sampling, and the first and last
//! resampled points coincide with the input's endpoints.

use ndarray::Array2;

use crate::streamline::Streamline;

/// Resample a streamline to exactly `n` points equidistant in arc length.
///
/// The input must have at least one point and `n` must be at least 1; callers
/// validate this (see [`crate::streamline::check_bundle`]). A single-point or
/// zero-length (all points identical) streamline resamples to `n` copies of
/// its first point.
pub fn resample(points: &Streamline, n: usize) -> Streamline {
    let num_input = points.nrows();
    let mut out = Array2::<f32>::zeros((n, 3));

    // Cumulative arc length at every input vertex.
    let mut arc = Vec::with_capacity(num_input);
    arc.push(0.0_f32);
    for i in 1..num_input {
        let mut sq_dist = 0.0_f32;
        for c in 0..3 {
            let d = points[[i, c]] - points[[i - 1, c]];
            sq_dist += d * d;
        }
        arc.push(arc[i - 1] + sq_dist.sqrt());
    }
    let total_len = arc[num_input - 1];

    if num_input == 1 || total_len <= 0.0 {
        for i in 0..n {
            for c in 0..3 {
                out[[i, c]] = points[[0, c]];
            }
        }
        return out;
    }

    // Walk the stations and the input segments in lockstep; both are ordered
    // by arc length, so the segment index only ever advances.
    let mut seg = 0_usize;
    for i in 0..n {
        let station = if n == 1 {
            0.0
        } else {
            total_len * i as f32 / (n - 1) as f32
        };
        while seg + 2 < num_input && arc[seg + 1] < station {
            seg += 1;
        }
        let seg_start = arc[seg];
        let seg_end = arc[seg + 1];
        let t = if seg_end > seg_start {
            ((station - seg_start) / (seg_end - seg_start)).max(0.0).min(1.0)
        } else {
            0.0
        };
        for c in 0..3 {
            out[[i, c]] = points[[seg, c]] + t * (points[[seg + 1, c]] - points[[seg, c]]);
        }
    }
    out
}
