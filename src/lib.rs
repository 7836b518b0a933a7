//! Rust implementation of segment assignment maps for tractography bundles.
//!
//! The focus of this package is the BUAN-style segmentation of fiber bundles:
//! labeling every point of a bundle with one of N ordinal segments along a
//! model bundle's centroid path. Supporting utilities cover arc-length
//! resampling, binary volume masking, and input dispatch for an injected
//! viewer backend.

pub mod assignment;
pub mod colors;
pub mod error;
pub mod events;
pub mod horizon;
pub mod mask;
pub mod resample;
pub mod streamline;

pub use assignment::{assignment_map, centroid_path};
pub use colors::{expand_color, segment_colors};
pub use error::{Result, TractmapsError};
pub use events::{EventSink, LogSink, SilentSink};
pub use horizon::{
    launch_horizon, HorizonOptions, InputFormat, InputLoader, LoadedInput, Renderer,
    ResolvedColors, StealthRenderer,
};
pub use mask::{binary_mask, binary_mask_lower};
pub use resample::resample;
pub use streamline::{check_bundle, streamline_from_points, Bundle, Streamline};
