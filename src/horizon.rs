//! Input dispatch for the interactive bundle viewer.
//!
//! The viewer itself (windowing, interaction) and the per-format file parsers
//! are external collaborators. This module owns what sits between them: an
//! explicit mapping from file extension to input format, validation of the
//! rendering options, and the dispatch loop that loads each input and hands
//! the loaded objects to an injected [`Renderer`]. Environments without a
//! display use the provided [`StealthRenderer`].

use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayD};

use crate::colors::expand_color;
use crate::error::Result;
use crate::events::EventSink;
use crate::streamline::Bundle;

/// Supported viewer input formats, resolved once from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `.trk` / `.trx`: tractogram carrying its own spatial reference.
    Tractogram,
    /// `.dpy` / `.tck` / `.vtk` / `.vtp` / `.fib`: tractogram without a
    /// reference; the loader synthesizes a fallback header.
    TractogramNoReference,
    /// `.nii` / `.nii.gz` volume.
    Volume,
    /// `.pial` surface.
    PialSurface,
    /// `.gii` / `.gii.gz` surface.
    GiftiSurface,
    /// `.pam5` peaks.
    Peaks,
    /// `.npy` raw numeric array.
    NumericArray,
}

impl InputFormat {
    /// Resolve the input format from a file name.
    ///
    /// The two-part suffixes `.nii.gz` and `.gii.gz` are matched before the
    /// final extension, so a gzipped volume does not fall through as an
    /// unknown `.gz` file. Returns `None` for unrecognized extensions.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<InputFormat> {
        let name = path.as_ref().file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".nii.gz") || name.ends_with(".nii") {
            return Some(InputFormat::Volume);
        }
        if name.ends_with(".gii.gz") || name.ends_with(".gii") {
            return Some(InputFormat::GiftiSurface);
        }
        match name.rsplit('.').next()? {
            "trk" | "trx" => Some(InputFormat::Tractogram),
            "dpy" | "tck" | "vtk" | "vtp" | "fib" => Some(InputFormat::TractogramNoReference),
            "pial" => Some(InputFormat::PialSurface),
            "pam5" => Some(InputFormat::Peaks),
            "npy" => Some(InputFormat::NumericArray),
            _ => None,
        }
    }

    /// True for tractogram formats that need a synthesized fallback reference.
    pub fn needs_fallback_reference(&self) -> bool {
        matches!(self, InputFormat::TractogramNoReference)
    }
}

/// A loaded viewer input, ready to hand to the renderer.
#[derive(Debug, Clone)]
pub enum LoadedInput {
    Tractogram(Bundle),
    Volume(ArrayD<f32>),
    /// Surface mesh: vertices `(v, 3)`, faces `(f, 3)` as vertex indices.
    Surface {
        vertices: Array2<f32>,
        faces: Array2<i32>,
    },
    /// Peak directions per voxel, flattened to `(p, 3)`.
    Peaks(Array2<f32>),
    NumericArray(ArrayD<f32>),
}

/// File loaders supplied by the embedding application. Parsing NIfTI, GIFTI,
/// tractogram and peak formats is outside this crate.
pub trait InputLoader {
    fn load(&self, path: &Path, format: InputFormat) -> Result<LoadedInput>;
}

/// Rendering capability injected into the launcher.
pub trait Renderer {
    fn render(
        &mut self,
        inputs: &[LoadedInput],
        options: &HorizonOptions,
        colors: &ResolvedColors,
    ) -> Result<()>;
}

/// Renderer that draws nothing. Satisfies headless environments and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StealthRenderer;

impl Renderer for StealthRenderer {
    fn render(
        &mut self,
        _inputs: &[LoadedInput],
        _options: &HorizonOptions,
        _colors: &ResolvedColors,
    ) -> Result<()> {
        Ok(())
    }
}

/// Rendering and filtering options for the viewer launcher.
///
/// Color fields hold the raw user-supplied components: 1 value (broadcast to
/// all channels) or exactly 3. [`HorizonOptions::resolved_colors`] validates
/// and expands them before any input is loaded.
#[derive(Debug, Clone)]
pub struct HorizonOptions {
    /// Enable streamline clustering on load.
    pub cluster: bool,
    /// Clustering distance threshold in mm.
    pub cluster_thr: f32,
    /// Show clusters with average length greater than this, in mm.
    pub length_gt: f32,
    /// Show clusters with average length less than this, in mm.
    pub length_lt: f32,
    /// Show clusters with more streamlines than this.
    pub clusters_gt: usize,
    /// Show clusters with fewer streamlines than this.
    pub clusters_lt: usize,
    /// Show results in native coordinates.
    pub native_coords: bool,
    /// Background color of the scene, 1 or 3 components in [0, 1].
    pub bg_color: Vec<f32>,
    /// Enable BUAN along-tract highlighting.
    pub buan: bool,
    /// Highlight segments with p-values below this threshold.
    pub buan_thr: f32,
    /// Highlight color, 1 or 3 components in [0, 1].
    pub buan_highlight: Vec<f32>,
    /// Display binary volumes as ROI contours.
    pub roi_images: bool,
    /// ROI contour color, 1 or 3 components in [0, 1].
    pub roi_colors: Vec<f32>,
}

impl Default for HorizonOptions {
    fn default() -> HorizonOptions {
        HorizonOptions {
            cluster: false,
            cluster_thr: 15.0,
            length_gt: 0.0,
            length_lt: 1000.0,
            clusters_gt: 0,
            clusters_lt: 100_000_000,
            native_coords: false,
            bg_color: vec![0.0, 0.0, 0.0],
            buan: false,
            buan_thr: 0.5,
            buan_highlight: vec![1.0, 0.0, 0.0],
            roi_images: false,
            roi_colors: vec![1.0, 0.0, 0.0],
        }
    }
}

/// Color options after validation and expansion to RGB triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    pub bg_color: [f32; 3],
    pub buan_highlight: [f32; 3],
    pub roi_colors: [f32; 3],
}

impl HorizonOptions {
    /// Expand and check all color arguments. Fails fast with a configuration
    /// error if any color has neither 1 nor 3 components.
    pub fn resolved_colors(&self) -> Result<ResolvedColors> {
        Ok(ResolvedColors {
            bg_color: expand_color(&self.bg_color)?,
            buan_highlight: expand_color(&self.buan_highlight)?,
            roi_colors: expand_color(&self.roi_colors)?,
        })
    }
}

fn surface_is_empty(input: &LoadedInput) -> bool {
    match input {
        LoadedInput::Surface { vertices, faces } => {
            vertices.nrows() == 0 || faces.nrows() == 0
        }
        _ => false,
    }
}

/// Load every input file and forward the loaded objects to the renderer.
///
/// Options are validated before anything is loaded. Files with unrecognized
/// extensions are skipped with a warning, as are GIFTI surfaces without
/// geometry; loader failures propagate.
pub fn launch_horizon(
    input_files: &[PathBuf],
    options: &HorizonOptions,
    loader: &dyn InputLoader,
    renderer: &mut dyn Renderer,
    events: &dyn EventSink,
) -> Result<()> {
    let colors = options.resolved_colors()?;

    let mut inputs: Vec<LoadedInput> = Vec::with_capacity(input_files.len());
    for path in input_files {
        let format = match InputFormat::from_path(path) {
            Some(f) => f,
            None => {
                events.warning(&format!("Skipping unsupported file {}", path.display()));
                continue;
            }
        };
        events.info(&format!("Loading {}", path.display()));
        let loaded = loader.load(path, format)?;
        if format == InputFormat::GiftiSurface && surface_is_empty(&loaded) {
            events.warning(&format!(
                "Skipping surface without geometry: {}",
                path.display()
            ));
            continue;
        }
        inputs.push(loaded);
    }

    renderer.render(&inputs, options, &colors)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TractmapsError;

    #[test]
    fn extensions_resolve_to_their_formats() {
        assert_eq!(
            InputFormat::from_path("bundle.trk"),
            Some(InputFormat::Tractogram)
        );
        assert_eq!(
            InputFormat::from_path("bundle.tck"),
            Some(InputFormat::TractogramNoReference)
        );
        assert_eq!(
            InputFormat::from_path("t1.nii.gz"),
            Some(InputFormat::Volume)
        );
        assert_eq!(InputFormat::from_path("t1.nii"), Some(InputFormat::Volume));
        assert_eq!(
            InputFormat::from_path("lh.white.pial"),
            Some(InputFormat::PialSurface)
        );
        assert_eq!(
            InputFormat::from_path("mesh.gii.gz"),
            Some(InputFormat::GiftiSurface)
        );
        assert_eq!(InputFormat::from_path("peaks.pam5"), Some(InputFormat::Peaks));
        assert_eq!(
            InputFormat::from_path("values.npy"),
            Some(InputFormat::NumericArray)
        );
        assert_eq!(InputFormat::from_path("notes.txt"), None);
    }

    #[test]
    fn extension_matching_ignores_case() {
        assert_eq!(
            InputFormat::from_path("BUNDLE.TRK"),
            Some(InputFormat::Tractogram)
        );
    }

    #[test]
    fn only_no_reference_tractograms_need_a_fallback() {
        assert!(InputFormat::TractogramNoReference.needs_fallback_reference());
        assert!(!InputFormat::Tractogram.needs_fallback_reference());
        assert!(!InputFormat::Volume.needs_fallback_reference());
    }

    #[test]
    fn invalid_color_components_fail_validation() {
        let options = HorizonOptions {
            bg_color: vec![0.1, 0.2],
            ..HorizonOptions::default()
        };
        assert!(matches!(
            options.resolved_colors(),
            Err(TractmapsError::InvalidColorComponents(2))
        ));
    }

    #[test]
    fn single_component_colors_are_broadcast() {
        let options = HorizonOptions {
            bg_color: vec![0.5],
            ..HorizonOptions::default()
        };
        let colors = options.resolved_colors().unwrap();
        assert_eq!(colors.bg_color, [0.5, 0.5, 0.5]);
    }
}
