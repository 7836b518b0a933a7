use quick_error::quick_error;
use std::io::Error as IOError;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum TractmapsError {
        /// A segment count of zero was requested.
        InvalidSegmentCount {
            display("Segment count must be at least 1")
        }

        /// A bundle with no streamlines was supplied.
        EmptyBundle {
            display("Bundle contains no streamlines")
        }

        /// A streamline with no points was supplied.
        EmptyStreamline {
            display("Streamline contains no points")
        }

        /// A point array whose second axis is not of length 3.
        InvalidPointDimensions(ncols: usize) {
            display("Streamline points must have 3 coordinates, found {}", ncols)
        }

        /// Mask bounds with lower >= upper.
        InvalidMaskBounds {
            display("The upper bound (less than) should be greater than the lower bound (greater than)")
        }

        /// A color argument with neither 1 nor 3 components.
        InvalidColorComponents(num_components: usize) {
            display("Colors can be defined with 1 or 3 values, found {}", num_components)
        }

        /// A segment color palette with fewer entries than there are segment labels.
        PaletteTooSmall {
            display("Color palette has fewer entries than segment labels")
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, TractmapsError>;
