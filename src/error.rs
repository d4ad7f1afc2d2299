//! Error taxonomy for the formpdf crate.
//!
//! Errors fall into two groups.  Per-block problems ([`InvalidBlockError`]) are
//! recoverable: the layout pass skips the block, records the error, and keeps
//! going.  Everything else aborts the operation that raised it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid page geometry or layout style.  Raised before any page is created.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// No page geometry was configured on the builder.
    #[error("page geometry is missing")]
    MissingGeometry,

    /// A page dimension is zero, negative, or not finite.
    #[error("invalid page {name}: {value}")]
    InvalidDimension {
        /// Name of the offending dimension.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },

    /// The margins leave no printable area.
    #[error("margin {margin} leaves no printable area on a {width} x {height} page")]
    MarginTooLarge {
        /// Configured margin.
        margin: f64,
        /// Page width.
        width: f64,
        /// Page height.
        height: f64,
    },

    /// A layout style value is out of range.
    #[error("invalid layout style value for {name}: {value}")]
    InvalidStyle {
        /// Name of the offending style field.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },
}

/// Why a single block could not be laid out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidBlockReason {
    /// The image reports a zero source dimension.
    #[error("image source dimensions must be positive (got {width}x{height})")]
    ZeroSourceDimension {
        /// Reported pixel width.
        width: u32,
        /// Reported pixel height.
        height: u32,
    },

    /// The reported dimensions describe more pixels than fit in memory.
    #[error("image dimensions {width}x{height} are too large")]
    DimensionsTooLarge {
        /// Reported pixel width.
        width: u32,
        /// Reported pixel height.
        height: u32,
    },

    /// The RGB buffer does not match the reported dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferMismatch {
        /// Bytes implied by the dimensions.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// A requested width or height is zero, negative, or not finite.
    #[error("invalid target {name}: {value}")]
    InvalidTargetSize {
        /// Which size was rejected.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },
}

/// A malformed block that was skipped during layout.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("block {block_index} ({kind}) skipped: {reason}")]
pub struct InvalidBlockError {
    /// Position of the block in the input sequence.
    pub block_index: usize,
    /// Short name of the block kind.
    pub kind: &'static str,
    /// What was wrong with the block.
    pub reason: InvalidBlockReason,
}

/// Failures while serializing a layout plan to PDF bytes.
#[derive(Error, Debug)]
pub enum RenderError {
    /// `lopdf` failed to encode an object or the document.
    #[error("failed to encode PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Stream compression or buffer writing failed.
    #[error("failed to write PDF stream: {0}")]
    Io(#[from] io::Error),

    /// A placement or bookmark refers to a page that was never created.
    #[error("page {0} does not exist in the rendered document")]
    MissingPage(usize),
}

/// Errors returned by [`crate::builder::PaginatedDocumentBuilder::build`].
#[derive(Error, Debug)]
pub enum BuildError {
    /// The geometry or style was rejected.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The plan could not be serialized.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failures in the image acquisition and document delivery capabilities.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// An image file or buffer could not be decoded.
    #[error("failed to decode image {name}: {source}")]
    Decode {
        /// Path or label of the image.
        name: String,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// An image file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors returned by the export helpers.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The gallery export was requested without any image.
    #[error("no images selected")]
    NoImages,

    /// Image acquisition or delivery failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// The document could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),
}
