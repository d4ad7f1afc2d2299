//! Core entry point for the formpdf crate.
//!
//! Content is described as an ordered list of [`ContentBlock`]s and laid out
//! onto fixed-size pages by [`PaginatedDocumentBuilder`].  The same input
//! always yields the same PDF bytes.

pub mod builder;
pub mod capture;
pub mod error;
pub mod export;
pub mod fonts;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod outline;
pub mod render;
pub mod wrap;

pub use builder::{build, Document, PaginatedDocumentBuilder, PlacedBlock};
pub use capture::{
    CapturedImage, Delivery, DirectorySink, DocumentSink, FileImageSource, ImageSource,
    MemoryImageSource, MemorySink,
};
pub use error::{
    BuildError, CaptureError, ConfigurationError, ExportError, InvalidBlockError,
    InvalidBlockReason, RenderError,
};
pub use export::{export_to_sink, FormCapture, FormExport, GalleryExport, SheetRows};
pub use geometry::PageGeometry;
pub use layout::{LayoutCursor, LayoutStyle};
pub use model::{ContentBlock, HorizontalAlignment, ImageBlock, ImageSizing, TextBlock};
