//! Document construction entry points for the formpdf crate.

use log::{debug, warn};

use crate::error::{BuildError, ConfigurationError, InvalidBlockError};
use crate::geometry::PageGeometry;
use crate::layout::{self, LayoutStyle};
use crate::model::ContentBlock;
use crate::render::{self, RenderOptions};

/// Where a block ended up in the finished document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedBlock {
    /// Index of the block in the input sequence.
    pub block_index: usize,
    /// Zero-based page index.
    pub page: usize,
    /// Offset of the block's top edge from the top of the page, in millimetres.
    pub top: f64,
    /// Rendered height in millimetres.
    pub height: f64,
}

/// A finished, paginated PDF document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    bytes: Vec<u8>,
    page_count: usize,
    placements: Vec<PlacedBlock>,
    warnings: Vec<InvalidBlockError>,
}

impl Document {
    /// Returns the PDF bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the document and returns the PDF bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns where each rendered block was placed, in input order.
    pub fn placements(&self) -> &[PlacedBlock] {
        &self.placements
    }

    /// Returns the blocks that were skipped because they were malformed.
    pub fn warnings(&self) -> &[InvalidBlockError] {
        &self.warnings
    }
}

/// Builder for paginated documents.
///
/// Geometry has no default: building without [`with_geometry`] fails with
/// [`ConfigurationError::MissingGeometry`].  The builder is not consumed by
/// [`build`], so one configuration can serve many exports.
///
/// [`with_geometry`]: PaginatedDocumentBuilder::with_geometry
/// [`build`]: PaginatedDocumentBuilder::build
#[derive(Clone, Debug, Default)]
pub struct PaginatedDocumentBuilder {
    geometry: Option<PageGeometry>,
    style: LayoutStyle,
    title: Option<String>,
    outline: bool,
}

impl PaginatedDocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page geometry used for newly created documents.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Sets the typographic style.
    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the title stored in the document information dictionary.
    pub fn with_title(mut self, title: impl Into<Option<String>>) -> Self {
        self.title = title.into();
        self
    }

    /// Turns every heading into a bookmark.
    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    /// Returns the configured geometry, if any.
    pub fn geometry(&self) -> Option<&PageGeometry> {
        self.geometry.as_ref()
    }

    /// Returns the configured style.
    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Lays out and renders `blocks`.
    ///
    /// Configuration problems are returned before any page is created.
    /// Malformed blocks do not fail the build; they are listed in
    /// [`Document::warnings`].
    pub fn build(&self, blocks: &[ContentBlock]) -> Result<Document, BuildError> {
        let geometry = self.geometry.ok_or(ConfigurationError::MissingGeometry)?;
        let plan = layout::paginate(blocks, &geometry, &self.style)?;

        let options = RenderOptions {
            title: self.title.clone(),
            outline: self.outline,
        };
        let bytes = render::render_pdf(&plan, &geometry, &options)?;

        if !plan.warnings.is_empty() {
            warn!(
                "built document with {} skipped block(s) out of {}",
                plan.warnings.len(),
                blocks.len()
            );
        }
        debug!(
            "built {} page(s) from {} block(s)",
            plan.page_count,
            blocks.len()
        );

        let placements = plan
            .placements
            .iter()
            .map(|placement| PlacedBlock {
                block_index: placement.block_index,
                page: placement.page,
                top: placement.top,
                height: placement.height,
            })
            .collect();

        Ok(Document {
            bytes,
            page_count: plan.page_count,
            placements,
            warnings: plan.warnings,
        })
    }
}

/// Builds `blocks` on `geometry` with the default style.
pub fn build(blocks: &[ContentBlock], geometry: PageGeometry) -> Result<Document, BuildError> {
    PaginatedDocumentBuilder::new()
        .with_geometry(geometry)
        .build(blocks)
}
