//! Content blocks consumed by the layout pass.
//!
//! The types in this module describe already-decoded content: plain strings
//! and RGB pixel buffers.  Producing them (reading files, talking to a camera,
//! parsing spreadsheets) is the job of the callers, see [`crate::capture`] and
//! [`crate::export`].

/// Horizontal placement of a heading, paragraph, or image inside the
/// printable area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Flush with the left margin.
    #[default]
    Left,
    /// Centered between the margins.
    Center,
    /// Flush with the right margin.
    Right,
}

impl HorizontalAlignment {
    /// Returns the x offset of an item of `width` inside a slot starting at
    /// `left` that is `available` wide.
    pub(crate) fn offset(self, left: f64, available: f64, width: f64) -> f64 {
        match self {
            Self::Left => left,
            Self::Center => left + (available - width) / 2.0,
            Self::Right => left + available - width,
        }
    }
}

/// Text content of headings and paragraphs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBlock {
    text: String,
    alignment: HorizontalAlignment,
}

impl TextBlock {
    /// Creates a left-aligned text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: HorizontalAlignment::Left,
        }
    }

    /// Returns the raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the alignment and returns the updated block.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// How the rendered size of an image is derived.
///
/// A `width` of `None` stretches the image across the printable width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageSizing {
    /// Height follows the source aspect ratio.
    AspectFit {
        /// Rendered width in millimetres.
        width: Option<f64>,
    },
    /// Both sides are fixed; the aspect ratio is ignored.
    Fixed {
        /// Rendered width in millimetres.
        width: Option<f64>,
        /// Rendered height in millimetres.
        height: f64,
    },
}

impl Default for ImageSizing {
    fn default() -> Self {
        Self::AspectFit { width: None }
    }
}

/// Decoded image content together with its sizing and alignment.
///
/// `pixels` holds 8-bit RGB samples in row-major order, so a valid block has
/// exactly `source_width * source_height * 3` bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBlock {
    pixels: Vec<u8>,
    source_width: u32,
    source_height: u32,
    sizing: ImageSizing,
    alignment: HorizontalAlignment,
}

impl ImageBlock {
    /// Creates an image block from RGB pixels and their dimensions.
    pub fn new(pixels: impl Into<Vec<u8>>, source_width: u32, source_height: u32) -> Self {
        Self {
            pixels: pixels.into(),
            source_width,
            source_height,
            sizing: ImageSizing::default(),
            alignment: HorizontalAlignment::Left,
        }
    }

    /// Returns the RGB pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the source width in pixels.
    pub fn source_width(&self) -> u32 {
        self.source_width
    }

    /// Returns the source height in pixels.
    pub fn source_height(&self) -> u32 {
        self.source_height
    }

    /// Returns the sizing mode.
    pub fn sizing(&self) -> ImageSizing {
        self.sizing
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the sizing mode and returns the updated block.
    pub fn with_sizing(mut self, sizing: ImageSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Renders at `width` millimetres, keeping the aspect ratio.
    pub fn with_width(self, width: f64) -> Self {
        self.with_sizing(ImageSizing::AspectFit { width: Some(width) })
    }

    /// Renders into a fixed `width` x `height` box.
    pub fn with_fixed_size(self, width: f64, height: f64) -> Self {
        self.with_sizing(ImageSizing::Fixed {
            width: Some(width),
            height,
        })
    }

    /// Sets the alignment and returns the updated block.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Individual units of content placed on the pages, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    /// Large title text, wrapped to the printable width.
    Heading(TextBlock),
    /// Body text, wrapped to the printable width.
    Paragraph(TextBlock),
    /// Raster image.
    Image(ImageBlock),
    /// One row of tabular data on a single line.
    RecordLine(String),
    /// Vertical gap in millimetres.
    Spacer(f64),
    /// Starts a new page unless the current one is still empty.
    PageBreak,
}

impl ContentBlock {
    /// Convenience helper for a centered heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(TextBlock::new(text).with_alignment(HorizontalAlignment::Center))
    }

    /// Convenience helper for a left-aligned paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(TextBlock::new(text))
    }

    /// Convenience helper for an image block.
    pub fn image(image: ImageBlock) -> Self {
        Self::Image(image)
    }

    /// Convenience helper for a record line.
    pub fn record_line(text: impl Into<String>) -> Self {
        Self::RecordLine(text.into())
    }

    /// Convenience helper for a vertical gap.
    pub fn spacer(height: f64) -> Self {
        Self::Spacer(height)
    }

    /// Convenience helper that yields an explicit page break block.
    pub fn page_break() -> Self {
        Self::PageBreak
    }

    /// Short name used in warnings and log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Paragraph(_) => "paragraph",
            Self::Image(_) => "image",
            Self::RecordLine(_) => "record line",
            Self::Spacer(_) => "spacer",
            Self::PageBreak => "page break",
        }
    }
}
