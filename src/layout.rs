//! Single-pass pagination of content blocks.
//!
//! [`paginate`] walks the blocks in order, measures each one against the page
//! geometry, and threads a [`LayoutCursor`] value through the pass.  A block
//! that would cross the bottom margin is moved to a fresh page before it is
//! placed; blocks are never split.  The result is a [`LayoutPlan`] that the
//! renderer turns into PDF bytes.

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{ConfigurationError, InvalidBlockError, InvalidBlockReason};
use crate::fonts;
use crate::geometry::PageGeometry;
use crate::model::{ContentBlock, HorizontalAlignment, ImageBlock, ImageSizing, TextBlock};
use crate::wrap::wrap_text;

/// Typographic settings applied during layout.
///
/// Font sizes are in points, everything else in millimetres.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    /// Font size of headings.
    pub heading_font_size: f64,
    /// Font size of paragraphs.
    pub paragraph_font_size: f64,
    /// Font size of record lines.
    pub record_font_size: f64,
    /// Multiplier applied to the font size to obtain the text line height.
    pub line_height_factor: f64,
    /// Fixed height of a record line.
    pub record_line_height: f64,
    /// Gap inserted after every placed block.
    pub block_spacing: f64,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            heading_font_size: 16.0,
            paragraph_font_size: 12.0,
            record_font_size: 12.0,
            line_height_factor: 1.15,
            record_line_height: 10.0,
            block_spacing: 0.0,
        }
    }
}

impl LayoutStyle {
    /// Sets the inter-block spacing and returns the updated style.
    pub fn with_block_spacing(mut self, spacing: f64) -> Self {
        self.block_spacing = spacing;
        self
    }

    /// Sets the record line height and returns the updated style.
    pub fn with_record_line_height(mut self, height: f64) -> Self {
        self.record_line_height = height;
        self
    }

    /// Checks that every size is positive and the spacing is not negative.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let positive = [
            ("heading_font_size", self.heading_font_size),
            ("paragraph_font_size", self.paragraph_font_size),
            ("record_font_size", self.record_font_size),
            ("line_height_factor", self.line_height_factor),
            ("record_line_height", self.record_line_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidStyle { name, value });
            }
        }

        if !self.block_spacing.is_finite() || self.block_spacing < 0.0 {
            return Err(ConfigurationError::InvalidStyle {
                name: "block_spacing",
                value: self.block_spacing,
            });
        }

        Ok(())
    }

    fn line_height(&self, font_size: f64) -> f64 {
        fonts::pt_to_mm(font_size) * self.line_height_factor
    }
}

/// Position of the layout pass: the page being filled and the vertical
/// offset of the next block, measured from the top edge of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCursor {
    /// Zero-based page index.
    pub page: usize,
    /// Offset from the top edge in millimetres.
    pub offset: f64,
    /// Whether anything has been placed on the current page.
    pub page_used: bool,
}

impl LayoutCursor {
    /// Cursor at the top margin of the first page.
    pub fn start(geometry: &PageGeometry) -> Self {
        Self {
            page: 0,
            offset: geometry.top(),
            page_used: false,
        }
    }

    /// Whether a block of `height` placed at the cursor would end past the
    /// bottom margin.  Landing exactly on the margin still fits.
    pub fn overflows(&self, height: f64, geometry: &PageGeometry) -> bool {
        self.offset + height > geometry.bottom_limit()
    }

    /// Cursor at the top margin of the following page.
    pub fn next_page(self, geometry: &PageGeometry) -> Self {
        Self {
            page: self.page + 1,
            offset: geometry.top(),
            page_used: false,
        }
    }

    /// Cursor after placing a block of `height` followed by `spacing`.
    pub fn advance(self, height: f64, spacing: f64) -> Self {
        Self {
            offset: self.offset + height + spacing,
            page_used: true,
            ..self
        }
    }
}

/// What a placement draws.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacedContent<'a> {
    /// Pre-wrapped text lines.
    Text {
        /// Lines in top-to-bottom order.
        lines: Vec<String>,
        /// Font size in points.
        font_size: f64,
        /// Distance between consecutive baselines.
        line_height: f64,
        /// Per-line horizontal alignment.
        alignment: HorizontalAlignment,
    },
    /// RGB pixels stretched over the placement box.
    Image {
        /// Source RGB samples.
        pixels: &'a [u8],
        /// Source width in pixels.
        source_width: u32,
        /// Source height in pixels.
        source_height: u32,
    },
}

/// A block placed on a page.  `x`/`top` locate the top-left corner of the
/// block's box, measured from the page's left and top edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<'a> {
    /// Index of the source block.
    pub block_index: usize,
    /// Zero-based page index.
    pub page: usize,
    /// Left edge of the box.
    pub x: f64,
    /// Top edge of the box.
    pub top: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
    /// Whether the block came from a heading.
    pub is_heading: bool,
    /// Content drawn inside the box.
    pub content: PlacedContent<'a>,
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan<'a> {
    /// Number of pages, always at least one.
    pub page_count: usize,
    /// Placements in input order.
    pub placements: Vec<Placement<'a>>,
    /// Blocks that were skipped.
    pub warnings: Vec<InvalidBlockError>,
}

/// Measured block ready for placement.
enum Measured<'a> {
    Box {
        x: f64,
        width: f64,
        height: f64,
        content: PlacedContent<'a>,
    },
    Gap(f64),
    Break,
}

/// Lays out `blocks` on pages described by `geometry`.
///
/// Invalid geometry or style aborts before any page exists.  Malformed blocks
/// are skipped and reported in [`LayoutPlan::warnings`].
pub fn paginate<'a>(
    blocks: &'a [ContentBlock],
    geometry: &PageGeometry,
    style: &LayoutStyle,
) -> Result<LayoutPlan<'a>, ConfigurationError> {
    geometry.validate()?;
    style.validate()?;

    let mut cursor = LayoutCursor::start(geometry);
    let mut placements = Vec::with_capacity(blocks.len());
    let mut warnings = Vec::new();

    for (block_index, block) in blocks.iter().enumerate() {
        let measured = match measure(block, geometry, style) {
            Ok(measured) => measured,
            Err(reason) => {
                let error = InvalidBlockError {
                    block_index,
                    kind: block.kind(),
                    reason,
                };
                warn!("{}", error);
                warnings.push(error);
                continue;
            }
        };

        match measured {
            Measured::Break => {
                if cursor.page_used {
                    cursor = cursor.next_page(geometry);
                    debug!("explicit page break before page {}", cursor.page + 1);
                }
            }
            Measured::Gap(height) => {
                if cursor.page_used {
                    cursor.offset += height;
                }
            }
            Measured::Box {
                x,
                width,
                height,
                content,
            } => {
                if cursor.page_used && cursor.overflows(height, geometry) {
                    cursor = cursor.next_page(geometry);
                    debug!(
                        "{} {} moved to page {}",
                        block.kind(),
                        block_index,
                        cursor.page + 1
                    );
                }

                placements.push(Placement {
                    block_index,
                    page: cursor.page,
                    x,
                    top: cursor.offset,
                    width,
                    height,
                    is_heading: matches!(block, ContentBlock::Heading(_)),
                    content,
                });
                cursor = cursor.advance(height, style.block_spacing);
            }
        }
    }

    Ok(LayoutPlan {
        page_count: cursor.page + 1,
        placements,
        warnings,
    })
}

fn measure<'a>(
    block: &'a ContentBlock,
    geometry: &PageGeometry,
    style: &LayoutStyle,
) -> Result<Measured<'a>, InvalidBlockReason> {
    match block {
        ContentBlock::Heading(text) => {
            Ok(measure_text(text, style.heading_font_size, geometry, style))
        }
        ContentBlock::Paragraph(text) => {
            Ok(measure_text(text, style.paragraph_font_size, geometry, style))
        }
        ContentBlock::RecordLine(text) => Ok(Measured::Box {
            x: geometry.left(),
            width: geometry.printable_width(),
            height: style.record_line_height,
            content: PlacedContent::Text {
                lines: vec![text.clone()],
                font_size: style.record_font_size,
                line_height: style.record_line_height,
                alignment: HorizontalAlignment::Left,
            },
        }),
        ContentBlock::Image(image) => measure_image(image, geometry),
        ContentBlock::Spacer(height) => {
            if height.is_finite() && *height >= 0.0 {
                Ok(Measured::Gap(*height))
            } else {
                Err(InvalidBlockReason::InvalidTargetSize {
                    name: "spacer height",
                    value: *height,
                })
            }
        }
        ContentBlock::PageBreak => Ok(Measured::Break),
    }
}

fn measure_text<'a>(
    text: &TextBlock,
    font_size: f64,
    geometry: &PageGeometry,
    style: &LayoutStyle,
) -> Measured<'a> {
    let lines = wrap_text(text.text(), geometry.printable_width(), font_size);
    let line_height = style.line_height(font_size);

    Measured::Box {
        x: geometry.left(),
        width: geometry.printable_width(),
        height: lines.len() as f64 * line_height,
        content: PlacedContent::Text {
            lines,
            font_size,
            line_height,
            alignment: text.alignment(),
        },
    }
}

/// Rendered size of `image` in millimetres.
///
/// Aspect-fit height is `width / (source_width / source_height)`; fixed
/// sizing ignores the source ratio.
pub fn image_size(
    image: &ImageBlock,
    geometry: &PageGeometry,
) -> Result<(f64, f64), InvalidBlockReason> {
    let (source_width, source_height) = (image.source_width(), image.source_height());
    if source_width == 0 || source_height == 0 {
        return Err(InvalidBlockReason::ZeroSourceDimension {
            width: source_width,
            height: source_height,
        });
    }

    let expected = (source_width as usize)
        .checked_mul(source_height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(InvalidBlockReason::DimensionsTooLarge {
            width: source_width,
            height: source_height,
        })?;
    if image.pixels().len() != expected {
        return Err(InvalidBlockReason::PixelBufferMismatch {
            expected,
            actual: image.pixels().len(),
        });
    }

    let (requested_width, fixed_height) = match image.sizing() {
        ImageSizing::AspectFit { width } => (width, None),
        ImageSizing::Fixed { width, height } => (width, Some(height)),
    };

    let width = requested_width.unwrap_or_else(|| geometry.printable_width());
    check_target("width", width)?;

    let height = match fixed_height {
        Some(height) => {
            check_target("height", height)?;
            height
        }
        None => width / (f64::from(source_width) / f64::from(source_height)),
    };

    Ok((width, height))
}

fn check_target(name: &'static str, value: f64) -> Result<(), InvalidBlockReason> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidBlockReason::InvalidTargetSize { name, value })
    }
}

fn measure_image<'a>(
    image: &'a ImageBlock,
    geometry: &PageGeometry,
) -> Result<Measured<'a>, InvalidBlockReason> {
    let (width, height) = image_size(image, geometry)?;
    let x = image
        .alignment()
        .offset(geometry.left(), geometry.printable_width(), width);

    Ok(Measured::Box {
        x,
        width,
        height,
        content: PlacedContent::Image {
            pixels: image.pixels(),
            source_width: image.source_width(),
            source_height: image.source_height(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{image_size, paginate, LayoutCursor, LayoutStyle, PlacedContent};
    use crate::error::{ConfigurationError, InvalidBlockReason};
    use crate::geometry::PageGeometry;
    use crate::model::{ContentBlock, HorizontalAlignment, ImageBlock};

    fn rgb(width: u32, height: u32) -> Vec<u8> {
        vec![200; (width * height * 3) as usize]
    }

    fn record_lines(count: usize) -> Vec<ContentBlock> {
        (0..count)
            .map(|index| ContentBlock::record_line(format!("row {index}")))
            .collect()
    }

    #[test]
    fn single_heading_sits_at_top_margin() {
        let blocks = vec![ContentBlock::heading("Report")];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();

        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.placements.len(), 1);
        assert_eq!(plan.placements[0].page, 0);
        assert_eq!(plan.placements[0].top, 10.0);
        assert!(plan.placements[0].is_heading);
    }

    #[test]
    fn empty_input_yields_one_page() {
        let plan = paginate(&[], &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 1);
        assert!(plan.placements.is_empty());
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn twenty_record_lines_fit_on_one_page() {
        let blocks = record_lines(20);
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.placements.last().unwrap().top, 200.0);
    }

    #[test]
    fn twenty_eighth_record_line_starts_page_two() {
        let blocks = record_lines(30);
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();

        assert_eq!(plan.page_count, 2);
        assert!(plan.placements[..27].iter().all(|p| p.page == 0));
        assert_eq!(plan.placements[27].page, 1);
        assert_eq!(plan.placements[27].top, 10.0);
    }

    #[test]
    fn block_ending_exactly_on_bottom_margin_stays() {
        // 28 lines of 10mm end exactly at 300 - 10.
        let geometry = PageGeometry::new(210.0, 300.0, 10.0);
        let blocks = record_lines(28);
        let plan = paginate(&blocks, &geometry, &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 1);

        let blocks = record_lines(29);
        let plan = paginate(&blocks, &geometry, &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 2);
        assert_eq!(plan.placements[28].page, 1);
    }

    #[test]
    fn one_unit_past_bottom_margin_breaks() {
        let geometry = PageGeometry::new(210.0, 300.0, 10.0);
        let style = LayoutStyle::default().with_record_line_height(10.0);
        let mut blocks = record_lines(27);
        blocks.push(ContentBlock::spacer(1.0));
        blocks.push(ContentBlock::record_line("last"));

        let plan = paginate(&blocks, &geometry, &style).unwrap();
        let last = plan.placements.last().unwrap();
        assert_eq!(last.page, 1);
        assert_eq!(last.top, 10.0);
    }

    #[test]
    fn aspect_fit_image_height_follows_ratio() {
        let image = ImageBlock::new(rgb(400, 200), 400, 200).with_width(190.0);
        let (width, height) = image_size(&image, &PageGeometry::a4()).unwrap();
        assert_eq!(width, 190.0);
        assert_eq!(height, 95.0);
    }

    #[test]
    fn image_defaults_to_printable_width() {
        let image = ImageBlock::new(rgb(400, 200), 400, 200);
        let (width, height) = image_size(&image, &PageGeometry::a4()).unwrap();
        assert_eq!((width, height), (190.0, 95.0));
    }

    #[test]
    fn fixed_image_ignores_ratio() {
        let image = ImageBlock::new(rgb(400, 200), 400, 200).with_fixed_size(150.0, 100.0);
        let (width, height) = image_size(&image, &PageGeometry::a4()).unwrap();
        assert_eq!((width, height), (150.0, 100.0));
    }

    #[test]
    fn centered_image_is_offset_from_margin() {
        let image = ImageBlock::new(rgb(4, 2), 4, 2)
            .with_fixed_size(150.0, 100.0)
            .with_alignment(HorizontalAlignment::Center);
        let blocks = vec![ContentBlock::image(image)];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.placements[0].x, 30.0);
    }

    #[test]
    fn zero_height_image_is_skipped_with_warning() {
        let blocks = vec![
            ContentBlock::heading("Photos"),
            ContentBlock::image(ImageBlock::new(Vec::new(), 400, 0)),
            ContentBlock::paragraph("after"),
        ];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();

        assert_eq!(plan.warnings.len(), 1);
        assert_eq!(plan.warnings[0].block_index, 1);
        assert_eq!(
            plan.warnings[0].reason,
            InvalidBlockReason::ZeroSourceDimension {
                width: 400,
                height: 0
            }
        );
        let indices: Vec<_> = plan.placements.iter().map(|p| p.block_index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(plan
            .placements
            .iter()
            .all(|p| !matches!(p.content, PlacedContent::Image { .. })));
    }

    #[test]
    fn short_pixel_buffer_is_rejected() {
        let blocks = vec![ContentBlock::image(ImageBlock::new(vec![0; 5], 2, 2))];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(
            plan.warnings[0].reason,
            InvalidBlockReason::PixelBufferMismatch {
                expected: 12,
                actual: 5
            }
        );
    }

    #[test]
    fn non_positive_fixed_height_is_rejected() {
        let image = ImageBlock::new(rgb(2, 2), 2, 2).with_fixed_size(100.0, 0.0);
        let blocks = vec![ContentBlock::image(image)];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert!(matches!(
            plan.warnings[0].reason,
            InvalidBlockReason::InvalidTargetSize { name: "height", .. }
        ));
        assert!(plan.placements.is_empty());
    }

    #[test]
    fn oversized_block_on_fresh_page_overflows_in_place() {
        let image = ImageBlock::new(rgb(2, 2), 2, 2).with_fixed_size(100.0, 400.0);
        let blocks = vec![ContentBlock::image(image)];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.placements[0].top, 10.0);
    }

    #[test]
    fn oversized_block_after_content_moves_to_new_page() {
        let image = ImageBlock::new(rgb(2, 2), 2, 2).with_fixed_size(100.0, 400.0);
        let blocks = vec![
            ContentBlock::record_line("before"),
            ContentBlock::image(image),
            ContentBlock::record_line("after"),
        ];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 3);
        assert_eq!(plan.placements[1].page, 1);
        assert_eq!(plan.placements[1].top, 10.0);
        assert_eq!(plan.placements[2].page, 2);
    }

    #[test]
    fn page_break_skips_when_page_is_empty() {
        let blocks = vec![
            ContentBlock::page_break(),
            ContentBlock::record_line("a"),
            ContentBlock::page_break(),
            ContentBlock::page_break(),
            ContentBlock::record_line("b"),
        ];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.page_count, 2);
        assert_eq!(plan.placements[0].page, 0);
        assert_eq!(plan.placements[1].page, 1);
    }

    #[test]
    fn block_spacing_advances_cursor() {
        let style = LayoutStyle::default().with_block_spacing(5.0);
        let blocks = record_lines(3);
        let plan = paginate(&blocks, &PageGeometry::a4(), &style).unwrap();
        let tops: Vec<_> = plan.placements.iter().map(|p| p.top).collect();
        assert_eq!(tops, vec![10.0, 25.0, 40.0]);
    }

    #[test]
    fn leading_spacer_is_ignored_on_empty_page() {
        let blocks = vec![ContentBlock::spacer(20.0), ContentBlock::record_line("a")];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
        assert_eq!(plan.placements[0].top, 10.0);
    }

    #[test]
    fn paragraph_height_counts_wrapped_lines() {
        let style = LayoutStyle::default();
        let text = "word ".repeat(200);
        let blocks = vec![ContentBlock::paragraph(text)];
        let plan = paginate(&blocks, &PageGeometry::a4(), &style).unwrap();

        let placement = &plan.placements[0];
        let PlacedContent::Text {
            lines, line_height, ..
        } = &placement.content
        else {
            panic!("paragraph should produce text");
        };
        assert!(lines.len() > 1);
        assert!((placement.height - lines.len() as f64 * line_height).abs() < 1e-9);
    }

    #[test]
    fn invalid_geometry_is_fatal() {
        let err = paginate(
            &[ContentBlock::heading("x")],
            &PageGeometry::new(210.0, 0.0, 10.0),
            &LayoutStyle::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidDimension { name: "height", .. }
        ));
    }

    #[test]
    fn invalid_style_is_fatal() {
        let style = LayoutStyle::default().with_block_spacing(-1.0);
        let err = paginate(&[], &PageGeometry::a4(), &style).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidStyle {
                name: "block_spacing",
                ..
            }
        ));
    }

    #[test]
    fn page_count_never_decreases_as_blocks_are_appended() {
        let mut blocks = Vec::new();
        let mut previous = 1;
        for index in 0..120 {
            blocks.push(match index % 4 {
                0 => ContentBlock::heading(format!("Section {index}")),
                1 => ContentBlock::paragraph("lorem ipsum dolor sit amet ".repeat(index % 7 + 1)),
                2 => ContentBlock::image(ImageBlock::new(rgb(3, 2), 3, 2).with_width(120.0)),
                _ => ContentBlock::record_line(format!("{{\"row\":\"{index}\"}}")),
            });
            let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();
            assert!(plan.page_count >= previous);
            previous = plan.page_count;
        }
        assert!(previous > 1);
    }

    #[test]
    fn fitting_blocks_never_cross_bottom_margin() {
        let geometry = PageGeometry::a4();
        let blocks: Vec<_> = (0..60)
            .map(|index| {
                let height = 20.0 + (index % 5) as f64 * 13.0;
                ContentBlock::image(ImageBlock::new(rgb(2, 2), 2, 2).with_fixed_size(50.0, height))
            })
            .collect();
        let style = LayoutStyle::default().with_block_spacing(3.0);
        let plan = paginate(&blocks, &geometry, &style).unwrap();

        for placement in &plan.placements {
            assert!(placement.top >= geometry.top());
            assert!(placement.top + placement.height <= geometry.bottom_limit());
        }
    }

    #[test]
    fn cursor_steps() {
        let geometry = PageGeometry::a4();
        let cursor = LayoutCursor::start(&geometry);
        assert_eq!(cursor.offset, 10.0);
        assert!(!cursor.page_used);

        let cursor = cursor.advance(270.0, 2.0);
        assert_eq!(cursor.offset, 282.0);
        assert!(cursor.page_used);
        assert!(!cursor.overflows(5.0, &geometry));
        assert!(cursor.overflows(5.5, &geometry));

        let cursor = cursor.next_page(&geometry);
        assert_eq!((cursor.page, cursor.offset, cursor.page_used), (1, 10.0, false));
    }

    #[test]
    fn huge_image_dimensions_are_skipped_not_fatal() {
        let blocks = vec![
            ContentBlock::heading("x"),
            ContentBlock::image(ImageBlock::new(Vec::new(), u32::MAX, u32::MAX)),
        ];
        let plan = paginate(&blocks, &PageGeometry::a4(), &LayoutStyle::default()).unwrap();

        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.placements.len(), 1);
        assert_eq!(plan.warnings.len(), 1);
        assert_eq!(plan.warnings[0].block_index, 1);
        assert_eq!(
            plan.warnings[0].reason,
            InvalidBlockReason::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX
            }
        );
    }
}
