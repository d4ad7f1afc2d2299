//! Serialization of a [`LayoutPlan`] into PDF bytes with `lopdf`.
//!
//! Layout works in millimetres from the top-left corner of a page; PDF user
//! space is in points from the bottom-left corner.  Every conversion between
//! the two happens in this module.  Nothing time- or randomness-dependent is
//! written, so the same plan always produces the same bytes.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::RenderError;
use crate::fonts::{self, BODY_FONT_NAME, BODY_FONT_RESOURCE};
use crate::geometry::PageGeometry;
use crate::layout::{LayoutPlan, PlacedContent, Placement};
use crate::outline::{self, OutlineHeading};

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = "formpdf";
const PT_PER_MM: f64 = 72.0 / 25.4;

/// Document-level settings that do not influence layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Title written to the document information dictionary.
    pub title: Option<String>,
    /// Whether headings become outline entries.
    pub outline: bool,
}

/// Encodes `text` as a PDF text string: literal for ASCII, UTF-16BE with a
/// byte order mark otherwise.
pub(crate) fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::string_literal(text)
    } else {
        let mut bytes = vec![0xfe, 0xff];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as _)
}

fn pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Operations and image resources collected for one page.
#[derive(Default)]
struct PageCanvas {
    operations: Vec<Operation>,
    images: Vec<(String, ObjectId)>,
}

struct Renderer<'g> {
    document: Document,
    geometry: &'g PageGeometry,
    image_count: usize,
}

impl<'g> Renderer<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        Self {
            document: Document::with_version(PDF_VERSION),
            geometry,
            image_count: 0,
        }
    }

    /// Converts a top-relative offset in millimetres into a PDF y coordinate.
    fn y(&self, offset: f64) -> f64 {
        pt(self.geometry.height - offset)
    }

    fn draw(
        &mut self,
        canvas: &mut PageCanvas,
        placement: &Placement<'_>,
    ) -> Result<(), RenderError> {
        match &placement.content {
            PlacedContent::Text {
                lines,
                font_size,
                line_height,
                alignment,
            } => {
                let font_height = fonts::pt_to_mm(*font_size);
                let first_baseline =
                    placement.top + (line_height - font_height) / 2.0 + fonts::ascent(*font_size);

                for (index, line) in lines.iter().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    let width = fonts::text_width(line, *font_size);
                    let x = alignment.offset(placement.x, placement.width, width);
                    let baseline = first_baseline + index as f64 * line_height;

                    canvas.operations.extend([
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec![BODY_FONT_RESOURCE.into(), real(*font_size)]),
                        Operation::new("Td", vec![real(pt(x)), real(self.y(baseline))]),
                        Operation::new(
                            "Tj",
                            vec![Object::string_literal(fonts::encode_win_ansi(line))],
                        ),
                        Operation::new("ET", vec![]),
                    ]);
                }
            }
            PlacedContent::Image {
                pixels,
                source_width,
                source_height,
            } => {
                let image_id = self.add_image(pixels, *source_width, *source_height)?;
                self.image_count += 1;
                let name = format!("Im{}", self.image_count);

                canvas.operations.extend([
                    Operation::new("q", vec![]),
                    Operation::new(
                        "cm",
                        vec![
                            real(pt(placement.width)),
                            Object::Integer(0),
                            Object::Integer(0),
                            real(pt(placement.height)),
                            real(pt(placement.x)),
                            real(self.y(placement.top + placement.height)),
                        ],
                    ),
                    Operation::new("Do", vec![Object::Name(name.clone().into_bytes())]),
                    Operation::new("Q", vec![]),
                ]);
                canvas.images.push((name, image_id));
            }
        }

        Ok(())
    }

    fn add_image(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => Object::Integer(i64::from(width)),
                "Height" => Object::Integer(i64::from(height)),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => Object::Integer(8),
                "Filter" => "FlateDecode",
            },
            deflate(pixels)?,
        );
        Ok(self.document.add_object(stream))
    }

    fn finish_page(
        &mut self,
        canvas: PageCanvas,
        pages_id: ObjectId,
        font_id: ObjectId,
    ) -> Result<ObjectId, RenderError> {
        let content = Content {
            operations: canvas.operations,
        };
        let content_id = self.document.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            deflate(&content.encode()?)?,
        ));

        let mut resources = dictionary! {
            "Font" => dictionary! { BODY_FONT_RESOURCE => font_id },
        };
        if !canvas.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in canvas.images {
                xobjects.set(name.into_bytes(), Object::Reference(id));
            }
            resources.set("XObject", xobjects);
        }

        Ok(self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
        }))
    }
}

/// Renders `plan` onto pages of `geometry` and returns the PDF bytes.
pub fn render_pdf(
    plan: &LayoutPlan<'_>,
    geometry: &PageGeometry,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let mut renderer = Renderer::new(geometry);
    let pages_id = renderer.document.new_object_id();
    let font_id = renderer.document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => BODY_FONT_NAME,
        "Encoding" => "WinAnsiEncoding",
    });

    let page_count = plan.page_count.max(1);
    let mut canvases: Vec<PageCanvas> = (0..page_count).map(|_| PageCanvas::default()).collect();
    let mut headings = Vec::new();

    for placement in &plan.placements {
        let canvas = canvases
            .get_mut(placement.page)
            .ok_or(RenderError::MissingPage(placement.page))?;
        renderer.draw(canvas, placement)?;

        if options.outline && placement.is_heading {
            if let PlacedContent::Text { lines, .. } = &placement.content {
                headings.push(OutlineHeading {
                    title: lines.join(" "),
                    page: placement.page,
                    top: renderer.y(placement.top),
                });
            }
        }
    }

    let mut page_ids = Vec::with_capacity(page_count);
    for canvas in canvases {
        page_ids.push(renderer.finish_page(canvas, pages_id, font_id)?);
    }

    let mut document = renderer.document;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
        "Count" => Object::Integer(page_ids.len() as i64),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(pt(geometry.width)),
            real(pt(geometry.height)),
        ],
    };
    document.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    let outlines = outline::apply_heading_outline(&mut document, &headings, &page_ids)?;
    if let Some(outlines_id) = outlines {
        catalog.set("Outlines", Object::Reference(outlines_id));
        catalog.set("PageMode", "UseOutlines");
    }
    let catalog_id = document.add_object(catalog);

    let mut info = dictionary! { "Producer" => Object::string_literal(PRODUCER) };
    if let Some(title) = &options.title {
        info.set("Title", text_string(title));
    }
    let info_id = document.add_object(info);

    document.trailer.set("Root", catalog_id);
    document.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    document.save_to(&mut bytes)?;
    debug!(
        "rendered {} page(s), {} placement(s), {} bytes",
        page_count,
        plan.placements.len(),
        bytes.len()
    );
    Ok(bytes)
}
