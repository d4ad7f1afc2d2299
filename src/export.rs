//! Composers that turn captured form data into content blocks.
//!
//! Two exports exist: the form export (text fields, photographs, and
//! spreadsheet rows in one flowing document) and the gallery export (one
//! picked image per page).  Both end in [`export_to_sink`].

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::builder::{Document, PaginatedDocumentBuilder};
use crate::capture::{CapturedImage, Delivery, DocumentSink, ImageSource};
use crate::error::ExportError;
use crate::model::{ContentBlock, HorizontalAlignment, ImageBlock, ImageSizing};

/// Heading placed at the top of every form export.
pub const FORM_HEADING: &str = "Generated PDF";
/// Document title of form exports.
pub const FORM_TITLE: &str = "PDF with Images and Excel";
/// Fixed size of form photographs, in millimetres.
pub const FORM_IMAGE_SIZE: (f64, f64) = (150.0, 100.0);
/// Gap left below each form photograph, in millimetres.
pub const FORM_IMAGE_GAP: f64 = 20.0;
/// Maximum number of images in a gallery export.
pub const GALLERY_LIMIT: usize = 5;
/// File name of gallery exports.
pub const GALLERY_FILE_NAME: &str = "selected-images.pdf";
/// Document title of gallery exports.
pub const GALLERY_TITLE: &str = "Selected Images PDF";
/// Share message of gallery exports without a description.
pub const GALLERY_SHARE_TEXT: &str = "Here is the PDF of selected images.";

/// One spreadsheet row, keyed by column name in column order.
pub type Row = Map<String, Value>;

/// The text fields of the capture form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormCapture {
    /// Person's name; omitted from the document when empty.
    pub name: String,
    /// Father's name; omitted from the document when empty.
    pub father_name: String,
    /// Free text placed below the names.
    pub description: String,
}

/// Rows extracted from one uploaded spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SheetRows {
    /// Rows in sheet order.
    pub rows: Vec<Row>,
}

impl SheetRows {
    /// Wraps already extracted rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// The "images and spreadsheet" export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormExport {
    /// Text fields of the form.
    pub form: FormCapture,
    /// Photographs, placed in order.
    pub images: Vec<CapturedImage>,
    /// Uploaded spreadsheets, placed after the photographs.
    pub sheets: Vec<SheetRows>,
}

impl FormExport {
    /// Creates an export, acquiring images from `source`.
    pub fn capture(
        form: FormCapture,
        source: &mut dyn ImageSource,
        sheets: Vec<SheetRows>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            form,
            images: source.acquire()?,
            sheets,
        })
    }

    /// Lays the export out as blocks.
    ///
    /// Empty form fields are omitted.  Each row becomes one record line holding
    /// the row as a compact JSON object.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        let mut blocks = vec![ContentBlock::heading(FORM_HEADING)];

        if !self.form.name.is_empty() {
            blocks.push(ContentBlock::record_line(format!("Name: {}", self.form.name)));
        }
        if !self.form.father_name.is_empty() {
            blocks.push(ContentBlock::record_line(format!(
                "Father Name: {}",
                self.form.father_name
            )));
        }
        if !self.form.description.is_empty() {
            blocks.push(ContentBlock::paragraph(self.form.description.clone()));
        }

        let (width, height) = FORM_IMAGE_SIZE;
        for image in &self.images {
            blocks.push(ContentBlock::image(
                ImageBlock::new(image.rgb.clone(), image.width, image.height)
                    .with_fixed_size(width, height)
                    .with_alignment(HorizontalAlignment::Center),
            ));
            blocks.push(ContentBlock::spacer(FORM_IMAGE_GAP));
        }

        for (index, sheet) in self.sheets.iter().enumerate() {
            blocks.push(ContentBlock::record_line(format!("Excel File {}:", index + 1)));
            for row in &sheet.rows {
                blocks.push(ContentBlock::record_line(Value::Object(row.clone()).to_string()));
            }
        }

        blocks
    }

    /// Returns the timestamped file name for an export made now.
    pub fn file_name(&self) -> String {
        Self::file_name_at(Utc::now())
    }

    /// Returns the file name for an export made at `time`.
    pub fn file_name_at(time: DateTime<Utc>) -> String {
        format!("images-and-excel-{}.pdf", time.timestamp_millis())
    }

    /// Builds the export and delivers it to `sink`.
    pub fn run(
        &self,
        builder: &PaginatedDocumentBuilder,
        sink: &mut dyn DocumentSink,
    ) -> Result<(Document, Delivery), ExportError> {
        let builder = builder.clone().with_title(FORM_TITLE.to_owned());
        export_to_sink(&self.blocks(), &builder, sink, &self.file_name())
    }
}

/// The "selected images" export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryExport {
    /// Picked images; only the first [`GALLERY_LIMIT`] are used.
    pub images: Vec<CapturedImage>,
    /// Message sent along with the shared file.
    pub description: String,
}

impl GalleryExport {
    /// Creates an export, acquiring images from `source`.
    pub fn capture(
        source: &mut dyn ImageSource,
        description: impl Into<String>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            images: source.acquire()?,
            description: description.into(),
        })
    }

    /// Lays the export out as one page per image, each fitted to the
    /// printable width.
    ///
    /// Images beyond [`GALLERY_LIMIT`] are dropped.
    pub fn blocks(&self) -> Result<Vec<ContentBlock>, ExportError> {
        if self.images.is_empty() {
            return Err(ExportError::NoImages);
        }
        if self.images.len() > GALLERY_LIMIT {
            warn!(
                "gallery holds {} images, only the first {} are exported",
                self.images.len(),
                GALLERY_LIMIT
            );
        }

        let mut blocks = Vec::new();
        for (index, image) in self.images.iter().take(GALLERY_LIMIT).enumerate() {
            if index > 0 {
                blocks.push(ContentBlock::page_break());
            }
            blocks.push(image.clone().into_block(ImageSizing::AspectFit { width: None }));
        }
        Ok(blocks)
    }

    /// Returns the message that accompanies the shared file.
    pub fn share_text(&self) -> &str {
        if self.description.is_empty() {
            GALLERY_SHARE_TEXT
        } else {
            &self.description
        }
    }

    /// Builds the export and delivers it to `sink`.
    pub fn run(
        &self,
        builder: &PaginatedDocumentBuilder,
        sink: &mut dyn DocumentSink,
    ) -> Result<(Document, Delivery), ExportError> {
        let blocks = self.blocks()?;
        let builder = builder.clone().with_title(GALLERY_TITLE.to_owned());
        let delivered = export_to_sink(&blocks, &builder, sink, GALLERY_FILE_NAME)?;
        info!("share text: {}", self.share_text());
        Ok(delivered)
    }
}

/// Builds `blocks` and hands the result to `sink` as `file_name`.
pub fn export_to_sink(
    blocks: &[ContentBlock],
    builder: &PaginatedDocumentBuilder,
    sink: &mut dyn DocumentSink,
    file_name: &str,
) -> Result<(Document, Delivery), ExportError> {
    let document = builder.build(blocks)?;
    let delivery = sink.deliver(file_name, &document)?;
    info!(
        "exported {} page(s) to {}",
        document.page_count(),
        delivery.location
    );
    Ok((document, delivery))
}
