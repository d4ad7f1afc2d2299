//! Image acquisition and document delivery capabilities.
//!
//! The layout pass never performs I/O.  Images are acquired before a build
//! through an [`ImageSource`], and the finished bytes are handed to a
//! [`DocumentSink`] afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::builder::Document;
use crate::error::CaptureError;
use crate::model::{ContentBlock, ImageBlock, ImageSizing};

/// A decoded image with tightly packed 8-bit RGB pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedImage {
    /// Label of the image, usually its file name.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes, row-major.
    pub rgb: Vec<u8>,
}

impl CapturedImage {
    /// Decodes encoded image bytes (PNG, JPEG, ...).
    ///
    /// Transparent pixels are composited onto a white background.
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<Self, CaptureError> {
        let name = name.into();
        match image::load_from_memory(bytes) {
            Ok(decoded) => Ok(Self::from_dynamic(name, decoded)),
            Err(source) => Err(CaptureError::Decode { name, source }),
        }
    }

    /// Decodes the image file at `path`, guessing the format from its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let reader = image::io::Reader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| CaptureError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        match reader.decode() {
            Ok(decoded) => Ok(Self::from_dynamic(name, decoded)),
            Err(source) => Err(CaptureError::Decode { name, source }),
        }
    }

    fn from_dynamic(name: String, decoded: image::DynamicImage) -> Self {
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[over_white(r, a), over_white(g, a), over_white(b, a)]);
        }
        Self {
            name,
            width,
            height,
            rgb,
        }
    }

    /// Converts the image into an image block with the given sizing.
    pub fn into_block(self, sizing: ImageSizing) -> ContentBlock {
        ContentBlock::image(ImageBlock::new(self.rgb, self.width, self.height).with_sizing(sizing))
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let blended = (u32::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
    blended as u8
}

/// Produces the images that go into an export.
pub trait ImageSource {
    /// Returns every available image, in order.
    fn acquire(&mut self) -> Result<Vec<CapturedImage>, CaptureError>;
}

/// Reads images from files on disk.
#[derive(Clone, Debug, Default)]
pub struct FileImageSource {
    paths: Vec<PathBuf>,
}

impl FileImageSource {
    /// Creates a source over `paths`.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&mut self) -> Result<Vec<CapturedImage>, CaptureError> {
        self.paths
            .iter()
            .map(|path| {
                debug!("decoding image {}", path.display());
                CapturedImage::open(path)
            })
            .collect()
    }
}

enum MemoryEntry {
    Decoded(CapturedImage),
    Encoded { name: String, bytes: Vec<u8> },
}

/// Serves images held in memory.
#[derive(Default)]
pub struct MemoryImageSource {
    entries: Vec<MemoryEntry>,
}

impl MemoryImageSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an already decoded image.
    pub fn with_image(mut self, image: CapturedImage) -> Self {
        self.entries.push(MemoryEntry::Decoded(image));
        self
    }

    /// Adds encoded image bytes, decoded on [`ImageSource::acquire`].
    pub fn with_encoded(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.push(MemoryEntry::Encoded {
            name: name.into(),
            bytes: bytes.into(),
        });
        self
    }
}

impl ImageSource for MemoryImageSource {
    fn acquire(&mut self) -> Result<Vec<CapturedImage>, CaptureError> {
        self.entries
            .iter()
            .map(|entry| match entry {
                MemoryEntry::Decoded(image) => Ok(image.clone()),
                MemoryEntry::Encoded { name, bytes } => CapturedImage::decode(name.clone(), bytes),
            })
            .collect()
    }
}

/// Where a delivered document ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Path or label identifying the delivered file.
    pub location: String,
}

/// Receives finished documents.
pub trait DocumentSink {
    /// Stores or shares `document` under `file_name`.
    fn deliver(&mut self, file_name: &str, document: &Document) -> Result<Delivery, CaptureError>;
}

/// Writes documents into a directory, creating it when needed.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DocumentSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, document: &Document) -> Result<Delivery, CaptureError> {
        fs::create_dir_all(&self.directory).map_err(|source| CaptureError::Write {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.directory.join(file_name);
        fs::write(&path, document.bytes()).map_err(|source| CaptureError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            "wrote {} ({} page(s), {} bytes)",
            path.display(),
            document.page_count(),
            document.bytes().len()
        );
        Ok(Delivery {
            location: path.display().to_string(),
        })
    }
}

/// Keeps delivered documents in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delivered files as `(file name, bytes)` pairs.
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }
}

impl DocumentSink for MemorySink {
    fn deliver(&mut self, file_name: &str, document: &Document) -> Result<Delivery, CaptureError> {
        self.files
            .push((file_name.to_owned(), document.bytes().to_vec()));
        Ok(Delivery {
            location: file_name.to_owned(),
        })
    }
}
