// SPDX-License-Identifier: MPL-2.0
//! File acquisition: normalizing picker and drop events into a single
//! candidate, and detecting its content type.
//!
//! All three acquisition surfaces (browse picker, camera picker, drop zone)
//! produce a [`FileEvent`]. Only the first file of an event is considered;
//! an empty event is a no-op.

use crate::error::Result;
use bytes::Bytes;
use image_rs::ImageFormat;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Image extensions offered by the file pickers.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico", "svg",
];

/// Number of leading bytes inspected for magic-number sniffing.
const SNIFF_LEN: usize = 64;

/// Well-known non-image types, so rejected files still report a real MIME.
const OTHER_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("json", "application/json"),
    ("zip", "application/zip"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

const OCTET_STREAM: &str = "application/octet-stream";
const SVG_MIME: &str = "image/svg+xml";

/// Which control produced a file event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// The regular file browser.
    Browse,
    /// The "take photo" picker.
    Camera,
    /// A file dropped onto the window.
    Drop,
}

/// A batch of files delivered by one acquisition surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub source: FileSource,
    pub files: Vec<PathBuf>,
}

impl FileEvent {
    #[must_use]
    pub fn new(source: FileSource, files: Vec<PathBuf>) -> Self {
        Self { source, files }
    }

    /// Event carrying a single file, or nothing when the picker was cancelled.
    #[must_use]
    pub fn from_pick(source: FileSource, file: Option<PathBuf>) -> Self {
        Self::new(source, file.into_iter().collect())
    }

    /// The file the wizard acts on. `None` means the event is a no-op.
    #[must_use]
    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }
}

/// MIME content type of a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    #[must_use]
    pub fn new(mime: impl Into<String>) -> Self {
        Self(mime.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an `image/*` type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }

    #[must_use]
    pub fn is_svg(&self) -> bool {
        self.0 == SVG_MIME
    }

    /// Detects the content type from the file header, falling back to the
    /// extension when the header is not recognized.
    #[must_use]
    pub fn detect(path: &Path, header: &[u8]) -> Self {
        if let Ok(format) = image_rs::guess_format(header) {
            return Self::new(format.to_mime_type());
        }
        Self::from_extension(path)
    }

    /// Extension-only detection.
    #[must_use]
    pub fn from_extension(path: &Path) -> Self {
        let Some(extension) = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase)
        else {
            return Self::new(OCTET_STREAM);
        };

        if extension == "svg" {
            return Self::new(SVG_MIME);
        }
        if let Some(format) = ImageFormat::from_extension(&extension) {
            return Self::new(format.to_mime_type());
        }
        OTHER_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map_or_else(|| Self::new(OCTET_STREAM), |(_, mime)| Self::new(*mime))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file the user picked or dropped, inspected but not yet accepted.
#[derive(Clone)]
pub struct FileCandidate {
    path: PathBuf,
    name: String,
    size_bytes: u64,
    content_type: ContentType,
    /// File contents, only kept for images (used to build the preview).
    bytes: Option<Bytes>,
}

impl fmt::Debug for FileCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileCandidate")
            .field("path", &self.path)
            .field("size_bytes", &self.size_bytes)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

impl FileCandidate {
    /// Reads `path` and detects its content type.
    ///
    /// Only I/O failures are errors here; a non-image file is a valid
    /// candidate that the wizard will reject.
    pub fn inspect(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let header = &data[..data.len().min(SNIFF_LEN)];
        let content_type = ContentType::detect(path, header);
        let size_bytes = data.len() as u64;
        let bytes = content_type.is_image().then(|| Bytes::from(data));

        Ok(Self {
            path: path.to_path_buf(),
            name: display_name(path),
            size_bytes,
            content_type,
            bytes,
        })
    }

    /// Builds a candidate from in-memory data.
    #[must_use]
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        let path = path.into();
        let header = &data[..data.len().min(SNIFF_LEN)];
        let content_type = ContentType::detect(&path, header);
        let size_bytes = data.len() as u64;
        let bytes = content_type.is_image().then(|| Bytes::from(data));
        Self {
            name: display_name(&path),
            path,
            size_bytes,
            content_type,
            bytes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    #[must_use]
    pub fn bytes(&self) -> Option<&Bytes> {
        self.bytes.as_ref()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn empty_event_has_no_first_file() {
        let event = FileEvent::new(FileSource::Drop, Vec::new());
        assert!(event.first().is_none());
    }

    #[test]
    fn only_first_file_is_considered() {
        let event = FileEvent::new(
            FileSource::Drop,
            vec![PathBuf::from("a.png"), PathBuf::from("b.pdf")],
        );
        assert_eq!(event.first(), Some(Path::new("a.png")));
    }

    #[test]
    fn cancelled_pick_is_empty() {
        assert!(FileEvent::from_pick(FileSource::Browse, None).files.is_empty());
    }

    #[test]
    fn extension_detection_covers_images_and_documents() {
        assert_eq!(
            ContentType::from_extension(Path::new("photo.PNG")).as_str(),
            "image/png"
        );
        assert_eq!(
            ContentType::from_extension(Path::new("scan.jpeg")).as_str(),
            "image/jpeg"
        );
        assert_eq!(
            ContentType::from_extension(Path::new("logo.svg")).as_str(),
            "image/svg+xml"
        );
        assert_eq!(
            ContentType::from_extension(Path::new("document.pdf")).as_str(),
            "application/pdf"
        );
        assert_eq!(
            ContentType::from_extension(Path::new("noext")).as_str(),
            "application/octet-stream"
        );
    }

    #[test]
    fn header_wins_over_extension() {
        let detected = ContentType::detect(Path::new("renamed.txt"), PNG_MAGIC);
        assert_eq!(detected.as_str(), "image/png");
        assert!(detected.is_image());
    }

    #[test]
    fn unknown_header_falls_back_to_extension() {
        let detected = ContentType::detect(Path::new("document.pdf"), b"%PDF-1.7");
        assert_eq!(detected.as_str(), "application/pdf");
        assert!(!detected.is_image());
    }

    #[test]
    fn inspect_reads_name_size_and_keeps_image_bytes() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("photo.png");
        image_rs::RgbaImage::new(2, 2)
            .save(&path)
            .expect("failed to write png");

        let candidate = FileCandidate::inspect(&path).expect("inspect failed");
        assert_eq!(candidate.name(), "photo.png");
        assert!(candidate.content_type().is_image());
        assert!(candidate.size_bytes() > 0);
        assert!(candidate.bytes().is_some());
    }

    #[test]
    fn inspect_drops_bytes_of_non_images() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("document.pdf");
        fs::write(&path, b"%PDF-1.4 fake").expect("failed to write pdf");

        let candidate = FileCandidate::inspect(&path).expect("inspect failed");
        assert_eq!(candidate.content_type().as_str(), "application/pdf");
        assert!(candidate.bytes().is_none());
    }

    #[test]
    fn inspect_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = FileCandidate::inspect(&dir.path().join("gone.png"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
