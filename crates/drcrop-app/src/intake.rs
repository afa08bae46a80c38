//! Image intake: path validation, async encoding to a `data:` URI, and the
//! token scheme that decides which of several overlapping intakes wins.
//!
//! Every accepted path is issued an [`IntakeToken`]. A completion is applied
//! only if its token is still the latest issued, so a slow first file can
//! never overwrite a faster second one.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use drcrop_core::prelude::*;
use image::ImageFormat;

use crate::preview::{ImagePreview, PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH};

/// Media type reported for files whose extension is not recognized
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Image types the decoder has no format for; accepted, shown without preview
const EXTRA_IMAGE_TYPES: &[(&str, &str)] = &[
    ("svg", "image/svg+xml"),
    ("svgz", "image/svg+xml"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("jxl", "image/jxl"),
    ("jp2", "image/jp2"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Monotonically increasing id of an accepted intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntakeToken(u64);

impl IntakeToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues tokens and answers "is this completion still wanted?"
#[derive(Debug, Default, Clone)]
pub struct IntakeTracker {
    latest: u64,
    in_flight: bool,
}

impl IntakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token. Any earlier token becomes stale.
    pub fn issue(&mut self) -> IntakeToken {
        self.latest += 1;
        self.in_flight = true;
        IntakeToken(self.latest)
    }

    pub fn is_current(&self, token: IntakeToken) -> bool {
        token.0 == self.latest
    }

    /// Mark the latest intake finished. Returns false for stale tokens.
    pub fn complete(&mut self, token: IntakeToken) -> bool {
        if self.is_current(token) {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Whether the latest issued intake has not reported yet
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Make every outstanding token stale without starting a new intake
    pub fn invalidate(&mut self) {
        self.latest += 1;
        self.in_flight = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Media type declared by the file extension
pub fn media_type_for(path: &Path) -> &'static str {
    if let Ok(format) = ImageFormat::from_path(path) {
        return format.to_mime_type();
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    ext.and_then(|ext| {
        EXTRA_IMAGE_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, media_type)| *media_type)
    })
    .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

/// Accept only paths whose declared media type is `image/*`
pub fn check_image_path(path: &Path) -> Result<&'static str> {
    let media_type = media_type_for(path);
    if media_type.starts_with("image/") {
        Ok(media_type)
    } else {
        Err(Error::unsupported_media_type(path, media_type))
    }
}

/// Interpret pasted text as a single dropped file path.
///
/// Terminals deliver drag-and-drop as a paste, quoting or backslash-escaping
/// the path. Multi-line pastes and empty text are not a drop.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    if text.is_empty() || text.contains('\n') {
        return None;
    }

    let unquoted = strip_quotes(text);
    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let path = without_scheme.replace("\\ ", " ");

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// An accepted, fully encoded image
#[derive(Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub media_type: String,
    /// Raw file size in bytes
    pub byte_len: usize,
    /// Self-contained `data:<media-type>;base64,<payload>`
    pub data_uri: String,
    /// Terminal preview, `None` when the bytes could not be decoded
    pub preview: Option<ImagePreview>,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("byte_len", &self.byte_len)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

/// Build a `data:` URI from raw bytes
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Payload bytes of a base64 `data:` URI, `None` for anything else
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    STANDARD.decode(payload.trim()).ok()
}

/// Read `path` and encode it. Decoding for the preview runs on the blocking pool.
pub async fn load_image(path: PathBuf, media_type: &'static str) -> Result<UploadedImage> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::intake(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let (data_uri, preview, byte_len) = tokio::task::spawn_blocking(move || {
        let data_uri = encode_data_uri(media_type, &bytes);
        let preview = ImagePreview::from_bytes(&bytes, PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT);
        (data_uri, preview, bytes.len())
    })
    .await
    .map_err(|e| Error::intake(format!("encode task failed: {}", e)))?;

    debug!(
        "Encoded {} ({} bytes, preview: {})",
        file_name,
        byte_len,
        preview.is_some()
    );

    Ok(UploadedImage {
        file_name,
        media_type: media_type.to_string(),
        byte_len,
        data_uri,
        preview,
    })
}

/// Human-readable file size for the upload panel
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let img = RgbImage::from_pixel(3, 3, Rgb([0, 128, 0]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        let path = dir.join(name);
        std::fs::write(&path, buf).unwrap();
        path
    }

    #[test]
    fn test_tokens_last_issued_wins() {
        let mut tracker = IntakeTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        // First completes late: dropped, still loading
        assert!(!tracker.complete(first));
        assert!(tracker.is_loading());

        assert!(tracker.complete(second));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_check_image_path_accepts_images() {
        assert_eq!(check_image_path(Path::new("leaf.png")).unwrap(), "image/png");
        assert_eq!(check_image_path(Path::new("LEAF.JPG")).unwrap(), "image/jpeg");
        assert_eq!(check_image_path(Path::new("a/b/c.webp")).unwrap(), "image/webp");
    }

    #[test]
    fn test_check_image_path_accepts_undecodable_image_types() {
        assert_eq!(check_image_path(Path::new("leaf.svg")).unwrap(), "image/svg+xml");
        assert_eq!(check_image_path(Path::new("IMG_0042.HEIC")).unwrap(), "image/heic");
        assert_eq!(check_image_path(Path::new("scan.heif")).unwrap(), "image/heif");
    }

    #[test]
    fn test_check_image_path_rejects_others() {
        let err = check_image_path(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType { .. }));

        assert!(check_image_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_parse_dropped_path_variants() {
        assert_eq!(
            parse_dropped_path("  /tmp/leaf.png \n"),
            Some(PathBuf::from("/tmp/leaf.png"))
        );
        assert_eq!(
            parse_dropped_path("'/tmp/my leaf.png'"),
            Some(PathBuf::from("/tmp/my leaf.png"))
        );
        assert_eq!(
            parse_dropped_path("/tmp/my\\ leaf.png"),
            Some(PathBuf::from("/tmp/my leaf.png"))
        );
        assert_eq!(
            parse_dropped_path("file:///tmp/leaf.png"),
            Some(PathBuf::from("/tmp/leaf.png"))
        );
    }

    #[test]
    fn test_parse_dropped_path_rejects_non_drops() {
        assert_eq!(parse_dropped_path(""), None);
        assert_eq!(parse_dropped_path("   "), None);
        assert_eq!(parse_dropped_path("/a.png\n/b.png"), None);
        assert_eq!(parse_dropped_path("''"), None);
    }

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(encode_data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let mut tracker = IntakeTracker::new();
        let token = tracker.issue();
        tracker.invalidate();

        assert!(!tracker.is_loading());
        assert!(!tracker.complete(token));
        assert!(tracker.issue() > token);
    }

    #[test]
    fn test_decode_data_uri() {
        assert_eq!(
            decode_data_uri("data:image/png;base64,YWJj"),
            Some(b"abc".to_vec())
        );
        assert_eq!(decode_data_uri("data:image/png,raw"), None);
        assert_eq!(decode_data_uri("http://example.com/a.png"), None);
        assert_eq!(decode_data_uri("data:image/png;base64,!!!"), None);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[tokio::test]
    async fn test_load_image_encodes_and_previews() {
        let dir = tempdir().unwrap();
        let path = write_png(dir.path(), "leaf.png");

        let image = load_image(path, "image/png").await.unwrap();

        assert_eq!(image.file_name, "leaf.png");
        assert_eq!(image.media_type, "image/png");
        assert!(image.data_uri.starts_with("data:image/png;base64,"));
        assert!(image.byte_len > 0);
        assert_eq!(image.preview.as_ref().map(|p| p.width()), Some(3));
    }

    #[tokio::test]
    async fn test_load_image_undecodable_has_no_preview() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let image = load_image(path, "image/png").await.unwrap();
        assert!(image.preview.is_none());
        assert_eq!(image.byte_len, 16);
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_image(dir.path().join("gone.png"), "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Intake { .. }));
    }
}
