//! Content artifacts submitted for analysis
//!
//! An artifact is the unit a caller hands to the engine: for images and
//! videos a [`FileArtifact`] carrying name, size, and MIME type (the engine
//! never reads the bytes), for text just the body string.
//!
//! The MIME category gate lives here too. It is a *caller* obligation - the
//! engine itself accepts any non-empty artifact - so the CLI and the web UI
//! both route through [`MediaKind`] before invoking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

/// Minimum trimmed characters a text submission needs before analysis.
/// Enforced by callers (CLI, web UI), not by the engine.
pub const MIN_TEXT_CHARS: usize = 50;

/// File handle metadata for an image or video submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileArtifact {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileArtifact {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Build an artifact from a file on disk: stat the size, guess the MIME
    /// type from the extension. The content itself is never opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type: guess_mime(path).to_string(),
        })
    }

    /// The media category this artifact claims to be, from its MIME prefix.
    pub fn media_kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime_type)
    }
}

/// Media categories the detector handles for file submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Category from a MIME type string, mirroring the browser-side
    /// `file.type.startsWith("image/")` check.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Extension-based MIME guess for the formats the detector UI accepts.
/// Anything unrecognized falls through to octet-stream and gets rejected by
/// the category gate.
fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ==========================================================================
    // MIME GUESSING TESTS
    // ==========================================================================
    //
    // The guess only has to be good enough for the category gate: image/*
    // for images, video/* for videos, octet-stream for everything else.
    // ==========================================================================

    #[test]
    fn test_image_extensions() {
        for (file, mime) in [
            ("a.jpg", "image/jpeg"),
            ("a.JPEG", "image/jpeg"),
            ("a.png", "image/png"),
            ("a.gif", "image/gif"),
            ("a.webp", "image/webp"),
            ("a.bmp", "image/bmp"),
        ] {
            assert_eq!(guess_mime(Path::new(file)), mime, "{}", file);
        }
    }

    #[test]
    fn test_video_extensions() {
        for (file, mime) in [
            ("a.mp4", "video/mp4"),
            ("a.MOV", "video/quicktime"),
            ("a.webm", "video/webm"),
            ("a.mkv", "video/x-matroska"),
            ("a.avi", "video/x-msvideo"),
        ] {
            assert_eq!(guess_mime(Path::new(file)), mime, "{}", file);
        }
    }

    #[test]
    fn test_unknown_extension_falls_through() {
        assert_eq!(guess_mime(Path::new("song.mp3")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("no_extension")), "application/octet-stream");
    }

    // ==========================================================================
    // CATEGORY GATE TESTS
    // ==========================================================================

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/jpeg"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("image/svg+xml"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("audio/mpeg"), None);
        assert_eq!(MediaKind::from_mime("application/octet-stream"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn test_artifact_media_kind() {
        let image = FileArtifact::new("photo.png", 1024, "image/png");
        assert_eq!(image.media_kind(), Some(MediaKind::Image));

        let video = FileArtifact::new("clip.mp4", 1024, "video/mp4");
        assert_eq!(video.media_kind(), Some(MediaKind::Video));

        let other = FileArtifact::new("doc.pdf", 1024, "application/pdf");
        assert_eq!(other.media_kind(), None);
    }

    #[test]
    fn test_media_kind_display() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }

    // ==========================================================================
    // FILESYSTEM TESTS
    // ==========================================================================

    #[test]
    fn test_from_path_stats_size_and_guesses_mime() {
        let path: PathBuf = std::env::temp_dir().join("synthscan_artifact_test.png");
        std::fs::write(&path, [0u8; 321]).unwrap();

        let artifact = FileArtifact::from_path(&path).unwrap();
        assert_eq!(artifact.name, "synthscan_artifact_test.png");
        assert_eq!(artifact.size_bytes, 321);
        assert_eq!(artifact.mime_type, "image/png");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let err = FileArtifact::from_path("/definitely/not/here.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
