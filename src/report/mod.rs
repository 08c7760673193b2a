//! Report generation for analysis results
//!
//! One run produces one verdict; the report wraps it with a timestamp and
//! the source it was computed for, then writes it in the format matching
//! the output extension:
//!
//! - **JSON**: machine-readable, pretty-printed
//! - anything else: plain-text rendering of the verdict card
//!
//! # Usage
//!
//! ```ignore
//! use synthscan::report::{self, Report, VerdictReport};
//!
//! let report = Report::new("essay.txt", VerdictReport::Text(verdict));
//! report::generate("verdict.json", &report)?;  // JSON
//! report::generate("verdict.txt", &report)?;   // plain text
//! ```

pub mod json;
pub mod txt;

use crate::engine::{ImageVerdict, TextVerdict, VideoMetadata, VideoVerdict};
use serde::Serialize;
use std::io;
use std::path::Path;

/// A verdict tagged with its media kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "verdict", rename_all = "lowercase")]
pub enum VerdictReport {
    Image(ImageVerdict),
    Text(TextVerdict),
    Video(VideoVerdict),
}

impl VerdictReport {
    pub fn kind_label(&self) -> &'static str {
        match self {
            VerdictReport::Image(_) => "image",
            VerdictReport::Text(_) => "text",
            VerdictReport::Video(_) => "video",
        }
    }

    pub fn is_ai_generated(&self) -> bool {
        match self {
            VerdictReport::Image(v) => v.is_ai_generated,
            VerdictReport::Text(v) => v.is_ai_generated,
            VerdictReport::Video(v) => v.is_ai_generated,
        }
    }

    pub fn confidence(&self) -> u8 {
        match self {
            VerdictReport::Image(v) => v.confidence,
            VerdictReport::Text(v) => v.confidence,
            VerdictReport::Video(v) => v.confidence,
        }
    }

    pub fn analysis_time(&self) -> &str {
        match self {
            VerdictReport::Image(v) => &v.analysis_time,
            VerdictReport::Text(v) => &v.analysis_time,
            VerdictReport::Video(v) => &v.analysis_time,
        }
    }

    pub fn narrative(&self) -> &str {
        match self {
            VerdictReport::Image(v) => &v.narrative,
            VerdictReport::Text(v) => &v.narrative,
            VerdictReport::Video(v) => &v.narrative,
        }
    }

    /// The sampled indicator phrases, whatever the kind calls them
    /// (patterns / details / findings).
    pub fn indicators(&self) -> &[String] {
        match self {
            VerdictReport::Image(v) => &v.patterns,
            VerdictReport::Text(v) => &v.details,
            VerdictReport::Video(v) => &v.findings,
        }
    }

    pub fn video_info(&self) -> Option<&VideoMetadata> {
        match self {
            VerdictReport::Video(v) => Some(&v.video_info),
            _ => None,
        }
    }
}

/// What gets written to disk: the verdict plus run context.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// RFC 3339 timestamp of when the report was assembled.
    pub generated: String,
    /// File name or "stdin" - whatever the verdict was computed for.
    pub source: String,
    pub result: VerdictReport,
}

impl Report {
    pub fn new(source: impl Into<String>, result: VerdictReport) -> Self {
        Self {
            generated: chrono::Local::now().to_rfc3339(),
            source: source.into(),
            result,
        }
    }
}

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, report: &Report) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, report),
        _ => txt::write(&mut file, report),
    }
}
