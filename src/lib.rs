//! synthscan - Spot AI-generated images, text, and video (simulated)
//!
//! Synthscan looks and behaves like an AI-content detector: give it an
//! image, a block of text, or a video and it returns a verdict with a
//! confidence score, a narrative explanation, and a list of indicator
//! phrases. There is no model behind it - verdicts are drawn at random
//! from canned phrase pools after a simulated processing delay. That makes
//! it a drop-in stand-in for prototyping detector UIs, demos, and
//! integration tests without paying for real inference.
//!
//! # What Is Real and What Is Not
//!
//! Fully simulated: the verdict boolean, the confidence score, the
//! indicator phrases, video duration and resolution.
//!
//! Computed from actual input: text word/sentence counts and average
//! sentence length, video file name and size. These reproduce exactly for
//! identical input, and any number quoted inside an indicator phrase
//! matches the structured field in the same verdict.
//!
//! # Behavior
//!
//! | Kind  | Delay | P(AI) | Confidence (AI) | Confidence (human) |
//! |-------|-------|-------|-----------------|--------------------|
//! | Image | 1.5-2.5s | 60% | 65-94 | 55-94 |
//! | Text  | 1.2-2.0s | 55% | 70-94 | 60-94 |
//! | Video | 2.5-4.0s | 65% | 60-89 | 50-89 |
//!
//! # Quick Start
//!
//! ```no_run
//! use synthscan::{Engine, FileArtifact};
//!
//! # async fn demo() -> Result<(), synthscan::AnalysisError> {
//! let engine = Engine::new();
//!
//! let image = FileArtifact::from_path("photo.jpg").unwrap();
//! let verdict = engine.analyze_image(&image).await?;
//!
//! if verdict.is_ai_generated {
//!     println!("Likely AI ({}% confidence)", verdict.confidence);
//! } else {
//!     println!("Likely human ({}% confidence)", verdict.confidence);
//! }
//! println!("{}", verdict.narrative);
//! # Ok(())
//! # }
//! ```
//!
//! For deterministic output (tests, fixtures) fix the seed and skip the
//! delay:
//!
//! ```
//! use synthscan::{Engine, Pacing};
//!
//! let engine = Engine::new().with_seed(42).with_pacing(Pacing::Instant);
//! ```
//!
//! # Caller Obligations
//!
//! The engine validates almost nothing on purpose (it mimics a backend
//! that trusts its gateway). Callers are expected to check, before
//! invoking:
//!
//! - image/video: the artifact's MIME category matches the entry point
//!   ([`MediaKind::from_mime`])
//! - text: at least [`MIN_TEXT_CHARS`] trimmed characters
//!
//! The only engine-side failures are structural: a zero-byte file or an
//! empty text body ([`AnalysisError`]).
//!
//! # Modules
//!
//! - [`engine`]: the simulated analysis engine, one entry point per kind
//! - [`artifact`]: submission metadata and the media category gate
//! - [`report`]: verdict reports (JSON, plain text)
//! - [`serve`]: interactive browser mode

pub mod artifact;
pub mod engine;
pub mod report;
pub mod serve;

pub use artifact::{FileArtifact, MediaKind, MIN_TEXT_CHARS};
pub use engine::{
    AnalysisError, Engine, ImageVerdict, Pacing, TextMetrics, TextVerdict, VideoMetadata,
    VideoVerdict,
};
