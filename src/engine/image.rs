//! Simulated image analysis
//!
//! Images get the middle-of-the-road treatment: a 1.5-2.5s delay and a 60%
//! chance of an AI verdict. The indicator pools describe visual artifact
//! signatures - texture smoothness, lighting, geometry - plausible enough
//! to read as a real detector's findings.

use super::{format_seconds, narrative, sample_indicators, AnalysisError, Engine};
use crate::artifact::FileArtifact;
use log::debug;
use rand::Rng;
use serde::Serialize;

const AI_LEAD: &str =
    "Our analysis suggests this image exhibits characteristics commonly found in AI-generated visuals.";
const HUMAN_LEAD: &str =
    "This image appears to align with characteristics of human-created photography or digital art.";

const AI_PATTERNS: [&str; 5] = [
    "Unusual smoothness in certain textures.",
    "Non-standard lighting or shadow inconsistencies.",
    "Repetitive micro-patterns or artifacts.",
    "Geometric anomalies or overly perfect shapes.",
    "Subtle distortions in complex areas like hands or faces.",
];

const HUMAN_PATTERNS: [&str; 5] = [
    "Natural variations in texture and detail.",
    "Consistent and plausible lighting conditions.",
    "Organic imperfections and asymmetries.",
    "Complex details rendered realistically.",
    "Typical photographic noise or artistic style.",
];

/// Result of one simulated image analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ImageVerdict {
    pub is_ai_generated: bool,
    /// AI verdicts land in 65-94, human verdicts in 55-94.
    pub confidence: u8,
    /// Seconds spent "processing", one fractional digit (e.g. "2.1").
    pub analysis_time: String,
    /// Lead sentence plus the joined pattern phrases.
    pub narrative: String,
    /// 2 or 3 distinct phrases from the matching pool, shuffled.
    pub patterns: Vec<String>,
}

impl Engine {
    /// Simulate analysis of an image artifact.
    ///
    /// Suspends for 1500-2500ms (unless pacing is instant), then resolves
    /// with a randomized verdict. The artifact's bytes are never read - only
    /// its metadata travels into the verdict, and for images not even that.
    ///
    /// Callers should verify the artifact's MIME category is `image/` before
    /// invoking; the engine only rejects structurally empty input.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptyFile`] if the artifact is zero bytes.
    pub async fn analyze_image(&self, artifact: &FileArtifact) -> Result<ImageVerdict, AnalysisError> {
        if artifact.size_bytes == 0 {
            return Err(AnalysisError::EmptyFile(artifact.name.clone()));
        }

        let mut rng = self.rng();
        let elapsed = self.pace(&mut rng, 1500, 1000).await;

        let is_ai_generated = rng.gen::<f64>() > 0.4;
        let confidence: u8 = if is_ai_generated {
            rng.gen_range(65..95)
        } else {
            rng.gen_range(55..95)
        };

        let (lead, label, pool) = if is_ai_generated {
            (AI_LEAD, "Key indicators include:", AI_PATTERNS)
        } else {
            (HUMAN_LEAD, "Observed characteristics:", HUMAN_PATTERNS)
        };

        let patterns = sample_indicators(&mut rng, pool.map(str::to_string));
        debug!(
            "image verdict for {}: ai={} confidence={}",
            artifact.name, is_ai_generated, confidence
        );

        Ok(ImageVerdict {
            is_ai_generated,
            confidence,
            analysis_time: format_seconds(elapsed),
            narrative: narrative(lead, label, &patterns),
            patterns,
        })
    }
}
