use thiserror::Error;

use crate::group::group_tokens;
use crate::recognizer::{InputKind, OcrBackend, OcrError, Page};
use crate::render::{char_metrics, render_document};
use crate::threshold::adaptive_y_threshold;
use crate::types::{filter_tokens, RawDetection, DEFAULT_CONFIDENCE_FLOOR};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unsupported input type '{0}' — only images and PDFs are supported")]
    UnsupportedInput(String),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
}

/// Turns one page of raw detections into spatially faithful text:
/// filter → measure → estimate tolerance → group → render.
///
/// Pure and synchronous; geometry problems never error, they degrade to
/// defaults (empty page → empty string).
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    pub confidence_floor: f32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self { confidence_floor: DEFAULT_CONFIDENCE_FLOOR }
    }
}

impl LayoutEngine {
    pub fn reconstruct_page(&self, detections: &[RawDetection]) -> String {
        let tokens = filter_tokens(detections, self.confidence_floor);
        let metrics = char_metrics(&tokens);
        let threshold = adaptive_y_threshold(&tokens);
        let lines = group_tokens(tokens, threshold);
        render_document(&lines, &metrics)
    }

    /// Reconstructs a whole document, page texts joined with newlines.
    pub fn reconstruct(&self, pages: &[Page]) -> String {
        pages
            .iter()
            .map(|page| self.reconstruct_page(page))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Orchestrates: input-kind check → OCR collaborator → layout reconstruction.
pub struct DocumentPipeline<R: OcrBackend> {
    engine: LayoutEngine,
    recognizer: R,
}

impl<R: OcrBackend> DocumentPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { engine: LayoutEngine::default(), recognizer }
    }

    pub fn with_engine(recognizer: R, engine: LayoutEngine) -> Self {
        Self { engine, recognizer }
    }

    /// Processes raw file bytes into reconstructed document text.
    pub fn process_bytes(&self, data: &[u8], content_type: &str) -> Result<String, LayoutError> {
        let kind = InputKind::from_mime(content_type)
            .ok_or_else(|| LayoutError::UnsupportedInput(content_type.to_string()))?;
        let pages = self.recognizer.detect(data, kind)?;
        tracing::debug!(pages = pages.len(), "reconstructing document layout");
        Ok(self.engine.reconstruct(&pages))
    }
}
