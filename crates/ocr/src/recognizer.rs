use thiserror::Error;

use crate::types::RawDetection;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("File decode error: {0}")]
    Decode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
}

/// Input kinds the pipeline accepts. Anything else is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Image,
    Pdf,
}

impl InputKind {
    pub fn from_mime(content_type: &str) -> Option<InputKind> {
        if content_type.starts_with("image/") {
            Some(InputKind::Image)
        } else if content_type.starts_with("application/pdf") {
            Some(InputKind::Pdf)
        } else {
            None
        }
    }
}

/// One page's worth of detections. Images produce a single page; PDFs one per
/// rendered page.
pub type Page = Vec<RawDetection>;

/// Abstraction over the OCR collaborator.
///
/// Implementations accept raw file bytes and return, per page, the detected
/// (bounding polygon, text, confidence) tuples. The layout engine consumes
/// exactly this shape and nothing else about the model.
pub trait OcrBackend: Send + Sync {
    fn detect(&self, data: &[u8], kind: InputKind) -> Result<Vec<Page>, OcrError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns preset detection pages so the layout pipeline can be exercised
/// without a real recognizer.
pub struct MockOcr {
    pub pages: Vec<Page>,
}

impl MockOcr {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// A mock producing a single page.
    pub fn single_page(detections: Vec<RawDetection>) -> Self {
        Self { pages: vec![detections] }
    }
}

impl OcrBackend for MockOcr {
    fn detect(&self, _data: &[u8], _kind: InputKind) -> Result<Vec<Page>, OcrError> {
        Ok(self.pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_dispatch() {
        assert_eq!(InputKind::from_mime("image/png"), Some(InputKind::Image));
        assert_eq!(InputKind::from_mime("image/jpeg"), Some(InputKind::Image));
        assert_eq!(InputKind::from_mime("application/pdf"), Some(InputKind::Pdf));
        assert_eq!(InputKind::from_mime("text/plain"), None);
        assert_eq!(InputKind::from_mime("application/json"), None);
    }

    #[test]
    fn mock_returns_preset_pages() {
        let det = RawDetection {
            bbox: [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            text: "TOTAL".to_string(),
            confidence: 0.9,
        };
        let mock = MockOcr::single_page(vec![det.clone()]);
        let pages = mock.detect(b"ignored", InputKind::Image).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0][0], det);
    }
}
