use serde::{Deserialize, Serialize};

/// Four corner points of a detection polygon, clockwise from top-left.
pub type Quad = [[f64; 2]; 4];

/// Detections below this confidence are dropped before layout reconstruction.
pub const DEFAULT_CONFIDENCE_FLOOR: f32 = 0.6;

/// One OCR detection exactly as the recognizer returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub bbox: Quad,
    pub text: String,
    pub confidence: f32,
}

/// A detection with its geometry derived for line grouping. Immutable once
/// built; owned by a single pipeline invocation.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    /// Left edge (x of the top-left corner).
    pub x: f64,
    /// Vertical center: mean of the four corner ys.
    pub y: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f32,
    pub bbox: Quad,
}

impl Token {
    pub fn from_detection(det: &RawDetection) -> Self {
        let [[x1, y1], [x2, y2], [x3, y3], [x4, y4]] = det.bbox;
        Token {
            text: det.text.clone(),
            x: x1,
            y: (y1 + y2 + y3 + y4) / 4.0,
            top_y: y1.min(y2),
            bottom_y: y3.max(y4),
            width: (x2 - x1).abs().max((x3 - x4).abs()),
            height: (y3 - y1).abs().max((y4 - y2).abs()),
            confidence: det.confidence,
            bbox: det.bbox,
        }
    }
}

/// A horizontally ordered group of tokens judged to share a visual text row.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub tokens: Vec<Token>,
}

/// Keeps detections at or above `floor` and derives their token geometry.
pub fn filter_tokens(detections: &[RawDetection], floor: f32) -> Vec<Token> {
    detections
        .iter()
        .filter(|d| d.confidence >= floor)
        .map(Token::from_detection)
        .collect()
}
