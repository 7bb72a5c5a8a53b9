pub mod group;
pub mod pipeline;
pub mod recognizer;
pub mod render;
pub mod threshold;
pub mod types;

pub use group::{group_tokens, MIN_OVERLAP_RATIO};
pub use pipeline::{DocumentPipeline, LayoutEngine, LayoutError};
pub use recognizer::{InputKind, MockOcr, OcrBackend, OcrError, Page};
pub use render::{char_metrics, render_document, render_line, CharMetrics};
pub use threshold::{adaptive_y_threshold, DEFAULT_Y_THRESHOLD};
pub use types::{filter_tokens, Line, Quad, RawDetection, Token, DEFAULT_CONFIDENCE_FLOOR};
