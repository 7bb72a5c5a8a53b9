use crate::types::{Line, Token};

/// Two tokens whose boxes share more than this fraction of the shorter box's
/// height are treated as the same visual row even when their centers drift
/// past the y tolerance.
pub const MIN_OVERLAP_RATIO: f64 = 0.3;

/// Partitions tokens into reading-order lines.
///
/// Tokens are swept in ascending center-y order. A token joins the current
/// line when it is within `y_threshold` of the previously swept token, or
/// when their vertical overlap ratio exceeds [`MIN_OVERLAP_RATIO`]; otherwise
/// the line is closed and a new one starts. Output lines are ordered by
/// first-token y; tokens within a line by ascending x.
pub fn group_tokens(mut tokens: Vec<Token>, y_threshold: f64) -> Vec<Line> {
    if tokens.is_empty() {
        return Vec::new();
    }
    tokens.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        let joins = match current.last() {
            None => true,
            Some(prev) => {
                let y_distance = (token.y - prev.y).abs();
                let overlap =
                    prev.bottom_y.min(token.bottom_y) - prev.top_y.max(token.top_y);
                let min_height = prev.height.min(token.height);
                let overlap_ratio = if min_height > 0.0 { overlap / min_height } else { 0.0 };
                y_distance <= y_threshold || overlap_ratio > MIN_OVERLAP_RATIO
            }
        };

        if joins {
            current.push(token);
        } else {
            current.sort_by(|a, b| a.x.total_cmp(&b.x));
            lines.push(Line { tokens: std::mem::take(&mut current) });
            current.push(token);
        }
    }

    current.sort_by(|a, b| a.x.total_cmp(&b.x));
    lines.push(Line { tokens: current });
    lines
}
