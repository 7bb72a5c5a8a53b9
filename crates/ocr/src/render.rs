use crate::threshold::percentile;
use crate::types::{Line, Token};

/// Character width assumed when no token is wide enough to measure one.
pub const DEFAULT_CHAR_WIDTH: f64 = 6.0;
pub const SPACE_WIDTH_FACTOR: f64 = 0.9;

/// Per-document character geometry, measured once and shared by every line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharMetrics {
    pub char_width: f64,
    pub space_width: f64,
}

/// Median `width / char_count` over multi-character tokens. Documents with no
/// such token fall back to 6-unit characters and 6-unit spaces.
pub fn char_metrics(tokens: &[Token]) -> CharMetrics {
    let mut widths: Vec<f64> = tokens
        .iter()
        .filter(|t| t.text.chars().count() > 1)
        .map(|t| t.width / t.text.chars().count() as f64)
        .collect();

    if widths.is_empty() {
        return CharMetrics {
            char_width: DEFAULT_CHAR_WIDTH,
            space_width: DEFAULT_CHAR_WIDTH,
        };
    }

    widths.sort_by(f64::total_cmp);
    let char_width = percentile(&widths, 0.5);
    CharMetrics { char_width, space_width: char_width * SPACE_WIDTH_FACTOR }
}

/// Renders one line with spacing proportional to the geometric gaps, so the
/// text approximates the original visual layout without pixel alignment.
pub fn render_line(line: &Line, metrics: &CharMetrics) -> String {
    let mut out = String::new();
    let mut prev: Option<(f64, f64)> = None;

    for token in &line.tokens {
        match prev {
            None => {
                let lead = (token.x / metrics.space_width).round().max(0.0) as usize;
                out.push_str(&" ".repeat(lead));
            }
            Some((prev_x, prev_width)) => {
                let gap = token.x - (prev_x + prev_width);
                let spaces = if gap > 0.0 {
                    ((gap / metrics.space_width).round() as i64).max(1) as usize
                } else {
                    1
                };
                out.push_str(&" ".repeat(spaces));
            }
        }
        out.push_str(&token.text);
        prev = Some((token.x, token.width));
    }

    out
}

pub fn render_document(lines: &[Line], metrics: &CharMetrics) -> String {
    lines
        .iter()
        .map(|line| render_line(line, metrics))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawDetection;

    fn token(text: &str, x: f64, width: f64) -> Token {
        Token::from_detection(&RawDetection {
            bbox: [[x, 0.0], [x + width, 0.0], [x + width, 10.0], [x, 10.0]],
            text: text.to_string(),
            confidence: 0.9,
        })
    }

    fn line(tokens: Vec<Token>) -> Line {
        Line { tokens }
    }

    #[test]
    fn metrics_default_when_only_single_chars() {
        let tokens = [token("A", 0.0, 10.0), token("B", 20.0, 10.0)];
        let m = char_metrics(&tokens);
        assert_eq!(m.char_width, 6.0);
        assert_eq!(m.space_width, 6.0);
    }

    #[test]
    fn metrics_take_median_char_width() {
        // 20/4 = 5, 36/6 = 6, 49/7 = 7 → median 6, space 5.4.
        let tokens = [
            token("ABCD", 0.0, 20.0),
            token("ABCDEF", 0.0, 36.0),
            token("ABCDEFG", 0.0, 49.0),
        ];
        let m = char_metrics(&tokens);
        assert_eq!(m.char_width, 6.0);
        assert!((m.space_width - 5.4).abs() < 1e-9);
    }

    #[test]
    fn first_token_gets_proportional_indent() {
        let m = CharMetrics { char_width: 6.0, space_width: 6.0 };
        assert_eq!(render_line(&line(vec![token("X", 12.0, 6.0)]), &m), "  X");
        assert_eq!(render_line(&line(vec![token("X", 0.0, 6.0)]), &m), "X");
    }

    #[test]
    fn gap_maps_to_proportional_spaces() {
        let m = CharMetrics { char_width: 6.0, space_width: 6.0 };
        // gap = 40 - (0 + 10) = 30 → 5 spaces.
        let l = line(vec![token("A", 0.0, 10.0), token("B", 40.0, 10.0)]);
        assert_eq!(render_line(&l, &m), "A     B");
    }

    #[test]
    fn touching_or_overlapping_tokens_get_one_space() {
        let m = CharMetrics { char_width: 6.0, space_width: 6.0 };
        let l = line(vec![token("A", 0.0, 10.0), token("B", 8.0, 10.0)]);
        assert_eq!(render_line(&l, &m), "A B");
        // A tiny positive gap still rounds up to at least one space.
        let l = line(vec![token("A", 0.0, 10.0), token("B", 11.0, 10.0)]);
        assert_eq!(render_line(&l, &m), "A B");
    }

    #[test]
    fn empty_line_renders_empty() {
        let m = CharMetrics { char_width: 6.0, space_width: 6.0 };
        assert_eq!(render_line(&line(Vec::new()), &m), "");
    }

    #[test]
    fn document_joins_lines_with_newlines() {
        let m = CharMetrics { char_width: 6.0, space_width: 6.0 };
        let lines = [
            line(vec![token("TOTAL", 0.0, 30.0), token("5.50", 60.0, 24.0)]),
            line(vec![token("VISA", 0.0, 24.0)]),
        ];
        let text = render_document(&lines, &m);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("TOTAL"));
        assert!(text.ends_with("VISA"));
    }
}
