use crate::types::Token;

/// Grouping tolerance used when the document is too sparse to estimate one.
pub const DEFAULT_Y_THRESHOLD: f64 = 10.0;

/// Estimates the vertical grouping tolerance for one document.
///
/// Dense, small-font receipts need a tighter tolerance than sparse headers;
/// the 25th percentile of the positive y-gaps adapts to the font size without
/// per-document tuning. The result is kept in [3, 15] and never exceeds half
/// the mean token height.
pub fn adaptive_y_threshold(tokens: &[Token]) -> f64 {
    if tokens.len() < 2 {
        return DEFAULT_Y_THRESHOLD;
    }

    let mut ys: Vec<f64> = tokens.iter().map(|t| t.y).collect();
    ys.sort_by(f64::total_cmp);

    let mut gaps: Vec<f64> = ys
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|gap| *gap > 0.0)
        .collect();
    gaps.sort_by(f64::total_cmp);

    let candidate = if gaps.is_empty() {
        DEFAULT_Y_THRESHOLD
    } else {
        percentile(&gaps, 0.25)
    };

    let mean_height = tokens.iter().map(|t| t.height).sum::<f64>() / tokens.len() as f64;

    candidate.min(mean_height * 0.5).min(15.0).max(3.0)
}

/// Linearly interpolated percentile over an ascending-sorted slice.
/// `q` is a fraction in [0, 1]. The slice must be non-empty.
pub(crate) fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}
