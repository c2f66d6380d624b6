use crate::analysis::AnalysisReport;
use std::time::Duration;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &AnalysisReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}

/// Fixed-width bar for a score in `[0, 1]`.
pub(crate) fn bar(score: f64, width: usize) -> String {
    let filled = (score.clamp(0.0, 1.0) * width as f64).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (filled as usize).min(width);
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_clamped() {
        assert_eq!(bar(0.5, 4), "██··");
        assert_eq!(bar(2.0, 3), "███");
        assert_eq!(bar(-1.0, 2), "··");
    }
}
