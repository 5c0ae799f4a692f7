//! Glyph-level chart drawing: sparklines and horizontal bars.
//!
//! These are pure string producers; the [`Renderer`](super::Renderer)
//! decides where they go and what surrounds them.

/// Upper bound of the mood scale, shared by all charts.
pub const MOOD_MAX: f64 = 10.0;

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders moods (1-10) as one sparkline glyph per value.
pub fn sparkline(moods: &[u8]) -> String {
    moods
        .iter()
        .map(|&m| {
            let idx = ((m.saturating_sub(1) as usize) * SPARK_GLYPHS.len() / 10)
                .min(SPARK_GLYPHS.len() - 1);
            SPARK_GLYPHS[idx]
        })
        .collect()
}

/// Renders a horizontal bar of `width` cells filled proportionally to
/// `value / max`. Any non-zero value gets at least one cell.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
