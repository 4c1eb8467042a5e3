use crate::render::{Canvas, RenderError, BACKGROUND, BAR_FILL, GRID, INK};
use crate::sampling::outcome_key;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 360;
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 28.0;
const MARGIN_BOTTOM: f32 = 56.0;

/// Bar chart of measurement counts, one bar per two-bit outcome, scaled to
/// the observed maximum probability.
pub fn render_histogram(counts: &[u64; 4], shots: u32) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let plot_w = WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let total = shots.max(1) as f64;
    let max_prob = counts
        .iter()
        .map(|&c| c as f64 / total)
        .fold(0.0f64, f64::max);
    // Round the axis ceiling up to a quarter so half-and-half splits fill
    // half the plot, not all of it.
    let y_ceiling = ((max_prob / 0.25).ceil() * 0.25).clamp(0.25, 1.0);

    // Gridlines at each quarter of the axis ceiling.
    for step in 1..=4 {
        let y = baseline - plot_h * step as f32 / 4.0;
        canvas.line(MARGIN_LEFT, y, MARGIN_LEFT + plot_w, y, GRID);
        canvas.line(MARGIN_LEFT - 5.0, y, MARGIN_LEFT, y, INK);
    }

    // Axes.
    canvas.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, baseline, INK);
    canvas.line(MARGIN_LEFT, baseline, MARGIN_LEFT + plot_w, baseline, INK);

    let slot_w = plot_w / counts.len() as f32;
    let bar_w = slot_w * 0.55;
    for (index, &count) in counts.iter().enumerate() {
        let prob = count as f64 / total;
        let bar_h = (prob / y_ceiling) as f32 * plot_h;
        let x = MARGIN_LEFT + slot_w * index as f32 + (slot_w - bar_w) / 2.0;
        if bar_h > 0.5 {
            canvas.fill_rect(x, baseline - bar_h, bar_w, bar_h, BAR_FILL);
            canvas.rect_outline(x, baseline - bar_h, bar_w, bar_h, INK);
        }
        // Outcome label under the bar.
        let label = outcome_key(index);
        let glyph_h = 16.0;
        let label_w = glyph_h * 0.95 * label.len() as f32;
        canvas.text(
            &label,
            x + bar_w / 2.0 - label_w / 2.0,
            baseline + 12.0,
            glyph_h,
            INK,
        );
    }

    // Mask any bar overshoot above the plot area.
    canvas.fill_rect(MARGIN_LEFT + 1.0, 0.0, plot_w, MARGIN_TOP - 1.0, BACKGROUND);

    canvas.into_png()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{assert_png_dimensions, has_ink};

    #[test]
    fn renders_decodable_png_with_expected_dimensions() {
        let bytes = render_histogram(&[512, 0, 0, 512], 1024).unwrap();
        assert_png_dimensions(&bytes, WIDTH, HEIGHT);
        assert!(has_ink(&bytes));
    }

    #[test]
    fn tolerates_zero_shots() {
        let bytes = render_histogram(&[0, 0, 0, 0], 0).unwrap();
        assert_png_dimensions(&bytes, WIDTH, HEIGHT);
    }
}
