//! Descending bar chart with a title, as a standalone SVG document.

use crate::config::ChartConfig;
use crate::graph::{Tally, TallyEntry};

use super::svg;

/// Vertical gap between a bar's top and its value label.
const VALUE_LABEL_GAP: f64 = 10.0;
/// y coordinate of the title on the outer canvas.
const TITLE_Y: f64 = 30.0;

/// Bar chart of `data` in the given order, one bar per entry.
///
/// Bar heights are scaled so the largest value reaches `max_bar_height`.
/// When every value is 0 all bars have zero height.
pub fn bar_chart(data: &[&TallyEntry], layout: &ChartConfig) -> String {
    let max_value = data.iter().map(|e| e.count).max().unwrap_or(0);
    let max_bar_height = f64::from(layout.max_bar_height);

    let bar_width = f64::from(layout.bar_width);
    let pitch = f64::from(layout.bar_pitch);
    let margin = f64::from(layout.bar_margin);
    let baseline = f64::from(layout.baseline);
    let label_baseline = f64::from(layout.label_baseline);

    let mut elements = Vec::with_capacity(data.len() * 3);
    for (i, entry) in data.iter().enumerate() {
        let x = margin + i as f64 * pitch;
        let height = if max_value == 0 {
            0.0
        } else {
            entry.count as f64 / max_value as f64 * max_bar_height
        };
        let y = baseline - height;
        let center = x + bar_width / 2.0;

        elements.push(svg::rect(x, y, bar_width, height));
        elements.push(svg::text(
            center,
            y - VALUE_LABEL_GAP,
            &entry.count.to_string(),
            layout.label_size,
        ));
        elements.push(svg::text(center, label_baseline, &entry.entity, layout.label_size));
    }

    let width = margin + data.len() as f64 * pitch;
    svg::svg(width, f64::from(layout.plot_height), &elements)
}

/// Render `tally` as a titled bar chart sorted by count, highest first.
///
/// Returns `None` when the tally is empty.
pub fn render_histogram(tally: &Tally, title: &str, layout: &ChartConfig) -> Option<String> {
    if tally.is_empty() {
        return None;
    }

    let sorted = tally.sorted_desc();
    let chart = bar_chart(&sorted, layout);
    let heading = svg::text(
        f64::from(layout.canvas_width) / 2.0,
        TITLE_Y,
        title,
        layout.title_size,
    );

    Some(svg::svg(
        f64::from(layout.canvas_width),
        f64::from(layout.canvas_height),
        &[heading, chart],
    ))
}
