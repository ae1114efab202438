use crate::models::Bucket;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 30.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 64.0;
const TICKS: u64 = 4;
const STROKE: &str = "#8884d8";

/// Renders buckets as an SVG line chart: grid, axes, one `count` series,
/// a hover tooltip per point and a legend.
pub fn render_line_chart(buckets: &[Bucket]) -> String {
    let mut svg = format!(
        r#"<svg id="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Sign-ups chart">"#
    );

    if buckets.is_empty() {
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{}" y="{}" text-anchor="middle">No data yet</text></svg>"#,
            WIDTH / 2.0,
            HEIGHT / 2.0
        ));
        return svg;
    }

    // Axis maths stays in f64; bucket counts may sit at u64::MAX.
    let max = nice_max(buckets.iter().map(|bucket| bucket.count).max().unwrap_or(0));
    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let bottom = PAD_TOP + plot_h;
    let step = if buckets.len() > 1 {
        plot_w / (buckets.len() - 1) as f64
    } else {
        0.0
    };
    let x = |index: usize| {
        if buckets.len() > 1 {
            PAD_LEFT + index as f64 * step
        } else {
            PAD_LEFT + plot_w / 2.0
        }
    };
    let y = |value: f64| bottom - value / max * plot_h;

    for tick in 0..=TICKS {
        let value = max * tick as f64 / TICKS as f64;
        let y_pos = y(value);
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{PAD_LEFT}" y1="{y_pos:.2}" x2="{:.2}" y2="{y_pos:.2}" stroke-dasharray="3 3" />"#,
            WIDTH - PAD_RIGHT
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            PAD_LEFT - 8.0,
            y_pos + 4.0,
            tick_label(value)
        ));
    }

    for index in 0..buckets.len() {
        let x_pos = x(index);
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{x_pos:.2}" y1="{PAD_TOP}" x2="{x_pos:.2}" y2="{bottom:.2}" stroke-dasharray="3 3" />"#
        ));
    }

    svg.push_str(&format!(
        r#"<line class="chart-axis" x1="{PAD_LEFT}" y1="{bottom:.2}" x2="{:.2}" y2="{bottom:.2}" />"#,
        WIDTH - PAD_RIGHT
    ));
    svg.push_str(&format!(
        r#"<line class="chart-axis" x1="{PAD_LEFT}" y1="{PAD_TOP}" x2="{PAD_LEFT}" y2="{bottom:.2}" />"#
    ));

    let label_every = buckets.len().div_ceil(16).max(1);
    for (index, bucket) in buckets.iter().enumerate() {
        if index % label_every != 0 {
            continue;
        }
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            x(index),
            bottom + 18.0,
            escape(&bucket.date)
        ));
    }

    let path = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let cmd = if index == 0 { 'M' } else { 'L' };
            format!("{cmd} {:.2} {:.2}", x(index), y(bucket.count as f64))
        })
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        r#"<path class="chart-line" d="{path}" fill="none" stroke="{STROKE}" stroke-width="2" />"#
    ));

    for (index, bucket) in buckets.iter().enumerate() {
        svg.push_str(&format!(
            r#"<g class="chart-point"><circle cx="{:.2}" cy="{:.2}" r="4" fill="white" stroke="{STROKE}" stroke-width="2" /><title>{}&#10;count : {}</title></g>"#,
            x(index),
            y(bucket.count as f64),
            escape(&bucket.date),
            bucket.count
        ));
    }

    let legend_y = HEIGHT - 14.0;
    let legend_x = WIDTH / 2.0;
    svg.push_str(&format!(
        r#"<g class="chart-legend"><line x1="{:.2}" y1="{legend_y:.2}" x2="{:.2}" y2="{legend_y:.2}" stroke="{STROKE}" stroke-width="2" /><text class="chart-label" x="{:.2}" y="{:.2}" fill="{STROKE}">count</text></g>"#,
        legend_x - 30.0,
        legend_x - 10.0,
        legend_x - 4.0,
        legend_y + 4.0
    ));

    svg.push_str("</svg>");
    svg
}

/// Rounds the axis ceiling up so four ticks land on whole numbers.
fn nice_max(max: u64) -> f64 {
    if max == 0 {
        return TICKS as f64;
    }
    (max.div_ceil(TICKS) as f64) * TICKS as f64
}

fn tick_label(value: f64) -> String {
    format!("{}", value.round())
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
