use crate::chart::render_line_chart;
use crate::interval::Interval;
use crate::models::DashboardView;

pub fn render_index(view: &DashboardView) -> String {
    INDEX_HTML
        .replace("{{BUTTONS}}", &render_buttons(view.interval))
        .replace("{{CHART}}", &render_line_chart(&view.series))
        .replace("{{INTERVAL}}", view.interval.label())
        .replace("{{TOTAL}}", &view.total.to_string())
}

fn render_buttons(active: Interval) -> String {
    Interval::ALL
        .iter()
        .map(|interval| {
            let (class, pressed) = if *interval == active {
                ("btn active", "true")
            } else {
                ("btn", "false")
            };
            format!(
                r#"<form method="post" action="/interval/{slug}"><button class="{class}" type="submit" aria-pressed="{pressed}">{label}</button></form>"#,
                slug = interval.slug(),
                label = interval.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Ryde User Sign-Ups</title>
  <style>
    :root {
      --accent: #8884d8;
      --ink: #282c34;
    }

    body {
      margin: 0;
      font-family: -apple-system, "Segoe UI", Roboto, "Helvetica Neue", sans-serif;
      color: var(--ink);
      text-align: center;
    }

    main {
      padding: 24px 16px 48px;
    }

    .logo {
      display: flex;
      justify-content: center;
      margin-bottom: 8px;
    }

    h1 {
      font-size: 1.8rem;
      font-weight: 600;
      margin: 0 0 24px;
    }

    .button-group {
      display: inline-flex;
      margin-bottom: 16px;
    }

    .button-group form {
      margin: 0;
    }

    .btn {
      appearance: none;
      background: white;
      color: var(--accent);
      border: 1px solid var(--accent);
      margin-left: -1px;
      padding: 6px 18px;
      font-size: 0.875rem;
      font-weight: 500;
      letter-spacing: 0.03em;
      text-transform: uppercase;
      cursor: pointer;
    }

    .button-group form:first-child .btn {
      border-radius: 4px 0 0 4px;
    }

    .button-group form:last-child .btn {
      border-radius: 0 4px 4px 0;
    }

    .btn.active {
      background: rgba(136, 132, 216, 0.12);
      box-shadow: 0 3px 6px rgba(40, 44, 52, 0.25);
      position: relative;
    }

    .graph {
      max-width: 1100px;
      margin: 0 auto;
    }

    #chart {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-grid {
      stroke: #ccc;
    }

    .chart-axis {
      stroke: #666;
    }

    .chart-label {
      fill: #666;
      font-size: 12px;
    }

    .chart-point circle:hover {
      r: 8;
    }

    .summary {
      color: #666;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main>
    <div class="logo">
      <svg width="45" height="45" viewBox="0 0 45 45" role="img" aria-label="ryde logo">
        <circle cx="22.5" cy="22.5" r="22" fill="#8884d8" />
        <text x="22.5" y="30" text-anchor="middle" font-size="22" font-weight="700" fill="white">R</text>
      </svg>
    </div>
    <h1>Ryde User Sign-Ups: October-December 2022</h1>
    <div class="graph">
      <div class="button-group" role="group" aria-label="interval">{{BUTTONS}}</div>
      {{CHART}}
      <p class="summary">{{INTERVAL}} view, {{TOTAL}} sign-ups in total.</p>
    </div>
  </main>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bucket;

    #[test]
    fn marks_only_the_active_button() {
        let view = DashboardView {
            interval: Interval::Week,
            series: vec![Bucket {
                date: "10-07".into(),
                count: 12,
            }],
            total: 12,
        };
        let html = render_index(&view);
        assert!(html.contains(r#"<button class="btn active" type="submit" aria-pressed="true">Week</button>"#));
        assert_eq!(html.matches("btn active").count(), 1);
        assert!(html.contains(r#"action="/interval/day""#));
        assert!(html.contains(r#"action="/interval/month""#));
        assert!(html.contains("Week view, 12 sign-ups in total."));
        assert!(html.contains("<title>10-07"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn page_carries_logo_and_title() {
        let html = render_index(&DashboardView {
            interval: Interval::Day,
            series: Vec::new(),
            total: 0,
        });
        assert!(html.contains(r##"<circle cx="22.5" cy="22.5" r="22" fill="#8884d8" />"##));
        assert!(html.contains("<h1>Ryde User Sign-Ups: October-December 2022</h1>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("No data yet"));
    }
}
