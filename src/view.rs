// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side HTML for the activity grid and the page around it.

use crate::models::GridContainer;
use std::fmt::Write as _;

/// Render the grid container as an HTML fragment.
///
/// One `.strava-cell` per day, the month strip when the container carries
/// labels, then the debug line.
pub fn render_grid_fragment(container: &GridContainer) -> String {
    let mut html = String::with_capacity(container.cells.len() * 96 + 256);

    if let Some(labels) = &container.month_labels {
        html.push_str(r#"<div class="strava-months">"#);
        for label in labels {
            let _ = write!(
                html,
                r#"<span class="strava-month" style="left: {}px">{}</span>"#,
                label.offset_px,
                escape(&label.text)
            );
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<div class="strava-grid" id="stravaGrid">"#);
    for cell in &container.cells {
        let mut class = String::from("strava-cell");
        if cell.level.as_u8() > 0 {
            let _ = write!(class, " level-{}", cell.level.as_u8());
        }
        if cell.is_today {
            class.push_str(" today");
        }
        let _ = write!(
            html,
            r#"<div class="{}" data-date="{}" title="{}"></div>"#,
            class,
            cell.date.format("%Y-%m-%d"),
            escape(&cell.tooltip)
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<p class="strava-debug">{}</p>"#,
        escape(&container.debug)
    );

    html
}

/// Render the full page with the grid embedded.
pub fn render_page(container: &GridContainer) -> String {
    PAGE_HTML.replace("{{GRID}}", &render_grid_fragment(container))
}

/// Escape text for use in HTML content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity</title>
  <style>
    body {
      margin: 0;
      padding: 48px 24px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      background: #0d1117;
      color: #e6edf3;
    }

    .strava-wrap {
      position: relative;
      overflow-x: auto;
    }

    .strava-months {
      position: relative;
      height: 16px;
      font-size: 10px;
      color: #7d8590;
    }

    .strava-month {
      position: absolute;
      top: 0;
    }

    .strava-grid {
      display: grid;
      grid-template-rows: repeat(7, 10px);
      grid-auto-flow: column;
      grid-auto-columns: 10px;
      gap: 3px;
    }

    .strava-cell {
      width: 10px;
      height: 10px;
      border-radius: 2px;
      background: #161b22;
    }

    .strava-cell.level-1 { background: #4a2a10; }
    .strava-cell.level-2 { background: #8a3f0e; }
    .strava-cell.level-3 { background: #d2560c; }
    .strava-cell.level-4 { background: #fc4c02; }
    .strava-cell.today { outline: 1px solid #e6edf3; }

    .strava-debug {
      font-size: 11px;
      color: #7d8590;
    }

    .contact-overlay {
      display: none;
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.7);
      place-items: center;
    }

    .contact-overlay:target {
      display: grid;
    }

    .contact-card {
      background: #161b22;
      padding: 32px;
      border-radius: 16px;
    }

    a { color: #fc4c02; }
  </style>
</head>
<body>
  <main>
    <section class="strava-section">
      <h2>Activity</h2>
      <div class="strava-wrap">{{GRID}}</div>
    </section>
    <p><a href="#contactOverlay" id="openContact">Get in touch</a></p>
  </main>
  <div class="contact-overlay" id="contactOverlay">
    <div class="contact-card">
      <a href="#" id="closeContact">Close</a>
    </div>
  </div>
</body>
</html>
"##;
