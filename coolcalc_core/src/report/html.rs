//! # HTML Rendering
//!
//! Renders a [`ReportDocument`](super::ReportDocument) into a self-contained
//! HTML page laid out for A4 print-to-PDF conversion: brand header with
//! date, main title, one bordered block per section, "label: value unit"
//! rows with highlighted rows visually distinguished, watermark, and a
//! footer note.
//!
//! All interpolated text is HTML-escaped; a document with zero sections
//! still produces a well-formed page.

use chrono::Local;
use tracing::info;

use super::{ReportDocument, ReportSection};

/// Brand mark shown in the report header and watermark
const BRAND_NAME: &str = "CoolCalc";

/// Render the document into a complete HTML string.
pub fn render_html(doc: &ReportDocument) -> String {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let inputs_html = render_sections(&doc.inputs);
    let results_html = render_sections(&doc.results);

    let headline_html = match doc.headline() {
        Some(row) => format!(
            r#"<div class="headline">{}: <strong>{} {}</strong></div>"#,
            escape_html(&row.label),
            escape_html(&row.value),
            escape_html(&row.unit),
        ),
        None => String::new(),
    };

    let html = format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  @page {{ size: A4; margin: 10mm; }}
  body {{
    font-family: 'Arial', 'Helvetica', sans-serif;
    line-height: 1.3;
    color: #000;
    background: #ffffff;
    font-size: 11px;
  }}
  .header {{
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 8mm;
    padding-bottom: 4mm;
    border-bottom: 2px solid #000;
  }}
  .brand-title {{
    font-size: 24px;
    font-weight: bold;
    text-transform: uppercase;
    letter-spacing: 1px;
  }}
  .date-section {{ text-align: right; font-size: 12px; color: #666; }}
  .main-title {{
    text-align: center;
    font-size: 20px;
    font-weight: bold;
    margin-bottom: 2mm;
    text-transform: uppercase;
    letter-spacing: 1px;
  }}
  .subtitle {{
    text-align: center;
    font-size: 11px;
    color: #666;
    margin-bottom: 4mm;
  }}
  .headline {{
    text-align: center;
    font-size: 12px;
    margin-bottom: 6mm;
  }}
  .section {{
    margin-bottom: 6mm;
    border: 1px solid #ddd;
    border-radius: 4px;
    overflow: hidden;
  }}
  .section-header {{
    background: #e6f3ff;
    padding: 3mm 4mm;
    border-bottom: 1px solid #ddd;
  }}
  .section-title {{
    font-size: 13px;
    font-weight: bold;
    text-transform: uppercase;
    letter-spacing: 0.5px;
  }}
  .section-content {{ padding: 3mm 4mm; background: #fff; }}
  .parameter-row {{
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 2mm 0;
    border-bottom: 1px solid #f0f0f0;
  }}
  .parameter-row:last-child {{ border-bottom: none; }}
  .parameter-row.highlighted {{
    background: #f0f8ff;
    font-weight: bold;
    padding: 3mm 4mm;
    margin: 0 -4mm;
    border: 1px solid #b3d9ff;
    border-radius: 3px;
  }}
  .parameter-label {{ font-size: 11px; color: #333; flex: 1; }}
  .parameter-value {{
    font-size: 11px;
    font-weight: 600;
    text-align: right;
    min-width: 80px;
  }}
  .highlighted .parameter-label,
  .highlighted .parameter-value {{ color: #000; font-weight: bold; }}
  .watermark {{
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%) rotate(-45deg);
    font-size: 48px;
    color: rgba(0, 0, 0, 0.05);
    font-weight: bold;
    z-index: -1;
    pointer-events: none;
  }}
  .footer-note {{
    text-align: center;
    margin-top: 4mm;
    padding: 2mm;
    background: #f0f8ff;
    border-radius: 4px;
    border: 1px solid #b3d9ff;
    font-size: 10px;
    color: #2563eb;
    font-style: italic;
  }}
  @media print {{
    body {{ font-size: 10px; -webkit-print-color-adjust: exact; }}
    .section {{ break-inside: avoid; page-break-inside: avoid; }}
  }}
</style>
</head>
<body>
<div class="watermark">{brand}</div>
<div class="header">
  <div class="brand-title">{brand}</div>
  <div class="date-section">{date}</div>
</div>
<div class="main-title">{title}</div>
<div class="subtitle">{subtitle}</div>
{headline}
{inputs}
{results}
<div class="footer-note">Professional freezer heat load calculations following ASHRAE practice</div>
</body>
</html>
"##,
        brand = BRAND_NAME,
        title = escape_html(&doc.title),
        subtitle = escape_html(&doc.subtitle),
        date = date,
        headline = headline_html,
        inputs = inputs_html,
        results = results_html,
    );

    info!(bytes = html.len(), title = %doc.title, "Report HTML rendered");

    html
}

fn render_sections(sections: &[ReportSection]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!(
            r#"<div class="section">
  <div class="section-header"><div class="section-title">{}</div></div>
  <div class="section-content">
"#,
            escape_html(&section.title)
        ));
        for row in &section.rows {
            let class = if row.highlighted {
                "parameter-row highlighted"
            } else {
                "parameter-row"
            };
            out.push_str(&format!(
                r#"    <div class="{class}"><div class="parameter-label">{}:</div><div class="parameter-value">{} {}</div></div>
"#,
                escape_html(&row.label),
                escape_html(&row.value),
                escape_html(&row.unit),
            ));
        }
        out.push_str("  </div>\n</div>\n");
    }
    out
}

/// Escape text for safe interpolation into HTML
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
