//! Standalone HTML export of a rendered document.
//!
//! The page embeds the tooltip update of every bar as JSON, in the document
//! order of `rect.bar`, plus a few lines of script that apply those updates on
//! `mouseenter` / `mouseleave`. All tooltip values are computed here in Rust;
//! the script only dispatches events.

use crate::dom::Document;
use crate::render::Chart;
use crate::tooltip::TooltipUpdate;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

const DATA_ID: &str = "bar-tooltips";

const BINDER: &str = r##"(function () {
  var updates = JSON.parse(document.getElementById("bar-tooltips").textContent);
  var tip = document.getElementById("tooltip");
  var date = tip.querySelector("#date");
  var gdp = tip.querySelector("#gdp");
  document.querySelectorAll("rect.bar").forEach(function (rect, i) {
    var u = updates[i];
    if (!u) return;
    rect.addEventListener("mouseenter", function () {
      tip.style.opacity = 1;
      if (u.date_text !== null) {
        date.textContent = u.date_text;
        date.setAttribute("data-date", u.date_raw);
      }
      gdp.textContent = u.gdp_text;
      tip.style.transform = "translate(" + u.translate_x + "px, " + u.translate_y + "px)";
    });
    rect.addEventListener("mouseleave", function () {
      tip.style.opacity = 0;
    });
  });
})();"##;

/// Tooltip updates of every bar of every chart, in render order.
pub fn tooltip_updates(charts: &[Chart]) -> Result<Vec<TooltipUpdate>> {
    let mut out = Vec::new();
    for chart in charts {
        for i in 0..chart.bars().len() {
            out.push(chart.tooltip_update(i)?);
        }
    }
    Ok(out)
}

/// Serialize `doc` into a complete page. `charts` must be every chart rendered
/// into `doc`, in the order they were rendered.
pub fn to_html(doc: &Document, charts: &[Chart], page_title: &str) -> Result<String> {
    let updates = tooltip_updates(charts)?;
    let bars_in_doc = doc.select_all("rect.bar").len();
    if updates.len() != bars_in_doc {
        bail!(
            "document has {} bars but the charts describe {}",
            bars_in_doc,
            updates.len()
        );
    }
    // `</` would end the script element early.
    let json = serde_json::to_string(&updates)
        .context("encode tooltip updates")?
        .replace("</", "<\\/");

    let mut body = String::new();
    for child in doc.body().children() {
        child.write_html(&mut body);
    }

    let title = page_title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n{body}\n\
         <script type=\"application/json\" id=\"{data_id}\">{json}</script>\n\
         <script>\n{binder}\n</script>\n</body>\n</html>\n",
        css = doc.stylesheet(),
        data_id = DATA_ID,
        binder = BINDER,
    ))
}

/// Write the page produced by [`to_html`] to `path`.
pub fn write_html<P: AsRef<Path>>(
    doc: &Document,
    charts: &[Chart],
    page_title: &str,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let html = to_html(doc, charts, page_title)?;
    fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote page to {}", path.display());
    Ok(())
}
