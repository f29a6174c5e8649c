//! Static image of a rendered chart: **SVG** or **PNG**, chosen by file extension.
//!
//! Same box model, domain and titles as the page; no interaction.

use crate::render::Chart;
use crate::scale::{format_number, step_precision, tick_step};
use anyhow::{Result, anyhow};
use chrono::Datelike;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

const BACKGROUND: RGBColor = RGBColor(31, 33, 70); // #1f2146
const LABEL: RGBColor = RGBColor(224, 226, 252); // #e0e2fc

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Draw `chart` to `out_path` (`.svg` → SVG, anything else → bitmap by extension).
pub fn save_snapshot<P: AsRef<Path>>(chart: &Chart, out_path: P) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let dims = chart.dimensions();
    let size = (
        dims.width().round().max(1.0) as u32,
        dims.height().round().max(1.0) as u32,
    );

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_snapshot(root, chart)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_snapshot(root, chart)?;
    }
    log::info!("wrote snapshot to {}", out_path.display());
    Ok(())
}

fn draw_snapshot<DB>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<()>
where
    DB: DrawingBackend,
{
    let cfg = chart.config();
    let dims = chart.dimensions();
    let margin = dims.margin();
    let bars = chart.bars();
    let n = bars.len() as f64;
    let (_, y_max) = chart.y_scale().domain();
    // plotters needs a non-empty range even for an all-zero series
    let y_top = if y_max > 0.0 { y_max } else { 1.0 };

    root.fill(&BACKGROUND)
        .map_err(|e| anyhow!("{:?}", e))?;

    let mut cc = ChartBuilder::on(&root)
        .margin_top(margin.top as u32)
        .margin_right(margin.right as u32)
        .set_label_area_size(LabelAreaPosition::Left, margin.left as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, margin.bottom as u32)
        .build_cartesian_2d(0f64..n, 0f64..y_top)
        .map_err(|e| anyhow!("{:?}", e))?;

    // X runs over bar indices; label each tick with the year of the bar it falls on.
    let x_label_fmt = |x: &f64| {
        let i = x.floor().max(0.0) as usize;
        bars.get(i)
            .and_then(|b| b.datum.timestamp())
            .map(|t| t.year().to_string())
            .unwrap_or_default()
    };
    let precision = step_precision(tick_step(y_top, cfg.tick_count));
    let y_label_fmt = |v: &f64| format_number(*v, precision);

    cc.configure_mesh()
        .disable_mesh()
        .x_desc(cfg.x_label.as_str())
        .y_desc(cfg.y_label.as_str())
        .x_labels(cfg.tick_count)
        .y_labels(cfg.tick_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .axis_style(LABEL)
        .label_style((FontFamily::SansSerif, 12).into_font().color(&LABEL))
        .axis_desc_style((FontFamily::SansSerif, 16).into_font().color(&LABEL))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    // Same padding as the page, expressed as a fraction of one bar slot.
    let pad = if dims.bar_width() > 0.0 {
        (dims.bar_padding() / dims.bar_width()).min(0.5)
    } else {
        0.0
    };
    cc.draw_series(bars.iter().map(|b| {
        let i = b.index as f64;
        Rectangle::new([(i + pad, 0.0), (i + 1.0, b.datum.gdp)], WHITE.filled())
    }))
    .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
