//! Hover interaction: what the shared `#tooltip` shows for a bar, and the
//! show/hide mutations applied to the document.

use crate::dom::{Document, number};
use crate::error::ChartError;
use crate::layout::BoundedDimensions;
use crate::models::parse_date;
use crate::render::Bar;
use chrono::Datelike;
use serde::Serialize;

pub const TOOLTIP_ID: &str = "tooltip";
pub const DATE_ID: &str = "date";
pub const GDP_ID: &str = "gdp";

/// `"2008-10-01"` becomes `"10-1-2008"` (month-day-year, no padding). `None` for invalid dates.
pub fn format_date(raw: &str) -> Option<String> {
    let t = parse_date(raw)?;
    Some(format!("{}-{}-{}", t.month(), t.day(), t.year()))
}

pub fn format_gdp(gdp: f64) -> String {
    format!("{} billion dollars", number(gdp.round()))
}

/// Per-bar hover state. At most one bar is hovered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Idle,
    Hovered,
}

/// Everything a pointer-enter writes into the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipUpdate {
    /// `None` when the bar's date does not parse; the date line is then left as is.
    pub date_text: Option<String>,
    pub date_raw: String,
    pub gdp_text: String,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TooltipUpdate {
    /// Anchor the tooltip on `bar`.
    ///
    /// Horizontally: bar center in page coordinates, shifted left by a full bar
    /// width, which leaves the tooltip half a bar left of the center.
    /// Vertically: bar top in page coordinates plus `offset_y`.
    pub fn for_bar(bar: &Bar, dims: &BoundedDimensions, offset_y: f64) -> Self {
        let margin = dims.margin();
        let center_x = bar.x + dims.bar_width() / 2.0 + margin.left;
        let top_y = bar.y + margin.top;
        Self {
            date_text: format_date(&bar.datum.date),
            date_raw: bar.datum.date.clone(),
            gdp_text: format_gdp(bar.datum.gdp),
            translate_x: center_x - dims.bar_width(),
            translate_y: offset_y + top_y,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            number(self.translate_x),
            number(self.translate_y)
        )
    }
}

/// Check that `#tooltip` with `#date` and `#gdp` inside exists.
pub fn check_host(doc: &Document) -> Result<(), ChartError> {
    let tip = doc
        .get_element_by_id(TOOLTIP_ID)
        .ok_or(ChartError::MissingElement(TOOLTIP_ID))?;
    tip.find_by_id(DATE_ID)
        .ok_or(ChartError::MissingElement(DATE_ID))?;
    tip.find_by_id(GDP_ID)
        .ok_or(ChartError::MissingElement(GDP_ID))?;
    Ok(())
}

/// Make the tooltip visible and fill it from `update`.
pub fn show(doc: &mut Document, update: &TooltipUpdate) -> Result<(), ChartError> {
    check_host(doc)?;
    let tip = doc
        .get_element_by_id_mut(TOOLTIP_ID)
        .ok_or(ChartError::MissingElement(TOOLTIP_ID))?;
    tip.set_style("opacity", "1");
    tip.set_style("transform", update.transform());

    if let Some(text) = &update.date_text {
        let date = tip
            .find_by_id_mut(DATE_ID)
            .ok_or(ChartError::MissingElement(DATE_ID))?;
        date.set_text(text.as_str());
        date.set_attribute("data-date", update.date_raw.as_str());
    } else {
        log::debug!("date {:?} does not parse; keeping previous date line", update.date_raw);
    }

    let gdp = tip
        .find_by_id_mut(GDP_ID)
        .ok_or(ChartError::MissingElement(GDP_ID))?;
    gdp.set_text(update.gdp_text.as_str());
    Ok(())
}

/// Current tooltip opacity. Without an inline value the host stylesheet's `0` applies.
pub fn opacity(doc: &Document) -> Option<f64> {
    let tip = doc.get_element_by_id(TOOLTIP_ID)?;
    Some(
        tip.style("opacity")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0),
    )
}

/// Hide the tooltip. Text and position stay as they were.
pub fn hide(doc: &mut Document) -> Result<(), ChartError> {
    let tip = doc
        .get_element_by_id_mut(TOOLTIP_ID)
        .ok_or(ChartError::MissingElement(TOOLTIP_ID))?;
    tip.set_style("opacity", "0");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_month_day_year_without_padding() {
        assert_eq!(format_date("2008-10-01").as_deref(), Some("10-1-2008"));
        assert_eq!(format_date("1947-01-01").as_deref(), Some("1-1-1947"));
        assert_eq!(format_date("not-a-date"), None);
        assert_eq!(format_date("2008-13-01"), None);
    }

    #[test]
    fn gdp_is_rounded() {
        assert_eq!(format_gdp(14891.6), "14892 billion dollars");
        assert_eq!(format_gdp(243.1), "243 billion dollars");
        assert_eq!(format_gdp(2.5), "3 billion dollars");
    }
}
