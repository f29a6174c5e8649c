//! The render pass: layout, scales, the chart subtree, and the hover handlers bound to it.
//!
//! Rendering is all-or-nothing. Every check (host skeleton, empty series,
//! viewport size) runs before the first mutation, and the finished subtree is
//! attached to `#wrapper` in one step.

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::dom::{Document, Element, number};
use crate::error::ChartError;
use crate::layout::{BoundedDimensions, OuterDimensions};
use crate::models::{Dataset, Datum};
use crate::scale::{LinearScale, TimeScale};
use crate::stats;
use crate::tooltip::{self, BarState, TooltipUpdate};
use chrono::{DateTime, Utc};
use log::{debug, warn};

pub const WRAPPER_ID: &str = "wrapper";

/// Geometry of one bar, in bounded-box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub datum: Datum,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    fn layout(index: usize, datum: &Datum, dims: &BoundedDimensions, y_scale: &LinearScale) -> Self {
        let y = y_scale.apply(datum.gdp);
        Self {
            index,
            datum: datum.clone(),
            x: index as f64 * dims.bar_width() + dims.bar_padding(),
            y,
            width: dims.bar_width(),
            height: dims.bounded_height() - y,
        }
    }

    fn to_element(&self, fill: &str) -> Element {
        Element::new("rect")
            .with_attr("class", "bar")
            .with_attr("data-date", self.datum.date.as_str())
            .with_attr("data-gdp", number(self.datum.gdp))
            .with_attr("x", number(self.x))
            .with_attr("y", number(self.y))
            .with_attr("width", number(self.width))
            .with_attr("height", number(self.height))
            .with_attr("fill", fill)
    }
}

/// A rendered chart: its box model, scales and bars, plus the hover handlers'
/// state. Only [`render`] creates one, so handlers never exist before render.
#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
    dimensions: BoundedDimensions,
    y_scale: LinearScale,
    x_scale: TimeScale,
    bars: Vec<Bar>,
    hovered: Option<usize>,
}

/// Render with the default configuration.
pub fn render(doc: &mut Document, data: &Dataset, viewport_width: f64) -> Result<Chart, ChartError> {
    render_with(doc, data, viewport_width, &ChartConfig::default())
}

pub fn render_with(
    doc: &mut Document,
    data: &Dataset,
    viewport_width: f64,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    if doc.get_element_by_id(WRAPPER_ID).is_none() {
        return Err(ChartError::MissingElement(WRAPPER_ID));
    }
    tooltip::check_host(doc)?;
    if data.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let dimensions = OuterDimensions::for_viewport(config, viewport_width).bound(data.len())?;
    let (y_scale, x_scale) = build_scales(data, &dimensions);
    let bars: Vec<Bar> = data
        .points()
        .iter()
        .enumerate()
        .map(|(i, d)| Bar::layout(i, d, &dimensions, &y_scale))
        .collect();
    for bar in bars.iter().filter(|b| b.datum.timestamp().is_none()) {
        warn!(
            "bar {}: date {:?} is not YYYY-MM-DD; tooltip will skip its date",
            bar.index, bar.datum.date
        );
    }

    let chart = Chart {
        config: config.clone(),
        dimensions,
        y_scale,
        x_scale,
        bars,
        hovered: None,
    };
    let (title, svg) = chart.build_tree();

    let wrapper = doc
        .get_element_by_id_mut(WRAPPER_ID)
        .ok_or(ChartError::MissingElement(WRAPPER_ID))?;
    wrapper.append(title);
    wrapper.append(svg);
    debug!(
        "rendered {} bars into {}x{} (bounded {}x{}, bar width {})",
        chart.bars.len(),
        dimensions.width(),
        dimensions.height(),
        dimensions.bounded_width(),
        dimensions.bounded_height(),
        dimensions.bar_width()
    );
    Ok(chart)
}

/// `y: [0, max gdp] -> [bounded_height, 0]`, `x: [first, last date] -> [0, bounded_width]`.
pub fn build_scales(data: &Dataset, dims: &BoundedDimensions) -> (LinearScale, TimeScale) {
    let y_scale = LinearScale::new((0.0, stats::y_max(data)), (dims.bounded_height(), 0.0));
    let extent = data.time_extent().unwrap_or_else(|| {
        warn!("no parseable dates; time axis collapses to the epoch");
        let epoch = DateTime::<Utc>::UNIX_EPOCH.naive_utc();
        (epoch, epoch)
    });
    let x_scale = TimeScale::new(extent, (0.0, dims.bounded_width()));
    (y_scale, x_scale)
}

impl Chart {
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dimensions(&self) -> &BoundedDimensions {
        &self.dimensions
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x_scale
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Index of the bar under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn bar_state(&self, index: usize) -> BarState {
        if self.hovered == Some(index) {
            BarState::Hovered
        } else {
            BarState::Idle
        }
    }

    fn bar(&self, index: usize) -> Result<&Bar, ChartError> {
        self.bars.get(index).ok_or(ChartError::NoSuchBar {
            index,
            len: self.bars.len(),
        })
    }

    /// What pointer-enter on bar `index` writes into the tooltip.
    pub fn tooltip_update(&self, index: usize) -> Result<TooltipUpdate, ChartError> {
        let bar = self.bar(index)?;
        Ok(TooltipUpdate::for_bar(
            bar,
            &self.dimensions,
            self.config.tooltip_offset_y,
        ))
    }

    /// Idle -> Hovered: show and fill the tooltip.
    pub fn pointer_enter(&mut self, doc: &mut Document, index: usize) -> Result<(), ChartError> {
        let update = self.tooltip_update(index)?;
        tooltip::show(doc, &update)?;
        self.hovered = Some(index);
        debug!("pointer enter bar {index}: {}", update.gdp_text);
        Ok(())
    }

    /// Hovered -> Idle: hide the tooltip. A leave on a bar that is not hovered is ignored.
    pub fn pointer_leave(&mut self, doc: &mut Document, index: usize) -> Result<(), ChartError> {
        self.bar(index)?;
        if self.hovered != Some(index) {
            debug!("pointer leave bar {index} without enter; ignored");
            return Ok(());
        }
        tooltip::hide(doc)?;
        self.hovered = None;
        debug!("pointer leave bar {index}");
        Ok(())
    }

    fn build_tree(&self) -> (Element, Element) {
        let cfg = &self.config;
        let dims = &self.dimensions;
        let margin = dims.margin();

        let title = Element::new("h1")
            .with_attr("id", "title")
            .with_text(cfg.title.as_str());

        let mut bins = Element::new("g").with_attr("class", "bins");
        for bar in &self.bars {
            bins.append(
                Element::new("g")
                    .with_attr("class", "bin")
                    .with_child(bar.to_element(&cfg.bar_fill)),
            );
        }

        let label = |text: &str| {
            Element::new("text")
                .with_attr("font-size", cfg.label_style.font_size.as_str())
                .with_attr("fill", cfg.label_style.fill.as_str())
                .with_attr("letter-spacing", cfg.label_style.letter_spacing.as_str())
                .with_text(text)
        };

        let mut y_axis = Element::new("g").with_attr("class", "y-axis");
        Axis::left(&self.y_scale, cfg.tick_count).render_into(&mut y_axis);
        y_axis.append(
            label(cfg.y_label.as_str()).with_style("transform", "rotate(270deg) translate(-9%, -12%)"),
        );

        let mut x_axis = Element::new("g")
            .with_attr("class", "x-axis")
            .with_attr(
                "transform",
                format!("translate(0,{})", number(dims.bounded_height())),
            );
        Axis::bottom(&self.x_scale, cfg.tick_count).render_into(&mut x_axis);
        x_axis.append(label(cfg.x_label.as_str()).with_style("transform", "translate(47%, 45px)"));

        let bounds = Element::new("g")
            .with_attr("class", "bounds")
            .with_attr(
                "transform",
                format!(
                    "translate({},{})",
                    number(margin.left),
                    number(margin.top)
                ),
            )
            .with_child(bins)
            .with_child(y_axis)
            .with_child(x_axis);

        let svg = Element::new("svg")
            .with_attr("class", "wrapper")
            .with_attr("width", number(dims.width()))
            .with_attr("height", number(dims.height()))
            .with_child(bounds);

        (title, svg)
    }
}
