//! Fixed chart settings. `ChartConfig::default()` is the Federal Reserve GDP chart.

/// Space reserved around the bounded box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 15.0,
            right: 15.0,
            bottom: 60.0,
            left: 90.0,
        }
    }
}

/// Styling applied to the two axis titles.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font_size: String,
    pub fill: String,
    pub letter_spacing: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: "1rem".into(),
            fill: "#e0e2fc".into(),
            letter_spacing: "2px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    /// Outer chart width as a fraction of the viewport width.
    pub width_ratio: f64,
    pub height: f64,
    pub margin: Margin,
    /// Horizontal offset added to every bar's `x`.
    pub bar_padding: f64,
    pub bar_fill: String,
    pub y_label: String,
    pub x_label: String,
    pub label_style: LabelStyle,
    /// Tooltip is dropped this many pixels below the bar top.
    pub tooltip_offset_y: f64,
    /// Approximate number of ticks requested from each axis.
    pub tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Federal Reserve Economic Data".into(),
            width_ratio: 0.9,
            height: 500.0,
            margin: Margin::default(),
            bar_padding: 2.0,
            bar_fill: "#ffffff".into(),
            y_label: "GDP, IN BILLIONS".into(),
            x_label: "YEAR".into(),
            label_style: LabelStyle::default(),
            tooltip_offset_y: 15.0,
            tick_count: 10,
        }
    }
}
