//! Box model: outer size and margins first, then the bounded box derived from them.

use crate::config::{ChartConfig, Margin};
use crate::error::ChartError;

/// Outer chart size, margins and bar padding. Nothing derived yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub bar_padding: f64,
}

impl OuterDimensions {
    /// `width = width_ratio · viewport_width`; everything else comes from the config.
    pub fn for_viewport(config: &ChartConfig, viewport_width: f64) -> Self {
        Self {
            width: config.width_ratio * viewport_width,
            height: config.height,
            margin: config.margin,
            bar_padding: config.bar_padding,
        }
    }

    /// Derive the bounded box for a series of `bar_count` bars.
    ///
    /// Fails on an empty series (no bar width exists) and when the margins leave
    /// no positive drawing area.
    pub fn bound(self, bar_count: usize) -> Result<BoundedDimensions, ChartError> {
        if bar_count == 0 {
            return Err(ChartError::EmptyDataset);
        }
        let m = self.margin;
        let bounded_width = self.width - m.left - m.right;
        let bounded_height = self.height - m.top - m.bottom;

        let non_negative = [
            self.width,
            self.height,
            m.top,
            m.right,
            m.bottom,
            m.left,
            self.bar_padding,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
        // finite inputs give finite differences, so plain comparisons suffice
        if !non_negative || bounded_width <= 0.0 || bounded_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: bounded_width,
                height: bounded_height,
            });
        }

        Ok(BoundedDimensions {
            outer: self,
            bounded_width,
            bounded_height,
            bar_width: bounded_width / bar_count as f64,
        })
    }
}

/// Fully populated box model. Only obtainable through [`OuterDimensions::bound`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedDimensions {
    outer: OuterDimensions,
    bounded_width: f64,
    bounded_height: f64,
    bar_width: f64,
}

impl BoundedDimensions {
    pub fn outer(&self) -> &OuterDimensions {
        &self.outer
    }
    pub fn width(&self) -> f64 {
        self.outer.width
    }
    pub fn height(&self) -> f64 {
        self.outer.height
    }
    pub fn margin(&self) -> Margin {
        self.outer.margin
    }
    pub fn bar_padding(&self) -> f64 {
        self.outer.bar_padding
    }
    pub fn bounded_width(&self) -> f64 {
        self.bounded_width
    }
    pub fn bounded_height(&self) -> f64 {
        self.bounded_height
    }
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }
}
