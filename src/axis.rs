//! Axis generators: turn a scale into a domain line plus labelled ticks.

use crate::dom::{Element, number};
use crate::scale::{LinearScale, TimeScale};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
// Half-pixel shift keeps 1px strokes crisp.
const OFFSET: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Left,
    Bottom,
}

/// A laid-out axis: pixel position and label of every tick along the scale's range.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orient: Orient,
    range: (f64, f64),
    ticks: Vec<(f64, String)>,
}

impl Axis {
    pub fn left(scale: &LinearScale, tick_count: usize) -> Self {
        let ticks = scale
            .tick_labels(tick_count)
            .into_iter()
            .map(|(v, label)| (scale.apply(v), label))
            .collect();
        Self {
            orient: Orient::Left,
            range: scale.range(),
            ticks,
        }
    }

    pub fn bottom(scale: &TimeScale, tick_count: usize) -> Self {
        let ticks = scale
            .tick_labels(tick_count)
            .into_iter()
            .map(|(t, label)| (scale.apply(t), label))
            .collect();
        Self {
            orient: Orient::Bottom,
            range: scale.range(),
            ticks,
        }
    }

    pub fn orient(&self) -> Orient {
        self.orient
    }

    /// `(pixel, label)` pairs, pixel relative to the axis group.
    pub fn ticks(&self) -> &[(f64, String)] {
        &self.ticks
    }

    /// Fill `group` with the axis: presentation attributes, the domain path, one `g.tick` per tick.
    pub fn render_into(&self, group: &mut Element) {
        let (r0, r1) = self.range;
        let (anchor, path) = match self.orient {
            Orient::Left => (
                "end",
                format!(
                    "M{},{}H{}V{}H{}",
                    number(-TICK_SIZE),
                    number(r0 + OFFSET),
                    number(OFFSET),
                    number(r1 + OFFSET),
                    number(-TICK_SIZE)
                ),
            ),
            Orient::Bottom => (
                "middle",
                format!(
                    "M{},{}V{}H{}V{}",
                    number(r0 + OFFSET),
                    number(TICK_SIZE),
                    number(OFFSET),
                    number(r1 + OFFSET),
                    number(TICK_SIZE)
                ),
            ),
        };
        group.set_attribute("fill", "none");
        group.set_attribute("font-size", "10");
        group.set_attribute("font-family", "sans-serif");
        group.set_attribute("text-anchor", anchor);

        group.append(
            Element::new("path")
                .with_attr("class", "domain")
                .with_attr("stroke", "currentColor")
                .with_attr("d", path),
        );

        for (px, label) in &self.ticks {
            let pos = number(px + OFFSET);
            let tick = match self.orient {
                Orient::Left => Element::new("g")
                    .with_attr("class", "tick")
                    .with_attr("opacity", "1")
                    .with_attr("transform", format!("translate(0,{pos})"))
                    .with_child(
                        Element::new("line")
                            .with_attr("stroke", "currentColor")
                            .with_attr("x2", number(-TICK_SIZE)),
                    )
                    .with_child(
                        Element::new("text")
                            .with_attr("fill", "currentColor")
                            .with_attr("x", number(-(TICK_SIZE + TICK_PADDING)))
                            .with_attr("dy", "0.32em")
                            .with_text(label.as_str()),
                    ),
                Orient::Bottom => Element::new("g")
                    .with_attr("class", "tick")
                    .with_attr("opacity", "1")
                    .with_attr("transform", format!("translate({pos},0)"))
                    .with_child(
                        Element::new("line")
                            .with_attr("stroke", "currentColor")
                            .with_attr("y2", number(TICK_SIZE)),
                    )
                    .with_child(
                        Element::new("text")
                            .with_attr("fill", "currentColor")
                            .with_attr("y", number(TICK_SIZE + TICK_PADDING))
                            .with_attr("dy", "0.71em")
                            .with_text(label.as_str()),
                    ),
            };
            group.append(tick);
        }
    }
}
