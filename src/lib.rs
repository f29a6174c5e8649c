//! gdp_chart
//!
//! Renders the United States quarterly GDP series as a bar chart page: one
//! bar per quarter, GDP on the vertical axis, time on the horizontal axis, and
//! a tooltip that follows the bar under the pointer. Pairs with the
//! `gdp-chart` CLI.
//!
//! ### Features
//! - Fetch the `{ "data": [[date, gdp], ...] }` document over HTTP
//! - Box model and pure linear/time scales
//! - Render into a small document model (`#wrapper`, `#tooltip`), drive hover events
//! - Export a standalone HTML page with working tooltips
//! - Static SVG/PNG snapshots and summary statistics
//!
//! ### Example
//! ```no_run
//! use gdp_chart::{Client, Document, render, page};
//!
//! let data = Client::default().fetch_dataset()?;
//! let mut doc = Document::host();
//! let mut chart = render::render(&mut doc, &data, 1000.0)?;
//! chart.pointer_enter(&mut doc, 0)?;
//! chart.pointer_leave(&mut doc, 0)?;
//! page::write_html(&doc, &[chart], "US GDP", "gdp.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod axis;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;
pub mod models;
pub mod page;
pub mod render;
pub mod scale;
pub mod snapshot;
pub mod stats;
pub mod tooltip;

pub use api::Client;
pub use config::ChartConfig;
pub use dom::Document;
pub use error::ChartError;
pub use models::{Dataset, Datum};
pub use render::{Bar, Chart};
