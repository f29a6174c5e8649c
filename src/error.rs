//! Error kinds surfaced by the chart pipeline.

use thiserror::Error;

/// Everything that can stop a render or a pointer event.
///
/// Every variant that can occur during [`crate::render::render`] is raised
/// before the document is touched, so an `Err` always means "no chart emitted".
#[derive(Debug, Error)]
pub enum ChartError {
    /// Fetch failed or the body was not `{ "data": [[string, number], ...] }`.
    #[error("ingest failed: {0}")]
    Ingest(String),

    /// The dataset decoded fine but holds no observations.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The host document lacks an element the chart depends on.
    #[error("host document has no element with id `{0}`")]
    MissingElement(&'static str),

    /// Margins eat the whole viewport (or a dimension came out negative).
    #[error("viewport too small: bounded box would be {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },

    /// A pointer event named a bar the chart does not have.
    #[error("no bar at index {index} (chart has {len})")]
    NoSuchBar { index: usize, len: usize },
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::Ingest(format!("decode json: {e}"))
    }
}
