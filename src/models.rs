use crate::error::ChartError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of the date half of each observation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into midnight of that day.
///
/// Timestamps carry no zone; the chart never shifts them, so the day shown in
/// the tooltip is always the day written in the dataset.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// One observation: quarter start date and GDP in billions of US dollars.
///
/// On the wire this is the pair `["1947-01-01", 243.1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct Datum {
    pub date: String,
    pub gdp: f64,
}

impl Datum {
    pub fn new(date: impl Into<String>, gdp: f64) -> Self {
        Self {
            date: date.into(),
            gdp,
        }
    }

    /// X accessor. `None` when `date` is not a valid `YYYY-MM-DD`.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

impl From<(String, f64)> for Datum {
    fn from((date, gdp): (String, f64)) -> Self {
        Self { date, gdp }
    }
}

impl From<Datum> for (String, f64) {
    fn from(d: Datum) -> Self {
        (d.date, d.gdp)
    }
}

/// Body of the GDP document. Only `data` is read; descriptive fields such as
/// `source_name` or `from_date` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpDocument {
    pub data: Vec<Datum>,
}

/// Ordered GDP series. Bar index equals position in this sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Datum>,
}

impl Dataset {
    pub fn new(points: Vec<Datum>) -> Self {
        Self { points }
    }

    /// Decode `{ "data": [[date, gdp], ...] }`.
    pub fn from_json_str(body: &str) -> Result<Self, ChartError> {
        let doc: GdpDocument = serde_json::from_str(body)?;
        Ok(Self::new(doc.data))
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::new(pairs.into_iter().map(|(d, v)| Datum::new(d, v)).collect())
    }

    pub fn points(&self) -> &[Datum] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest valid timestamps; unparseable dates are skipped.
    pub fn time_extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut stamps = self.points.iter().filter_map(Datum::timestamp);
        let first = stamps.next()?;
        Some(stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

impl From<Vec<Datum>> for Dataset {
    fn from(points: Vec<Datum>) -> Self {
        Self::new(points)
    }
}
