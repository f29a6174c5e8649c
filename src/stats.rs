use crate::models::Dataset;
use serde::{Deserialize, Serialize};

/// Summary statistics of a GDP series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Raw date strings of the first and last observation, in dataset order.
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// Upper end of the GDP axis: the largest value in the series, `0.0` when empty.
pub fn y_max(data: &Dataset) -> f64 {
    data.points()
        .iter()
        .map(|d| d.gdp)
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}

pub fn summary(data: &Dataset) -> Summary {
    let mut vals: Vec<f64> = data
        .points()
        .iter()
        .map(|d| d.gdp)
        .filter(|v| v.is_finite())
        .collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        count,
        min: vals.first().cloned(),
        max: vals.last().cloned(),
        mean,
        median,
        first_date: data.points().first().map(|d| d.date.clone()),
        last_date: data.points().last().map(|d| d.date.clone()),
    }
}
