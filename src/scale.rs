//! Pure data-to-pixel mappings.
//!
//! Both scales are plain values: build once, call `apply` as often as needed.
//! Neither clamps; inputs outside the domain extrapolate along the same line.
//! A degenerate domain (both ends equal) maps everything to the range midpoint.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

fn interpolate(d0: f64, d1: f64, r0: f64, r1: f64, v: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 || !span.is_finite() {
        return (r0 + r1) / 2.0;
    }
    let t = (v - d0) / span;
    r0 * (1.0 - t) + r1 * t
}

/// "Nice" step (1, 2 or 5 times a power of ten) giving roughly `count` ticks over `span`.
pub fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn step_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fixed-point with thousands separators: `12000.0, 0 -> "12,000"`, `2.5, 1 -> "2.5"`.
pub fn format_number(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Affine map from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        interpolate(d0, d1, r0, r1, v)
    }

    /// Pixel back to domain value.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        interpolate(r0, r1, d0, d1, px)
    }

    /// Round-valued ticks inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (a, b) = self.domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let step = tick_step(hi - lo, count);
        // Divide by the inverse for sub-unit steps so 0.6 stays 0.6 and not 0.6000000000000001.
        if step < 1.0 {
            let inv = (1.0 / step).round();
            let i0 = (lo * inv).ceil() as i64;
            let i1 = (hi * inv).floor() as i64;
            (i0..=i1).map(|i| i as f64 / inv).collect()
        } else {
            let i0 = (lo / step).ceil() as i64;
            let i1 = (hi / step).floor() as i64;
            (i0..=i1).map(|i| i as f64 * step).collect()
        }
    }

    /// Tick labels paired with their values, formatted at the tick step's precision.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let (a, b) = self.domain;
        let precision = step_precision(tick_step(b - a, count));
        self.ticks(count)
            .into_iter()
            .map(|v| (v, format_number(v, precision)))
            .collect()
    }
}

fn to_millis(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

fn from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.round() as i64).map(|d| d.naive_utc())
}

fn first_of_month(month_index: i64) -> Option<NaiveDateTime> {
    let year = month_index.div_euclid(12) as i32;
    let month = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar interval between two time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Months(u32),
    Years(u32),
}

/// Affine map from a time interval onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDateTime, NaiveDateTime),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, t: NaiveDateTime) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        interpolate(to_millis(d0), to_millis(d1), r0, r1, to_millis(t))
    }

    /// Pixel back to a timestamp. `None` only for non-finite pixels or out-of-range dates.
    pub fn invert(&self, px: f64) -> Option<NaiveDateTime> {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        from_millis(interpolate(r0, r1, to_millis(d0), to_millis(d1), px))
    }

    /// Pick the calendar interval giving at most about `count` ticks.
    ///
    /// Spans under two years step by 1, 3 or 6 months; longer spans step by years.
    pub fn tick_interval(&self, count: usize) -> TimeInterval {
        let (a, b) = self.domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let count = count.max(1) as i64;
        let months = (hi.year() as i64 * 12 + hi.month0() as i64)
            - (lo.year() as i64 * 12 + lo.month0() as i64);
        if months < 24 {
            let step = [1u32, 3]
                .into_iter()
                .find(|&m| months / m as i64 <= count)
                .unwrap_or(6);
            return TimeInterval::Months(step);
        }
        let years = (hi.year() - lo.year()) as f64;
        TimeInterval::Years(tick_step(years, count as usize).max(1.0) as u32)
    }

    /// Tick timestamps on calendar boundaries within the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (a, b) = self.domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo == hi {
            return vec![lo];
        }
        let step = match self.tick_interval(count) {
            TimeInterval::Months(m) => m as i64,
            TimeInterval::Years(y) => y as i64 * 12,
        };
        let mut index = lo.year() as i64 * 12 + lo.month0() as i64;
        if first_of_month(index).is_some_and(|t| t < lo) {
            index += 1;
        }
        // Align to the step so ticks land on Jan/Apr/Jul/Oct, round decades, etc.
        index = (index + step - 1).div_euclid(step) * step;

        let mut out = Vec::new();
        while let Some(t) = first_of_month(index) {
            if t > hi {
                break;
            }
            out.push(t);
            index += step;
        }
        out
    }

    /// Ticks with labels: the year on January, the month name elsewhere.
    pub fn tick_labels(&self, count: usize) -> Vec<(NaiveDateTime, String)> {
        self.ticks(count)
            .into_iter()
            .map(|t| (t, format_time_tick(t)))
            .collect()
    }
}

pub fn format_time_tick(t: NaiveDateTime) -> String {
    if t.month() == 1 {
        t.format("%Y").to_string()
    } else {
        t.format("%B").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    #[test]
    fn linear_ticks_are_round() {
        let s = LinearScale::new((0.0, 18064.7), (435.0, 0.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks[1], 2000.0);
        assert_eq!(ticks.last(), Some(&18000.0));
        let labels = s.tick_labels(10);
        assert_eq!(labels[1].1, "2,000");
    }

    #[test]
    fn fractional_ticks_do_not_drift() {
        let s = LinearScale::new((0.0, 1.0), (100.0, 0.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(s.tick_labels(5)[3].1, "0.6");
    }

    #[test]
    fn invert_undoes_apply() {
        let s = LinearScale::new((0.0, 200.0), (400.0, 0.0));
        assert!((s.invert(s.apply(37.5)) - 37.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.apply(5.0), 50.0);
        let t = parse_date("2000-01-01").unwrap();
        let ts = TimeScale::new((t, t), (0.0, 300.0));
        assert_eq!(ts.apply(t), 150.0);
        assert_eq!(ts.ticks(10), vec![t]);
    }

    #[test]
    fn quarter_span_uses_monthly_ticks() {
        let lo = parse_date("1947-01-01").unwrap();
        let hi = parse_date("1947-04-01").unwrap();
        let ts = TimeScale::new((lo, hi), (0.0, 795.0));
        assert_eq!(ts.tick_interval(10), TimeInterval::Months(1));
        let labels: Vec<String> = ts.tick_labels(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["1947", "February", "March", "April"]);
    }

    #[test]
    fn spans_from_two_years_use_year_steps() {
        let lo = parse_date("1947-01-01").unwrap();
        let hi = parse_date("1951-01-01").unwrap();
        let ts = TimeScale::new((lo, hi), (0.0, 795.0));
        assert_eq!(ts.tick_interval(10), TimeInterval::Years(1));
        let labels: Vec<String> = ts.tick_labels(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["1947", "1948", "1949", "1950", "1951"]);

        let two_years = TimeScale::new(
            (lo, parse_date("1949-01-01").unwrap()),
            (0.0, 795.0),
        );
        assert_eq!(two_years.tick_interval(10), TimeInterval::Years(1));

        let just_under = TimeScale::new(
            (lo, parse_date("1948-12-01").unwrap()),
            (0.0, 795.0),
        );
        assert_eq!(just_under.tick_interval(10), TimeInterval::Months(3));
    }

    #[test]
    fn long_span_uses_year_steps() {
        let lo = parse_date("1947-01-01").unwrap();
        let hi = parse_date("2015-07-01").unwrap();
        let ts = TimeScale::new((lo, hi), (0.0, 795.0));
        assert_eq!(ts.tick_interval(10), TimeInterval::Years(5));
        let ticks = ts.ticks(10);
        assert_eq!(ticks[0], parse_date("1950-01-01").unwrap());
        assert_eq!(*ticks.last().unwrap(), parse_date("2015-01-01").unwrap());
    }

    #[test]
    fn number_formatting_groups_thousands() {
        assert_eq!(format_number(14891.6, 0), "14,892");
        assert_eq!(format_number(2.5, 1), "2.5");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
        assert_eq!(format_number(0.0, 0), "0");
    }
}
