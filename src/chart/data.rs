//! Chart input: observations and the ordered dataset.
//!
//! Deserialization is lenient: malformed fields are defaulted instead of
//! rejected, so a chart can always be drawn.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SvgChartsError};

/// Time-slice label used when an observation carries none.
pub const UNKNOWN_TIME_SLICE: &str = "Unknown";

/// Raw count value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Count {
    Number(f64),
    /// Textual count; numeric only if it parses as a decimal number.
    Text(String),
    /// Drawn as 1 or 0 but never part of the scale.
    Bool(bool),
}

impl Count {
    /// The count as a number, or `None` when it is non-numeric.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) | Self::Bool(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// The count cast to a whole number: truncated toward zero, text read up
    /// to its first non-numeric character, `true` as 1, anything else 0.
    #[must_use]
    pub fn truncated(&self) -> f64 {
        let value = match self {
            Self::Number(n) if n.is_finite() => n.trunc(),
            Self::Number(_) => 0.0,
            Self::Text(s) => leading_number(s).map_or(0.0, f64::trunc),
            Self::Bool(b) => f64::from(u8::from(*b)),
        };
        // -0.0 prints as "-0"
        value + 0.0
    }
}

/// Longest numeric prefix of `s` after leading whitespace: optional sign,
/// digits with an optional fraction, optional exponent.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;
    let mut mantissa = integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }
    if mantissa == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<i64> for Count {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Count {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for Count {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One (subject, time-slice, count) tuple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default, deserialize_with = "lenient_label")]
    pub subject: Option<String>,

    #[serde(
        default,
        rename = "timeSlice",
        alias = "time_slice",
        deserialize_with = "lenient_label"
    )]
    pub time_slice: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<Count>,
}

impl Observation {
    #[must_use]
    pub fn new(subject: impl Into<String>, time_slice: impl Into<String>, count: impl Into<Count>) -> Self {
        Self {
            subject: Some(subject.into()),
            time_slice: Some(time_slice.into()),
            count: Some(count.into()),
        }
    }

    /// Subject used for drawing; absent subjects become the empty string.
    #[must_use]
    pub fn subject_label(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn time_slice_label(&self) -> &str {
        self.time_slice.as_deref().unwrap_or(UNKNOWN_TIME_SLICE)
    }

    /// Count used for the shared scale; `None` when absent or non-numeric.
    #[must_use]
    pub fn numeric_count(&self) -> Option<f64> {
        self.count.as_ref().and_then(Count::numeric)
    }

    /// Count used for bar height and value label.
    #[must_use]
    pub fn drawn_count(&self) -> f64 {
        self.count.as_ref().map_or(0.0, Count::truncated)
    }
}

/// Strings pass through, numbers are stringified, anything else is absent.
fn lenient_label<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<Count>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map(Count::Number),
        Value::String(s) => Some(Count::Text(s)),
        Value::Bool(b) => Some(Count::Bool(b)),
        _ => None,
    })
}

/// Observations sharing one time-slice, in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSliceGroup<'a> {
    pub label: &'a str,
    pub items: Vec<&'a Observation>,
}

impl TimeSliceGroup<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered collection of observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Observation>);

impl Dataset {
    #[must_use]
    pub const fn new(observations: Vec<Observation>) -> Self {
        Self(observations)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.0
    }

    /// Parse a JSON array of observation objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SvgChartsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Bucket observations by time-slice, keeping first-encountered slice
    /// order and the original order within each slice.
    #[must_use]
    pub fn group_by_time_slice(&self) -> Vec<TimeSliceGroup<'_>> {
        let mut buckets: IndexMap<&str, Vec<&Observation>> = IndexMap::new();
        for observation in &self.0 {
            buckets
                .entry(observation.time_slice_label())
                .or_default()
                .push(observation);
        }
        buckets
            .into_iter()
            .map(|(label, items)| TimeSliceGroup { label, items })
            .collect()
    }

    /// Distinct subjects in first-appearance order. Observations without a
    /// subject do not contribute.
    #[must_use]
    pub fn distinct_subjects(&self) -> IndexSet<&str> {
        self.0.iter().filter_map(|o| o.subject.as_deref()).collect()
    }

    /// Largest numeric count across the whole dataset, floored at 1.
    #[must_use]
    pub fn max_count(&self) -> f64 {
        self.0
            .iter()
            .filter_map(Observation::numeric_count)
            .reduce(f64::max)
            .unwrap_or(1.0)
            .max(1.0)
    }

    /// Positive drawn counts present in the data, saturated to `u64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn literal_counts(&self) -> IndexSet<u64> {
        self.0
            .iter()
            .map(Observation::drawn_count)
            .filter(|&c| c > 0.0)
            .map(|c| c as u64)
            .collect()
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(observations: Vec<Observation>) -> Self {
        Self(observations)
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
