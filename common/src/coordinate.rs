//! Coordinate values and text-input parsing
//!
//! A single latitude or longitude is `Option<f64>`: `None` is the "unset"
//! marker and is distinct from zero. A location counts as present only when
//! both halves are set and finite.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a pair only when both halves are set and finite
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (finite(lat), finite(lng)) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat: {}, lng: {}", self.lat, self.lng)
    }
}

/// Drops non-finite values
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Parses coordinate text typed by a user.
///
/// Blank input is unset. Otherwise the longest leading decimal number is
/// taken (`"47.9N"` reads as `47.9`), and anything that yields no number or a
/// non-finite one degrades to unset instead of failing.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref LEADING_NUMBER: Regex =
            Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
    }

    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let matched = LEADING_NUMBER.find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Text shown in an input field for one coordinate half
pub fn format_coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
