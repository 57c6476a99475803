//! Live preview model
//!
//! Read-only summaries derived from the store after every edit; hosts render
//! them as cards (web) or indented text (terminal).

use crate::coordinate::LatLng;
use crate::types::{Point, Position};
use std::fmt::Write as _;
use std::sync::Arc;

/// Shown when a position or point has no complete coordinate pair
pub const NO_COORDINATES: &str = "Coordinates not set";

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSummary {
    /// 1-based display number
    pub number: usize,
    pub title: String,
    pub description: String,
    pub coordinates: Option<LatLng>,
    pub points: Vec<PointSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointSummary {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub coordinates: Option<LatLng>,
}

impl PositionSummary {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn coordinate_label(&self) -> String {
        coordinate_label(self.coordinates)
    }
}

impl PointSummary {
    pub fn coordinate_label(&self) -> String {
        coordinate_label(self.coordinates)
    }
}

/// `"Coordinates: 47.9, 106.9"` or [`NO_COORDINATES`]
pub fn coordinate_label(pair: Option<LatLng>) -> String {
    match pair {
        Some(LatLng { lat, lng }) => format!("Coordinates: {}, {}", lat, lng),
        None => NO_COORDINATES.to_string(),
    }
}

pub fn summarize(positions: &[Arc<Position>]) -> Vec<PositionSummary> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| summarize_position(i, p))
        .collect()
}

fn summarize_position(index: usize, position: &Position) -> PositionSummary {
    let number = index + 1;
    PositionSummary {
        number,
        title: title_or(&position.name, || format!("Position #{}", number)),
        description: position.description.clone(),
        coordinates: position.coordinates(),
        points: position
            .points
            .iter()
            .enumerate()
            .map(|(i, pt)| summarize_point(i, pt))
            .collect(),
    }
}

fn summarize_point(index: usize, point: &Point) -> PointSummary {
    let number = index + 1;
    PointSummary {
        number,
        title: title_or(&point.name, || format!("Point #{}", number)),
        description: point.description.clone(),
        coordinates: point.coordinates(),
    }
}

fn title_or(name: &str, fallback: impl FnOnce() -> String) -> String {
    if name.is_empty() {
        fallback()
    } else {
        name.to_string()
    }
}

/// Indented plain-text rendering for terminals
pub fn render_text(summaries: &[PositionSummary]) -> String {
    if summaries.is_empty() {
        return "No positions yet.\n".to_string();
    }

    let mut out = String::new();
    for position in summaries {
        let _ = writeln!(
            out,
            "{}. {} [{} point(s)]",
            position.number,
            position.title,
            position.point_count()
        );
        if !position.description.is_empty() {
            let _ = writeln!(out, "   {}", position.description);
        }
        let _ = writeln!(out, "   {}", position.coordinate_label());

        for point in &position.points {
            let _ = writeln!(out, "   - {}", point.title);
            if !point.description.is_empty() {
                let _ = writeln!(out, "     {}", point.description);
            }
            let _ = writeln!(out, "     {}", point.coordinate_label());
        }
    }
    out
}
