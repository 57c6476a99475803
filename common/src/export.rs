//! Export projection
//!
//! Derives the interchange document from store state:
//!
//! ```json
//! {"positions":[{"name":"","desc":"","lat":0,"lng":0,"points":[...]}]}
//! ```
//!
//! `lat`/`lng` are written only when both are finite, optional text only when
//! non-empty, and point media fields only when the media schema is selected.

use crate::coordinate::LatLng;
use crate::error::Result;
use crate::types::{Point, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Projection settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit `userId`, `pictureDesc` and `picture` on points
    pub include_media_fields: bool,
    /// Single-line output instead of two-space indentation
    pub compact: bool,
}

impl ExportOptions {
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn with_media() -> Self {
        Self {
            include_media_fields: true,
            ..Self::default()
        }
    }

    /// Projects `positions` and serializes them in the selected layout
    pub fn render(&self, positions: &[Arc<Position>]) -> Result<String> {
        let document = project(positions, self);
        if self.compact {
            document.to_json_compact()
        } else {
            document.to_json_pretty()
        }
    }
}

/// Root of the export document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default)]
    pub positions: Vec<ExportPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportPosition {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default)]
    pub points: Vec<ExportPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportPoint {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(rename = "pictureDesc", default, skip_serializing_if = "Option::is_none")]
    pub picture_desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Projects the current positions into an export document
pub fn project(positions: &[Arc<Position>], options: &ExportOptions) -> ExportDocument {
    ExportDocument {
        positions: positions
            .iter()
            .map(|p| project_position(p, options))
            .collect(),
    }
}

fn project_position(position: &Position, options: &ExportOptions) -> ExportPosition {
    let (lat, lng) = split(position.coordinates());
    ExportPosition {
        name: position.name.clone(),
        desc: non_empty(&position.description),
        lat,
        lng,
        points: position
            .points
            .iter()
            .map(|pt| project_point(pt, options))
            .collect(),
    }
}

fn project_point(point: &Point, options: &ExportOptions) -> ExportPoint {
    let (lat, lng) = split(point.coordinates());
    let media = |value: &str| {
        if options.include_media_fields {
            non_empty(value)
        } else {
            None
        }
    };

    ExportPoint {
        name: point.name.clone(),
        desc: non_empty(&point.description),
        lat,
        lng,
        user_id: media(&point.user_id),
        picture_desc: media(&point.picture_description),
        picture: media(&point.picture_url),
    }
}

fn split(pair: Option<LatLng>) -> (Option<f64>, Option<f64>) {
    match pair {
        Some(LatLng { lat, lng }) => (Some(lat), Some(lng)),
        None => (None, None),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ExportDocument {
    /// Two-space indented JSON, as shown in the live preview
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Single-line JSON
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PlanStore;
    use crate::types::{PointEdit, PositionEdit};

    fn camera_scenario() -> PlanStore {
        let mut store = PlanStore::new();
        store.add_point(0);
        store.update_point_field(0, 0, PointEdit::Name("Camera-01".to_string()));
        store.update_point_field(0, 0, PointEdit::Latitude(Some(47.9184)));
        store.update_point_field(0, 0, PointEdit::Longitude(Some(106.9172)));
        store
    }

    #[test]
    fn test_camera_scenario_compact() {
        let store = camera_scenario();
        let json = project(store.positions(), &ExportOptions::basic())
            .to_json_compact()
            .unwrap();
        assert_eq!(
            json,
            r#"{"positions":[{"name":"","points":[{"name":"Camera-01","lat":47.9184,"lng":106.9172}]}]}"#
        );
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let store = PlanStore::new();
        let json = project(store.positions(), &ExportOptions::basic())
            .to_json_pretty()
            .unwrap();
        assert_eq!(
            json,
            "{\n  \"positions\": [\n    {\n      \"name\": \"\",\n      \"points\": []\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let store = camera_scenario();
        let options = ExportOptions::with_media();
        let first = project(store.positions(), &options).to_json_pretty().unwrap();
        let second = project(store.positions(), &options).to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_half_set_coordinate_omits_both_keys() {
        let mut store = PlanStore::new();
        store.update_position_field(0, PositionEdit::Latitude(Some(47.0)));
        store.add_point(0);
        store.update_point_field(0, 0, PointEdit::Longitude(Some(106.0)));

        let value = serde_json::to_value(project(store.positions(), &ExportOptions::basic())).unwrap();
        let position = &value["positions"][0];
        assert!(position.get("lat").is_none());
        assert!(position.get("lng").is_none());
        let point = &position["points"][0];
        assert!(point.get("lat").is_none());
        assert!(point.get("lng").is_none());
    }

    #[test]
    fn test_media_fields_follow_flag() {
        let mut store = PlanStore::new();
        store.add_point(0);
        store.update_point_field(0, 0, PointEdit::UserId("guard-3".to_string()));
        store.update_point_field(0, 0, PointEdit::PictureDescription("pole cam".to_string()));
        store.update_point_field(0, 0, PointEdit::PictureUrl("https://img/1.jpg".to_string()));

        let basic = project(store.positions(), &ExportOptions::basic()).to_json_compact().unwrap();
        assert!(!basic.contains("userId"));
        assert!(!basic.contains("pictureDesc"));
        assert!(!basic.contains("picture"));

        let media = project(store.positions(), &ExportOptions::with_media())
            .to_json_compact()
            .unwrap();
        assert_eq!(
            media,
            r#"{"positions":[{"name":"","points":[{"name":"","userId":"guard-3","pictureDesc":"pole cam","picture":"https://img/1.jpg"}]}]}"#
        );
    }

    #[test]
    fn test_empty_media_fields_are_omitted() {
        let store = camera_scenario();
        let json = project(store.positions(), &ExportOptions::with_media())
            .to_json_compact()
            .unwrap();
        assert!(!json.contains("userId"));
    }

    #[test]
    fn test_key_order() {
        let mut store = PlanStore::new();
        store.update_position_field(0, PositionEdit::Name("A".to_string()));
        store.update_position_field(0, PositionEdit::Description("main".to_string()));
        store.update_position_field(0, PositionEdit::Latitude(Some(1.5)));
        store.update_position_field(0, PositionEdit::Longitude(Some(-2.5)));

        let json = project(store.positions(), &ExportOptions::basic()).to_json_compact().unwrap();
        assert_eq!(
            json,
            r#"{"positions":[{"name":"A","desc":"main","lat":1.5,"lng":-2.5,"points":[]}]}"#
        );
    }

    #[test]
    fn test_coordinates_reparse_exactly() {
        let values = [47.918412345678_f64, 106.91727100000001, -0.1, 1e-7, 89.99999999999999];
        let mut store = PlanStore::from_positions(Vec::new());
        for (i, v) in values.iter().enumerate() {
            store.add_position();
            store.update_position_field(i, PositionEdit::Latitude(Some(*v)));
            store.update_position_field(i, PositionEdit::Longitude(Some(-*v)));
        }

        let json = project(store.positions(), &ExportOptions::basic()).to_json_pretty().unwrap();
        let parsed = ExportDocument::from_json(&json).unwrap();
        for (position, v) in parsed.positions.iter().zip(values) {
            assert_eq!(position.lat, Some(v));
            assert_eq!(position.lng, Some(-v));
        }
    }

    #[test]
    fn test_empty_store_projects_empty_list() {
        let store = PlanStore::from_positions(Vec::new());
        let json = project(store.positions(), &ExportOptions::basic()).to_json_compact().unwrap();
        assert_eq!(json, r#"{"positions":[]}"#);
    }

    #[test]
    fn test_render_follows_layout_flag() {
        let store = camera_scenario();
        let pretty = ExportOptions::basic().render(store.positions()).unwrap();
        let compact = ExportOptions { compact: true, ..ExportOptions::basic() }
            .render(store.positions())
            .unwrap();

        assert!(pretty.starts_with("{\n  \"positions\""));
        assert_eq!(
            compact,
            r#"{"positions":[{"name":"","points":[{"name":"Camera-01","lat":47.9184,"lng":106.9172}]}]}"#
        );
    }
}
