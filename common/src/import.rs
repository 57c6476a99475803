//! Loading an export document back into an editable store
//!
//! Either schema variant is accepted. Missing keys read as empty text or
//! unset coordinates, and a document without positions opens as a fresh
//! session.

use crate::coordinate::finite;
use crate::error::Result;
use crate::export::{ExportDocument, ExportPoint, ExportPosition};
use crate::store::PlanStore;
use crate::types::{Point, Position};

/// Parses JSON text into a store
pub fn store_from_json(json: &str) -> Result<PlanStore> {
    let document = ExportDocument::from_json(json)?;
    Ok(store_from_document(document))
}

pub fn store_from_document(document: ExportDocument) -> PlanStore {
    if document.positions.is_empty() {
        return PlanStore::new();
    }
    let positions = document.positions.into_iter().map(position_from).collect();
    PlanStore::from_positions(positions)
}

fn position_from(position: ExportPosition) -> Position {
    Position {
        name: position.name,
        description: position.desc.unwrap_or_default(),
        latitude: finite(position.lat),
        longitude: finite(position.lng),
        points: position.points.into_iter().map(point_from).collect(),
    }
}

fn point_from(point: ExportPoint) -> Point {
    Point {
        name: point.name,
        description: point.desc.unwrap_or_default(),
        latitude: finite(point.lat),
        longitude: finite(point.lng),
        user_id: point.user_id.unwrap_or_default(),
        picture_description: point.picture_desc.unwrap_or_default(),
        picture_url: point.picture.unwrap_or_default(),
    }
}
