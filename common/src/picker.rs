//! Coordinate picker contract
//!
//! The map itself lives outside the core. A session binds the picker to one
//! position or point; every location the user selects while it is open is
//! written to that target as a latitude update followed by a longitude update.

use crate::coordinate::LatLng;
use crate::store::PlanStore;
use crate::types::{PointEdit, PositionEdit};

/// Map center used when the target has no coordinates yet (Ulaanbaatar)
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 47.918412,
    lng: 106.917271,
};

pub const ZOOM_WITH_VALUE: f64 = 14.0;
pub const ZOOM_DEFAULT: f64 = 11.0;

/// What a picker session writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Position(usize),
    Point { position: usize, index: usize },
}

impl PickTarget {
    /// Current complete pair of the target, if it exists and has one
    pub fn current(&self, store: &PlanStore) -> Option<LatLng> {
        match *self {
            PickTarget::Position(i) => store.position(i).and_then(|p| p.coordinates()),
            PickTarget::Point { position, index } => {
                store.point(position, index).and_then(|p| p.coordinates())
            }
        }
    }

    pub fn exists(&self, store: &PlanStore) -> bool {
        match *self {
            PickTarget::Position(i) => store.position(i).is_some(),
            PickTarget::Point { position, index } => store.point(position, index).is_some(),
        }
    }
}

/// Everything a map widget needs to open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    pub target: PickTarget,
    /// Marker to place initially
    pub initial: Option<LatLng>,
    pub center: LatLng,
    pub zoom: f64,
}

/// The map picker needs a non-empty access token
pub fn can_open(token: &str) -> bool {
    !token.is_empty()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerSession {
    target: PickTarget,
    open: bool,
}

impl PickerSession {
    pub fn open(target: PickTarget) -> Self {
        tracing::debug!(?target, "picker opened");
        Self { target, open: true }
    }

    pub fn target(&self) -> PickTarget {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Request derived from the target's current state
    pub fn request(&self, store: &PlanStore) -> PickRequest {
        let initial = self.target.current(store);
        PickRequest {
            target: self.target,
            initial,
            center: initial.unwrap_or(DEFAULT_CENTER),
            zoom: if initial.is_some() { ZOOM_WITH_VALUE } else { ZOOM_DEFAULT },
        }
    }

    /// Writes a selected location to the target.
    ///
    /// Does nothing once the session is closed or when the target no longer
    /// exists. Returns whether the store changed.
    pub fn apply(&self, store: &mut PlanStore, pair: LatLng) -> bool {
        if !self.open {
            return false;
        }
        match self.target {
            PickTarget::Position(i) => {
                let lat = store.update_position_field(i, PositionEdit::Latitude(Some(pair.lat)));
                let lng = store.update_position_field(i, PositionEdit::Longitude(Some(pair.lng)));
                lat || lng
            }
            PickTarget::Point { position, index } => {
                let lat = store.update_point_field(position, index, PointEdit::Latitude(Some(pair.lat)));
                let lng = store.update_point_field(position, index, PointEdit::Longitude(Some(pair.lng)));
                lat || lng
            }
        }
    }
}
