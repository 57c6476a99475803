//! Position/point store
//!
//! The single mutable state of an editing session. Positions are held as
//! `Arc<Position>` and edited copy-on-write, so a mutation replaces only the
//! targeted element and every other element keeps its identity. Indices that
//! do not address anything turn the call into a silent no-op.
//!
//! Listeners registered with [`PlanStore::subscribe`] run synchronously after
//! each effective mutation, with the new state already in place.

use crate::types::{Point, PointEdit, PointField, Position, PositionEdit, PositionField};
use std::fmt;
use std::sync::Arc;

/// What a mutation changed
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    PositionAdded { index: usize },
    PositionRemoved { index: usize },
    PositionUpdated { index: usize, field: PositionField },
    PointAdded { position: usize, index: usize },
    PointRemoved { position: usize, index: usize },
    PointUpdated { position: usize, index: usize, field: PointField },
    Reset,
}

/// Handle returned by [`PlanStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent, &PlanStore) + Send + Sync>;

pub struct PlanStore {
    positions: Vec<Arc<Position>>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlanStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanStore")
            .field("positions", &self.positions)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PlanStore {
    /// Session start state: exactly one empty position
    pub fn new() -> Self {
        Self::from_positions(vec![Position::default()])
    }

    /// Store holding the given positions as-is (an empty list stays empty)
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self {
            positions: positions.into_iter().map(Arc::new).collect(),
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // =============================================
    // Read access
    // =============================================

    pub fn positions(&self) -> &[Arc<Position>] {
        &self.positions
    }

    /// Cheap copy of the current sequence; later edits do not affect it
    pub fn snapshot(&self) -> Vec<Arc<Position>> {
        self.positions.clone()
    }

    pub fn position(&self, index: usize) -> Option<&Position> {
        self.positions.get(index).map(|p| p.as_ref())
    }

    pub fn point(&self, position: usize, index: usize) -> Option<&Point> {
        self.position(position).and_then(|p| p.points.get(index))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total number of points across all positions
    pub fn point_count(&self) -> usize {
        self.positions.iter().map(|p| p.points.len()).sum()
    }

    /// Whether any point carries a media field value
    pub fn has_media_fields(&self) -> bool {
        self.positions
            .iter()
            .any(|p| p.points.iter().any(Point::has_media))
    }

    /// Bumped once per effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =============================================
    // Position operations
    // =============================================

    pub fn add_position(&mut self) -> bool {
        self.positions.push(Arc::new(Position::default()));
        let index = self.positions.len() - 1;
        self.commit(StoreEvent::PositionAdded { index });
        true
    }

    pub fn remove_position(&mut self, index: usize) -> bool {
        if index >= self.positions.len() {
            return false;
        }
        self.positions.remove(index);
        self.commit(StoreEvent::PositionRemoved { index });
        true
    }

    /// Replaces one field of the position at `index`.
    ///
    /// Returns `false` when the index is out of range or the field already
    /// holds the value.
    pub fn update_position_field(&mut self, index: usize, edit: PositionEdit) -> bool {
        let Some(slot) = self.positions.get_mut(index) else {
            return false;
        };
        if slot.already_has(&edit) {
            return false;
        }
        let field = edit.field();
        Arc::make_mut(slot).apply(edit);
        self.commit(StoreEvent::PositionUpdated { index, field });
        true
    }

    /// Sets both coordinate halves to unset, latitude first
    pub fn clear_position_coordinates(&mut self, index: usize) -> bool {
        let lat = self.update_position_field(index, PositionEdit::Latitude(None));
        let lng = self.update_position_field(index, PositionEdit::Longitude(None));
        lat || lng
    }

    // =============================================
    // Point operations
    // =============================================

    pub fn add_point(&mut self, position: usize) -> bool {
        let Some(slot) = self.positions.get_mut(position) else {
            return false;
        };
        let points = &mut Arc::make_mut(slot).points;
        points.push(Point::default());
        let index = points.len() - 1;
        self.commit(StoreEvent::PointAdded { position, index });
        true
    }

    pub fn remove_point(&mut self, position: usize, index: usize) -> bool {
        let Some(slot) = self.positions.get_mut(position) else {
            return false;
        };
        if index >= slot.points.len() {
            return false;
        }
        Arc::make_mut(slot).points.remove(index);
        self.commit(StoreEvent::PointRemoved { position, index });
        true
    }

    pub fn update_point_field(&mut self, position: usize, index: usize, edit: PointEdit) -> bool {
        let Some(slot) = self.positions.get_mut(position) else {
            return false;
        };
        match slot.points.get(index) {
            Some(point) if !point.already_has(&edit) => {}
            _ => return false,
        }
        let field = edit.field();
        Arc::make_mut(slot).points[index].apply(edit);
        self.commit(StoreEvent::PointUpdated { position, index, field });
        true
    }

    pub fn clear_point_coordinates(&mut self, position: usize, index: usize) -> bool {
        let lat = self.update_point_field(position, index, PointEdit::Latitude(None));
        let lng = self.update_point_field(position, index, PointEdit::Longitude(None));
        lat || lng
    }

    /// Back to a single empty position
    pub fn reset(&mut self) {
        self.positions = vec![Arc::new(Position::default())];
        self.commit(StoreEvent::Reset);
    }

    // =============================================
    // Change notification
    // =============================================

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent, &PlanStore) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, event: StoreEvent) {
        self.revision += 1;
        tracing::debug!(revision = self.revision, ?event, "store changed");
        let store: &PlanStore = self;
        for (_, listener) in &store.listeners {
            listener(&event, store);
        }
    }
}
