//! Editing model types
//!
//! - Position: a patrol site that owns an ordered list of points
//! - Point: a sub-location nested under exactly one position
//! - PositionEdit / PointEdit: one field plus its new value

use crate::coordinate::{parse_coordinate, LatLng};
use std::fmt;
use std::str::FromStr;

/// A sub-location within a position.
///
/// Optional text fields use the empty string for "absent"; coordinates use
/// `None` for unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub name: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_id: String,
    pub picture_description: String,
    pub picture_url: String,
}

/// A patrol site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    pub name: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub points: Vec<Point>,
}

impl Point {
    /// Both halves set and finite
    pub fn coordinates(&self) -> Option<LatLng> {
        LatLng::from_parts(self.latitude, self.longitude)
    }

    /// Either half set; a half-set pair still counts
    pub fn has_any_coordinate(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }

    /// Any of `userId`, `pictureDesc`, `picture` non-empty
    pub fn has_media(&self) -> bool {
        !self.user_id.is_empty()
            || !self.picture_description.is_empty()
            || !self.picture_url.is_empty()
    }

    pub fn apply(&mut self, edit: PointEdit) {
        match edit {
            PointEdit::Name(v) => self.name = v,
            PointEdit::Description(v) => self.description = v,
            PointEdit::Latitude(v) => self.latitude = v,
            PointEdit::Longitude(v) => self.longitude = v,
            PointEdit::UserId(v) => self.user_id = v,
            PointEdit::PictureDescription(v) => self.picture_description = v,
            PointEdit::PictureUrl(v) => self.picture_url = v,
        }
    }

    /// Whether applying `edit` would leave the point as it is
    pub fn already_has(&self, edit: &PointEdit) -> bool {
        match edit {
            PointEdit::Name(v) => &self.name == v,
            PointEdit::Description(v) => &self.description == v,
            PointEdit::Latitude(v) => same_coordinate(self.latitude, *v),
            PointEdit::Longitude(v) => same_coordinate(self.longitude, *v),
            PointEdit::UserId(v) => &self.user_id == v,
            PointEdit::PictureDescription(v) => &self.picture_description == v,
            PointEdit::PictureUrl(v) => &self.picture_url == v,
        }
    }
}

impl Position {
    pub fn coordinates(&self) -> Option<LatLng> {
        LatLng::from_parts(self.latitude, self.longitude)
    }

    pub fn has_any_coordinate(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }

    pub fn apply(&mut self, edit: PositionEdit) {
        match edit {
            PositionEdit::Name(v) => self.name = v,
            PositionEdit::Description(v) => self.description = v,
            PositionEdit::Latitude(v) => self.latitude = v,
            PositionEdit::Longitude(v) => self.longitude = v,
        }
    }

    pub fn already_has(&self, edit: &PositionEdit) -> bool {
        match edit {
            PositionEdit::Name(v) => &self.name == v,
            PositionEdit::Description(v) => &self.description == v,
            PositionEdit::Latitude(v) => same_coordinate(self.latitude, *v),
            PositionEdit::Longitude(v) => same_coordinate(self.longitude, *v),
        }
    }
}

// Bitwise so that NaN == NaN and 0.0 != -0.0
fn same_coordinate(a: Option<f64>, b: Option<f64>) -> bool {
    a.map(f64::to_bits) == b.map(f64::to_bits)
}

// =============================================
// Fields and edits
// =============================================

/// Editable attributes of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionField {
    Name,
    Description,
    Latitude,
    Longitude,
}

/// Editable attributes of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    Name,
    Description,
    Latitude,
    Longitude,
    UserId,
    PictureDescription,
    PictureUrl,
}

/// A position field together with its replacement value
#[derive(Debug, Clone, PartialEq)]
pub enum PositionEdit {
    Name(String),
    Description(String),
    Latitude(Option<f64>),
    Longitude(Option<f64>),
}

/// A point field together with its replacement value
#[derive(Debug, Clone, PartialEq)]
pub enum PointEdit {
    Name(String),
    Description(String),
    Latitude(Option<f64>),
    Longitude(Option<f64>),
    UserId(String),
    PictureDescription(String),
    PictureUrl(String),
}

impl PositionField {
    pub const ALL: [PositionField; 4] = [
        PositionField::Name,
        PositionField::Description,
        PositionField::Latitude,
        PositionField::Longitude,
    ];

    /// Wire name used in the export document
    pub fn key(&self) -> &'static str {
        match self {
            PositionField::Name => "name",
            PositionField::Description => "desc",
            PositionField::Latitude => "lat",
            PositionField::Longitude => "lng",
        }
    }

    /// Builds an edit from raw input text; coordinate text that does not
    /// read as a number becomes unset.
    pub fn edit_from_text(&self, text: &str) -> PositionEdit {
        match self {
            PositionField::Name => PositionEdit::Name(text.to_string()),
            PositionField::Description => PositionEdit::Description(text.to_string()),
            PositionField::Latitude => PositionEdit::Latitude(parse_coordinate(text)),
            PositionField::Longitude => PositionEdit::Longitude(parse_coordinate(text)),
        }
    }
}

impl PointField {
    pub const ALL: [PointField; 7] = [
        PointField::Name,
        PointField::Description,
        PointField::Latitude,
        PointField::Longitude,
        PointField::UserId,
        PointField::PictureDescription,
        PointField::PictureUrl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PointField::Name => "name",
            PointField::Description => "desc",
            PointField::Latitude => "lat",
            PointField::Longitude => "lng",
            PointField::UserId => "userId",
            PointField::PictureDescription => "pictureDesc",
            PointField::PictureUrl => "picture",
        }
    }

    /// Media fields are only exported by the extended schema
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            PointField::UserId | PointField::PictureDescription | PointField::PictureUrl
        )
    }

    pub fn edit_from_text(&self, text: &str) -> PointEdit {
        match self {
            PointField::Name => PointEdit::Name(text.to_string()),
            PointField::Description => PointEdit::Description(text.to_string()),
            PointField::Latitude => PointEdit::Latitude(parse_coordinate(text)),
            PointField::Longitude => PointEdit::Longitude(parse_coordinate(text)),
            PointField::UserId => PointEdit::UserId(text.to_string()),
            PointField::PictureDescription => PointEdit::PictureDescription(text.to_string()),
            PointField::PictureUrl => PointEdit::PictureUrl(text.to_string()),
        }
    }
}

impl PositionEdit {
    pub fn field(&self) -> PositionField {
        match self {
            PositionEdit::Name(_) => PositionField::Name,
            PositionEdit::Description(_) => PositionField::Description,
            PositionEdit::Latitude(_) => PositionField::Latitude,
            PositionEdit::Longitude(_) => PositionField::Longitude,
        }
    }
}

impl PointEdit {
    pub fn field(&self) -> PointField {
        match self {
            PointEdit::Name(_) => PointField::Name,
            PointEdit::Description(_) => PointField::Description,
            PointEdit::Latitude(_) => PointField::Latitude,
            PointEdit::Longitude(_) => PointField::Longitude,
            PointEdit::UserId(_) => PointField::UserId,
            PointEdit::PictureDescription(_) => PointField::PictureDescription,
            PointEdit::PictureUrl(_) => PointField::PictureUrl,
        }
    }
}

impl FromStr for PositionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(PositionField::Name),
            "desc" | "description" => Ok(PositionField::Description),
            "lat" | "latitude" => Ok(PositionField::Latitude),
            "lng" | "lon" | "longitude" => Ok(PositionField::Longitude),
            _ => Err(format!("Unknown position field: {}. Use name, desc, lat or lng", s)),
        }
    }
}

impl FromStr for PointField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(PointField::Name),
            "desc" | "description" => Ok(PointField::Description),
            "lat" | "latitude" => Ok(PointField::Latitude),
            "lng" | "lon" | "longitude" => Ok(PointField::Longitude),
            "userid" | "user_id" => Ok(PointField::UserId),
            "picturedesc" | "picturedescription" | "picture_description" => {
                Ok(PointField::PictureDescription)
            }
            "picture" | "pictureurl" | "picture_url" => Ok(PointField::PictureUrl),
            _ => Err(format!(
                "Unknown point field: {}. Use name, desc, lat, lng, userId, pictureDesc or picture",
                s
            )),
        }
    }
}

impl fmt::Display for PositionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for PointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
