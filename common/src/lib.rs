//! Patrol Designer Common Library
//!
//! Editing model and export projection shared by the terminal and web (WASM)
//! hosts.

pub mod coordinate;
pub mod error;
pub mod export;
pub mod import;
pub mod picker;
pub mod preview;
pub mod sink;
pub mod store;
pub mod token;
pub mod types;

pub use coordinate::{parse_coordinate, LatLng};
pub use error::{Error, Result};
pub use export::{project, ExportDocument, ExportOptions};
pub use import::{store_from_document, store_from_json};
pub use picker::{PickRequest, PickTarget, PickerSession};
pub use sink::{deliver_export, DeliveryMode, ExportSink, Notice, EXPORT_FILE_NAME};
pub use store::{PlanStore, StoreEvent, SubscriptionId};
pub use token::{AccessToken, KeyValueStorage, MemoryStorage, TOKEN_STORAGE_KEY};
pub use types::{Point, PointEdit, PointField, Position, PositionEdit, PositionField};
