//! Delivery of a finished export (clipboard or file)

use crate::error::Result;
use crate::export::ExportOptions;
use crate::store::PlanStore;

/// Fixed file name for downloads and default saves
pub const EXPORT_FILE_NAME: &str = "patrol-positions.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Clipboard,
    File,
}

/// Destination for the serialized document
pub trait ExportSink {
    fn deliver(&mut self, json: &str, mode: DeliveryMode) -> Result<()>;
}

/// Transient user notification for one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub ok: bool,
    pub message: String,
}

impl Notice {
    pub fn from_result(mode: DeliveryMode, result: &Result<()>) -> Self {
        match (result, mode) {
            (Ok(()), DeliveryMode::Clipboard) => Self {
                ok: true,
                message: "JSON copied to clipboard".to_string(),
            },
            (Ok(()), DeliveryMode::File) => Self {
                ok: true,
                message: format!("Saved {}", EXPORT_FILE_NAME),
            },
            (Err(e), DeliveryMode::Clipboard) => Self {
                ok: false,
                message: format!("Copy failed: {}", e),
            },
            (Err(e), DeliveryMode::File) => Self {
                ok: false,
                message: format!("Save failed: {}", e),
            },
        }
    }
}

/// Projects the store and hands the JSON to `sink`.
///
/// The store is only read, so a failed delivery leaves nothing to undo.
pub fn deliver_export<S: ExportSink + ?Sized>(
    store: &PlanStore,
    options: &ExportOptions,
    sink: &mut S,
    mode: DeliveryMode,
) -> Notice {
    let result = options
        .render(store.positions())
        .and_then(|json| sink.deliver(&json, mode));
    if let Err(e) = &result {
        tracing::warn!(?mode, error = %e, "export delivery failed");
    }
    Notice::from_result(mode, &result)
}
