//! Error types shared by every host

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The key/value backend refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Clipboard or file delivery of an export failed
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DeliveryMode, Notice};
    use crate::token::{AccessToken, KeyValueStorage};

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some("pk.saved".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_keeps_backend_message() {
        let mut token = AccessToken::load(ReadOnlyStorage);
        let error = token.set("pk.new").unwrap_err();

        assert!(matches!(error, Error::Storage(_)));
        assert_eq!(format!("{}", error), "Storage error: quota exceeded");
    }

    #[test]
    fn test_delivery_failure_in_notice() {
        let result = Err(Error::Delivery("clipboard permission denied".to_string()));
        let notice = Notice::from_result(DeliveryMode::Clipboard, &result);

        assert!(!notice.ok);
        assert_eq!(
            notice.message,
            "Copy failed: Delivery failed: clipboard permission denied"
        );
    }

    #[test]
    fn test_write_failure_in_save_notice() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let notice = Notice::from_result(DeliveryMode::File, &Err(io_error.into()));

        assert!(notice.message.starts_with("Save failed: IO error"));
        assert!(notice.message.contains("read-only volume"));
    }

    #[test]
    fn test_malformed_document_is_json_error() {
        let error = crate::import::store_from_json(r#"{"positions": [{"name": 3}]}"#).unwrap_err();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).starts_with("JSON error"));
    }
}
