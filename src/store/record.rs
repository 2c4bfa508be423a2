use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record persisted as `<root>/<id>/info.yaml`.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Directory name of the item; immutable once allocated.
    fn id(&self) -> &str;

    /// Used when the metadata file carries no id of its own.
    fn set_id(&mut self, id: String);

    /// Stamped on every write.
    fn set_updated(&mut self, at: DateTime<Utc>);
}

/// Result of scanning a root: whatever loaded plus the aggregate of what
/// did not.
#[derive(Debug)]
pub struct Scan<R> {
    pub items: Vec<R>,
    pub error: Option<super::ScanError>,
}

impl<R> Scan<R> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }

    /// True when every subdirectory loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Strict view of the scan: any failure discards the loaded items.
    pub fn into_result(self) -> Result<Vec<R>, super::ScanError> {
        self.error.map_or(Ok(self.items), Err)
    }
}
