//! Directory-per-item record storage shared by equipment and inventory.
//!
//! ```text
//! <root>/
//!   <id>/
//!     info.yaml
//!     picture.jpg
//!     location.jpg
//! ```

mod collection;
mod error;
pub mod id;
pub mod images;
mod loader;
mod record;

pub use collection::ItemStore;
pub use error::{ScanError, StoreError};
pub use images::PictureSlot;
pub use record::{Record, Scan};

/// Metadata file inside every item directory
pub const METADATA_FILE: &str = "info.yaml";
