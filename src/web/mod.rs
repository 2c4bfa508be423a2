//! HTTP interface: listings, forms, pictures and QR codes for both modules.

mod auth;
mod dashboard;
mod equipment;
mod error;
mod form;
mod http_logging;
mod inventory;
mod qr;
mod router;

pub use auth::{Credentials, REALM};
pub use error::WebError;
pub use http_logging::{RequestLoggingLayer, RequestLoggingService};
pub use qr::{edit_url, qr_png, QR_MIN_SIDE};
pub use router::{build_router, AppState, MAX_UPLOAD_BYTES};

use crate::sort::ParseSortError;
use crate::store::ScanError;
use crate::template::Page;
use axum::response::Html;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// `?sort=&reverse=` of a listing.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    sort: Option<String>,
    reverse: Option<bool>,
}

impl ListQuery {
    /// Without a sort key the default key is used, reversed.
    fn order<K>(&self) -> Result<(K, bool), ParseSortError>
    where
        K: FromStr<Err = ParseSortError> + Default,
    {
        let key = self.sort.as_deref().map(str::trim).filter(|key| !key.is_empty());
        let reversed = self.reverse.unwrap_or(key.is_none());
        let parsed = key.map(str::parse::<K>).transpose()?.unwrap_or_default();
        Ok((parsed, reversed))
    }
}

/// `?id=` of the single-item routes.
#[derive(Debug, Default, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

impl IdQuery {
    fn into_id(self) -> Option<String> {
        self.id.filter(|id| !id.is_empty())
    }
}

fn render<T: Serialize>(state: &AppState, page: Page, context: &T) -> Result<Html<String>, WebError> {
    Ok(Html(state.templates.render(page, context)?))
}

/// Log a partial scan and phrase it for the page.
fn scan_notice(module: &str, error: Option<&ScanError>) -> Option<String> {
    error.map(|failed| {
        warn!(module, failures = failed.failures().len(), "{failed}");
        format!(
            "{} {module} item(s) failed to load, see the log for details",
            failed.failures().len()
        )
    })
}
