use super::{render, scan_notice, AppState, WebError};
use crate::template::{DashboardContext, Page};
use axum::extract::State;
use axum::response::Html;

/// Counts for both modules, loaded concurrently.
pub async fn show(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let (equipment_scan, inventory_scan) =
        tokio::join!(state.equipment.items(), state.inventory.items());
    let equipment = equipment_scan?;
    let inventory = inventory_scan?;

    let notices: Vec<String> = [
        scan_notice("equipment", equipment.error.as_ref()),
        scan_notice("inventory", inventory.error.as_ref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    render(
        &state,
        Page::Dashboard,
        &DashboardContext {
            title: "Warehouse".to_string(),
            equipment_count: equipment.items.len(),
            borrowed_count: equipment.items.iter().filter(|item| item.in_use).count(),
            inventory_count: inventory.items.len(),
            notice: (!notices.is_empty()).then(|| notices.join(" ")),
        },
    )
}
