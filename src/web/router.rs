use super::auth::{require_basic_auth, Credentials};
use super::http_logging::RequestLoggingLayer;
use super::{dashboard, equipment, inventory};
use crate::config::WarehouseConfig;
use crate::equipment::EquipmentRepository;
use crate::inventory::InventoryRepository;
use crate::template::{TemplateEngine, TemplateError};
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Largest accepted request body; phone photos fit comfortably.
pub const MAX_UPLOAD_BYTES: usize = 33_554_432;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub equipment: Arc<EquipmentRepository>,
    pub inventory: Arc<InventoryRepository>,
    pub templates: Arc<TemplateEngine>,
    pub credentials: Option<Arc<Credentials>>,
}

impl AppState {
    pub fn new(
        config: &WarehouseConfig,
        credentials: Option<Credentials>,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            equipment: Arc::new(EquipmentRepository::new(config)),
            inventory: Arc::new(InventoryRepository::new(config)),
            templates: Arc::new(TemplateEngine::new()?),
            credentials: credentials.map(Arc::new),
        })
    }
}

/// Every route of the web interface, behind basic auth when credentials are
/// configured.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let equipment_files = ServeDir::new(state.equipment.root());
    let inventory_files = ServeDir::new(state.inventory.root());

    Router::new()
        .route("/", get(dashboard::show))
        .route("/equipment", get(equipment::list))
        .route(
            "/equipment/add",
            get(equipment::add_form).post(equipment::add),
        )
        .route(
            "/equipment/edit",
            get(equipment::edit_form).post(equipment::edit),
        )
        .route("/equipment/use", post(equipment::use_item))
        .route(
            "/equipment/delete",
            get(equipment::delete).post(equipment::delete),
        )
        .route("/equipment/qr", get(equipment::qr))
        .route("/equipment/location", get(equipment::location))
        .nest_service("/equipment/files", equipment_files)
        .route("/inventory", get(inventory::list))
        .route(
            "/inventory/add",
            get(inventory::add_form).post(inventory::add),
        )
        .route(
            "/inventory/edit",
            get(inventory::edit_form).post(inventory::edit),
        )
        .route(
            "/inventory/delete",
            get(inventory::delete).post(inventory::delete),
        )
        .route("/inventory/qr", get(inventory::qr))
        .route("/inventory/location", get(inventory::location))
        .nest_service("/inventory/files", inventory_files)
        .layer(from_fn_with_state(state.clone(), require_basic_auth))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(RequestLoggingLayer)
        .with_state(state)
}
