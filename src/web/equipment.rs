//! `/equipment` routes.

use super::form::UploadForm;
use super::qr::{edit_url, qr_png};
use super::{render, scan_notice, AppState, IdQuery, ListQuery, WebError};
use crate::equipment::{EquipmentChanges, EquipmentSort, RETURN_CODE};
use crate::store::PictureSlot;
use crate::template::{EquipmentFormContext, EquipmentListContext, Page};
use axum::extract::{Host, Multipart, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse as _, Redirect, Response};
use axum::Form;
use serde::Deserialize;

const LISTING: &str = "/equipment";

/// Body of `POST /equipment/use`.
#[derive(Debug, Deserialize)]
pub struct UseForm {
    pub id: String,
    pub who: String,
}

fn edit_page(id: &str) -> String {
    format!("{LISTING}/edit?id={id}")
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, WebError> {
    let (key, reversed) = query.order::<EquipmentSort>()?;
    let scan = state.equipment.sorted_items(key, reversed).await?;
    let notice = scan_notice("equipment", scan.error.as_ref());
    render(
        &state,
        Page::EquipmentList,
        &EquipmentListContext {
            title: "Equipment".to_string(),
            items: scan.items,
            sort: key.to_string(),
            reversed,
            notice,
            return_code: RETURN_CODE,
        },
    )
}

pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    render(&state, Page::EquipmentAdd, &EquipmentFormContext::add())
}

pub async fn add(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, WebError> {
    let mut form = UploadForm::read(&mut multipart).await?;
    let name = form.required("name")?;
    let item = state.equipment.add(&name).await?;
    if let Some(image) = form.take_file("image") {
        state.equipment.set_picture(&item.id, image).await?;
    }
    Ok(Redirect::to(LISTING))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    let item = state.equipment.get(&id).await?;
    Ok(render(&state, Page::EquipmentEdit, &EquipmentFormContext::edit(item))?.into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    mut multipart: Multipart,
) -> Result<Redirect, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING));
    };
    let mut form = UploadForm::read(&mut multipart).await?;
    let changes = EquipmentChanges {
        name: form.required("name")?,
        price: form.text("price"),
    };
    state.equipment.edit(&id, changes).await?;
    if let Some(image) = form.take_file("image") {
        state.equipment.set_picture(&id, image).await?;
    }
    if let Some(image) = form.take_file("location_image") {
        state.equipment.set_location_picture(&id, image).await?;
    }
    Ok(Redirect::to(&edit_page(&id)))
}

/// Lend an item, or return it when `who` is the return code.
pub async fn use_item(
    State(state): State<AppState>,
    Form(form): Form<UseForm>,
) -> Result<Redirect, WebError> {
    let who = form.who.trim();
    if who.is_empty() {
        return Err(WebError::BadRequest("Missing field 'who'".to_string()));
    }
    state.equipment.use_item(&form.id, who).await?;
    Ok(Redirect::to(LISTING))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Redirect, WebError> {
    if let Some(id) = query.into_id() {
        state.equipment.delete(&id).await?;
    }
    Ok(Redirect::to(LISTING))
}

/// PNG QR code pointing at the item's edit page on this host.
pub async fn qr(
    State(state): State<AppState>,
    Host(host): Host,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    state.equipment.require(&id)?;
    let url = edit_url(&host, "equipment", &id);
    let png = tokio::task::spawn_blocking(move || qr_png(&url)).await??;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// The stored location picture.
pub async fn location(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    let jpeg = state
        .equipment
        .picture_bytes(&id, PictureSlot::Location)
        .await?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], jpeg).into_response())
}
