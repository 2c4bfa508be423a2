//! `/inventory` routes.

use super::form::UploadForm;
use super::qr::{edit_url, qr_png};
use super::{render, scan_notice, AppState, IdQuery, ListQuery, WebError};
use crate::inventory::{InventoryFields, InventorySort};
use crate::store::PictureSlot;
use crate::template::{InventoryFormContext, InventoryListContext, Page};
use axum::extract::{Host, Multipart, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse as _, Redirect, Response};

const LISTING: &str = "/inventory";

fn edit_page(id: &str) -> String {
    format!("{LISTING}/edit?id={id}")
}

/// Every descriptive field of the add and edit forms.
fn fields(form: &UploadForm) -> Result<InventoryFields, WebError> {
    Ok(InventoryFields {
        sku: form.text("sku"),
        name: form.required("name")?,
        item_type: form.text("itemtype"),
        value: form.text("value"),
        size: form.text("size"),
        quantity: form.text("quantity"),
        price: form.text("price"),
        location: form.text("location"),
    })
}

async fn store_pictures(state: &AppState, id: &str, form: &mut UploadForm) -> Result<(), WebError> {
    if let Some(image) = form.take_file("image") {
        state.inventory.set_picture(id, image).await?;
    }
    if let Some(image) = form.take_file("location_image") {
        state.inventory.set_location_picture(id, image).await?;
    }
    Ok(())
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, WebError> {
    let (key, reversed) = query.order::<InventorySort>()?;
    let scan = state.inventory.sorted_items(key, reversed).await?;
    let notice = scan_notice("inventory", scan.error.as_ref());
    render(
        &state,
        Page::InventoryList,
        &InventoryListContext {
            title: "Inventory".to_string(),
            items: scan.items,
            sort: key.to_string(),
            reversed,
            notice,
        },
    )
}

pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    render(&state, Page::InventoryAdd, &InventoryFormContext::add())
}

pub async fn add(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, WebError> {
    let mut form = UploadForm::read(&mut multipart).await?;
    let item = state.inventory.add(fields(&form)?).await?;
    store_pictures(&state, &item.id, &mut form).await?;
    Ok(Redirect::to(LISTING))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    let item = state.inventory.get(&id).await?;
    Ok(render(&state, Page::InventoryEdit, &InventoryFormContext::edit(item))?.into_response())
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
    state.inventory.update(&id, fields(&form)?).await?;
    store_pictures(&state, &id, &mut form).await?;
    Ok(Redirect::to(&edit_page(&id)))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Redirect, WebError> {
    if let Some(id) = query.into_id() {
        state.inventory.delete(&id).await?;
    }
    Ok(Redirect::to(LISTING))
}

pub async fn qr(
    State(state): State<AppState>,
    Host(host): Host,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    state.inventory.require(&id)?;
    let url = edit_url(&host, "inventory", &id);
    let png = tokio::task::spawn_blocking(move || qr_png(&url)).await??;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

pub async fn location(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, WebError> {
    let Some(id) = query.into_id() else {
        return Ok(Redirect::to(LISTING).into_response());
    };
    let jpeg = state
        .inventory
        .picture_bytes(&id, PictureSlot::Location)
        .await?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], jpeg).into_response())
}
