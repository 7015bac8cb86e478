//! Product Calls
//!
//! One async function per API operation.

use web_sys::{File, FormData};

use super::endpoints::{create_url, product_url, update_url, ListQuery};
use super::{read_json, send, ApiError, Body};
use crate::config::API_BASE;
use crate::draft::ProductPayload;
use crate::models::{Product, ProductFields};

// ========================
// Reads
// ========================

/// Fetch the listing or a search result, depending on the query
pub async fn list_products(query: &ListQuery) -> Result<Vec<Product>, ApiError> {
    let url = query.url(API_BASE);
    log::debug!("GET {}", url);
    let response = send("GET", &url, Body::Empty).await?;
    read_json(response).await
}

// ========================
// Writes
// ========================

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    let url = create_url(API_BASE, payload.is_multipart());
    log::debug!("POST {} ({})", url, payload.fields().name);
    let response = send("POST", &url, payload_body(payload)?).await?;
    read_json(response).await
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
    let url = update_url(API_BASE, id, payload.is_multipart());
    log::debug!("PUT {} ({})", url, payload.fields().name);
    let response = send("PUT", &url, payload_body(payload)?).await?;
    read_json(response).await
}

/// Delete by id. The API answers with an empty body.
pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    let url = product_url(API_BASE, id);
    log::debug!("DELETE {}", url);
    send("DELETE", &url, Body::Empty).await?;
    Ok(())
}

fn payload_body(payload: &ProductPayload) -> Result<Body, ApiError> {
    match payload {
        ProductPayload::Fields(fields) => Ok(Body::Json(serde_json::to_string(fields)?)),
        ProductPayload::WithImage(fields, image) => Ok(Body::Multipart(multipart_form(fields, image)?)),
    }
}

/// Multipart fields: `name`, `price`, `description`, `category`, `image`
fn multipart_form(fields: &ProductFields, image: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::encode)?;
    form.append_with_str("name", &fields.name).map_err(ApiError::encode)?;
    form.append_with_str("price", &fields.price.to_string()).map_err(ApiError::encode)?;
    form.append_with_str("description", &fields.description).map_err(ApiError::encode)?;
    form.append_with_str("category", &fields.category).map_err(ApiError::encode)?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(ApiError::encode)?;
    Ok(form)
}
