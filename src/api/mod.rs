//! Product API Client
//!
//! Fetch-based bindings to the remote product API, organized like the rest
//! of the UI: URL building in `endpoints`, one function per call in
//! `products`, transport plumbing here.

mod endpoints;
mod products;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

pub use endpoints::{image_url, ListQuery};
pub use products::*;

/// Why an API call failed. The UI shows one generic message per action;
/// the detail here goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    fn network(value: JsValue) -> Self {
        Self::Network(describe_js(&value))
    }

    fn decode(value: JsValue) -> Self {
        Self::Decode(describe_js(&value))
    }

    fn encode(value: JsValue) -> Self {
        Self::Encode(describe_js(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ========================
// Transport
// ========================

/// Request body variants
enum Body {
    Empty,
    Json(String),
    Multipart(FormData),
}

/// Issue a request and fail on transport errors or non-2xx statuses.
async fn send(method: &str, url: &str, body: Body) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);

    match &body {
        Body::Empty => {}
        Body::Json(json) => {
            let headers = Headers::new().map_err(ApiError::encode)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(ApiError::encode)?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(json));
        }
        // No Content-Type: the browser fills in the multipart boundary.
        Body::Multipart(form) => init.set_body(form),
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value.dyn_into().map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::decode)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::decode)?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}
