//! Board API
//!
//! Fetch wrapper for the remote board endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::BoardData;

/// Remote endpoint serving the board payload
pub const BOARD_DATA_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

fn js_error(context: &str, value: JsValue) -> String {
    match value.as_string() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{}: {:?}", context, value),
    }
}

/// Fetch tickets and users in one request.
///
/// Every failure path comes back as a single error string; the payload is
/// only Ok when both lists deserialized, so callers never see partial data.
pub async fn fetch_board_data() -> Result<BoardData, String> {
    let window = web_sys::window().ok_or("no window available")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(BOARD_DATA_URL, &opts)
        .map_err(|e| js_error("invalid request", e))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("request failed", e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    let body_promise = response
        .json()
        .map_err(|e| js_error("response body is not JSON", e))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|e| js_error("failed to read response body", e))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}
