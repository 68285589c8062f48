//! Remote JSON Bin Adapter
//!
//! GET replaces the board, PUT overwrites the single remote document.
//! No retry, no timeout.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use board_core::{Board, RemoteConfig, RemoteDocument};

use super::{StorageError, StorageResult};

async fn await_promise(promise: js_sys::Promise) -> StorageResult<JsValue> {
    Ok(JsFuture::from(promise).await?)
}

async fn send(url: &str, init: &RequestInit) -> StorageResult<Response> {
    let window = web_sys::window().ok_or(StorageError::Unavailable("window"))?;
    let request = Request::new_with_str_and_init(url, init)?;
    let response: Response = await_promise(window.fetch_with_request(&request)).await?.dyn_into()?;
    if !response.ok() {
        return Err(StorageError::Http(response.status()));
    }
    Ok(response)
}

pub async fn fetch_document(config: &RemoteConfig) -> StorageResult<RemoteDocument> {
    let init = RequestInit::new();
    init.set_method("GET");

    let response = send(&config.url(), &init).await?;
    let body = await_promise(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(body)?)
}

pub async fn push_document(config: &RemoteConfig, board: Board) -> StorageResult<()> {
    let body = serde_json::to_string(&RemoteDocument::new(config, board))?;

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("PUT");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    send(&config.url(), &init).await?;
    Ok(())
}
