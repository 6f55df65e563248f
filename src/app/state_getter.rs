// src/app/state_getter.rs
//! Builds the current view from the session and converts it to JSON for JS.

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::JsValue;

use crate::app::lock_or_recover;
use crate::app::renderer::Renderer;
use crate::error::TarotError;
use crate::logic::session::ReadingSession;

/// ビューを組み立てて JSON 文字列にする。
pub fn view_state_string(
    session_arc: &Arc<Mutex<ReadingSession>>,
    renderer_arc: &Arc<Mutex<Renderer>>,
) -> Result<String, TarotError> {
    let session = lock_or_recover(session_arc);
    let view = lock_or_recover(renderer_arc).build_view(&session);
    Ok(serde_json::to_string(&view)?)
}

/// JS に渡す版。失敗したら JS 側で例外になる。
pub fn view_state_json(
    session_arc: &Arc<Mutex<ReadingSession>>,
    renderer_arc: &Arc<Mutex<Renderer>>,
) -> Result<JsValue, JsValue> {
    match view_state_string(session_arc, renderer_arc) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            error!("Failed to serialize view state: {}", e);
            Err(e.into())
        }
    }
}
