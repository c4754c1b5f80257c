//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. The raw `invoke` binding lives
//! here; per-domain wrappers classify each call into a `RemoteOutcome`
//! before anything else sees it.

mod task;

use wasm_bindgen::prelude::*;

use crate::sync::SyncController;

pub use task::TauriBackend;

/// The production sync controller type, for context lookup
pub type AppSync = SyncController<TauriBackend>;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Whether the Tauri IPC bridge is present at all. Checked once per call,
/// for every operation, so "no backend configured" is never confused with
/// "this call failed".
fn backend_available() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("__TAURI__")).unwrap_or(false)
        })
        .unwrap_or(false)
}
