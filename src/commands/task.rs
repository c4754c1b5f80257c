//! Task Commands
//!
//! Frontend bindings for the task backend commands. Each wrapper probes
//! for the IPC bridge, issues the call, and folds the result into a
//! `RemoteOutcome`: a resolved `null`/`undefined` means no backend is
//! wired up, a rejection is a real error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{backend_available, invoke};
use crate::models::Task;
use crate::sync::{RemoteOutcome, TaskBackend};

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u64,
}

/// Backend handle talking to the Tauri IPC bridge
#[derive(Clone, Copy, Default)]
pub struct TauriBackend;

/// Issue a command expecting a deserializable payload back.
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> RemoteOutcome<T> {
    if !backend_available() {
        return RemoteOutcome::BackendUnavailable;
    }
    match invoke(cmd, args).await {
        Ok(value) => {
            if value.is_null() || value.is_undefined() {
                return RemoteOutcome::BackendUnavailable;
            }
            match serde_wasm_bindgen::from_value(value) {
                Ok(parsed) => RemoteOutcome::Success(parsed),
                Err(err) => RemoteOutcome::Error(err.to_string()),
            }
        }
        Err(err) => RemoteOutcome::Error(format!("{err:?}")),
    }
}

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, RemoteOutcome<Task>> {
    serde_wasm_bindgen::to_value(args).map_err(|err| RemoteOutcome::Error(err.to_string()))
}

impl TaskBackend for TauriBackend {
    async fn add_task(&self, title: &str) -> RemoteOutcome<Task> {
        let args = match to_args(&TitleArgs { title }) {
            Ok(args) => args,
            Err(outcome) => return outcome,
        };
        call("add_task", args).await
    }

    async fn list_tasks(&self) -> RemoteOutcome<Vec<Task>> {
        call("list_tasks", JsValue::NULL).await
    }

    async fn toggle_task(&self, id: u64) -> RemoteOutcome<Task> {
        let args = match to_args(&IdArgs { id }) {
            Ok(args) => args,
            Err(outcome) => return outcome,
        };
        call("toggle_task", args).await
    }

    /// Delete resolves with no payload, so success is the call resolving
    /// at all; the null result must not read as "backend absent".
    async fn delete_task(&self, id: u64) -> RemoteOutcome<()> {
        if !backend_available() {
            return RemoteOutcome::BackendUnavailable;
        }
        let args = match serde_wasm_bindgen::to_value(&IdArgs { id }) {
            Ok(args) => args,
            Err(err) => return RemoteOutcome::Error(err.to_string()),
        };
        match invoke("delete_task", args).await {
            Ok(_) => RemoteOutcome::Success(()),
            Err(err) => RemoteOutcome::Error(format!("{err:?}")),
        }
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn now_iso(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }
}
