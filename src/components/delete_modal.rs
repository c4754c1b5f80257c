//! Delete Confirmation Modal
//!
//! Overlay shown while a delete is pending. Confirm runs the delete,
//! Cancel dismisses, and clicking the backdrop counts as cancel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::use_sync;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let store = use_app_store();
    let sync = use_sync();

    let pending = move || store.pending_delete().get().pending_id().is_some();

    let backdrop_click = move |ev: web_sys::MouseEvent| {
        // Only a click on the backdrop itself cancels, not one inside the dialog
        let on_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if on_backdrop {
            sync.cancel_delete();
        }
    };

    view! {
        <Show when=pending>
            <div class="modal-overlay" on:click=backdrop_click>
                <div class="modal">
                    <p>"Delete this task?"</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-delete-btn"
                            on:click=move |_| {
                                spawn_local(async move {
                                    sync.confirm_delete().await;
                                });
                            }
                        >
                            "Delete"
                        </button>
                        <button
                            class="cancel-delete-btn"
                            on:click=move |_| sync.cancel_delete()
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
