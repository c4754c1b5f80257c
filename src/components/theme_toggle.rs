//! Theme Toggle Component
//!
//! Light/dark toggle. The choice is persisted in localStorage under a
//! fixed key and mirrored to `data-theme` on the document element.

use leptos::prelude::*;

use crate::models::Theme;

const THEME_KEY: &str = "theme";

/// Read the saved theme, defaulting to light.
pub fn load_theme() -> Theme {
    let saved = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    saved.map(|value| Theme::from_str(&value)).unwrap_or_default()
}

fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

/// Set `data-theme` on the document element so the stylesheet switches.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(load_theme());

    let toggle = move |_| {
        let next = theme.get().toggled();
        apply_theme(next);
        save_theme(next);
        set_theme.set(next);
    };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=toggle>
            {move || theme.get().icon()}
        </button>
    }
}
