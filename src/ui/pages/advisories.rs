use dioxus::prelude::*;

use crate::{
    app::{DataReload, persist_user_state},
    domain::{AppState, FilterPresets},
    ui::{
        clipboard::copy_text_to_clipboard,
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            AdvisoryFeed,
        },
        templates::Page,
    },
};

#[component]
pub fn AdvisoriesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<DataReload>();

    let (loading, load_error, advisories, page_size) = state.with(|st| {
        (
            st.loading,
            st.load_error.clone(),
            st.data.advisories.clone(),
            st.advisory_page_size,
        )
    });
    let saved_count = advisories.iter().filter(|item| item.saved).count();

    let on_save = {
        let mut state = state;
        move |id: String| {
            if let Some(saved) = state.with_mut(|st| st.toggle_saved_advisory(&id)) {
                persist_user_state(&state);
                let message = if saved { "Advisory saved." } else { "Advisory removed from saved." };
                push_toast(toasts, ToastKind::Success, message);
            }
        }
    };

    let on_share = move |id: String| {
        let text = state.with(|st| {
            st.data
                .advisories
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.share_text())
        });
        if let Some(text) = text {
            spawn(async move {
                if copy_text_to_clipboard(&text).await {
                    push_toast(toasts, ToastKind::Info, "Advisory copied to clipboard.");
                } else {
                    push_toast(toasts, ToastKind::Warning, "Could not copy the advisory.");
                }
            });
        }
    };

    rsx! {
        Page {
            title: "Advisories".to_string(),
            subtitle: format!("{saved_count} saved"),
            is_loading: loading,
            error: load_error,
            on_retry: move |_| reload.request(),
            AdvisoryFeed {
                advisories,
                presets: FilterPresets::default(),
                page_size,
                on_save,
                on_share,
            }
        }
    }
}
