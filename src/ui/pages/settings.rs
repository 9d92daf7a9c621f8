use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{geo::default_layers, AppState},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        templates::Page,
        theme,
    },
    util::{
        persistence::{clear_persisted_state, data_file},
        version::{version_label, APP_NAME},
    },
};

const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (page_size, layer, field_count) =
        state.with(|st| (st.advisory_page_size, st.map_layer.clone(), st.fields.len()));
    let storage = data_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "Unavailable on this system".to_string());

    let on_page_size = move |evt: FormEvent| match evt.value().parse::<usize>() {
        Ok(size) if size > 0 => {
            state.with_mut(|st| st.advisory_page_size = size);
            persist_user_state(&state);
        }
        _ => push_toast(toasts, ToastKind::Error, "Choose a page size from the list."),
    };

    let mut on_layer = move |id: String| {
        state.with_mut(|st| st.map_layer = id);
        persist_user_state(&state);
    };

    let on_reset = move |_| {
        state.with_mut(|st| st.reset_user_state());
        match clear_persisted_state() {
            Ok(()) => push_toast(toasts, ToastKind::Info, "Saved preferences and fields cleared."),
            Err(err) => {
                tracing::warn!(%err, "failed to clear persisted state");
                push_toast(toasts, ToastKind::Error, format!("Could not clear saved data: {err}"));
            }
        }
    };

    rsx! {
        Page {
            title: "Settings".to_string(),
            section { class: "panel",
                h2 { "Preferences" }
                label { r#for: "page-size", "Advisories per page" }
                select {
                    id: "page-size",
                    value: "{page_size}",
                    onchange: on_page_size,
                    for size in PAGE_SIZES {
                        option { key: "{size}", value: "{size}", selected: size == page_size, "{size}" }
                    }
                }
                p { "Default map layer" }
                div { class: "layer-switcher",
                    for map_layer in default_layers() {
                        button {
                            key: "{map_layer.id}",
                            r#type: "button",
                            class: theme::btn_toggle(map_layer.id == layer),
                            onclick: {
                                let id = map_layer.id.clone();
                                move |_| on_layer(id.clone())
                            },
                            "{map_layer.label}"
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Stored data" }
                p { class: "muted", "State file: {storage}" }
                p { class: "muted", "{field_count} saved field(s)" }
                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: on_reset,
                    "Reset saved data"
                }
            }

            section { class: "panel about",
                h2 { "About" }
                p { "{APP_NAME} {version_label()}" }
                p { class: "muted", "Offline demo data bundled with the app." }
            }
        }
    }
}
