use dioxus::prelude::*;

use crate::{
    app::{DataReload, persist_user_state, save_user_state},
    domain::{
        geo::total_distance_km, AppState, CompletedPath, FieldDraft, FormState, SavedField,
    },
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            MapView,
        },
        templates::{FormShell, Page},
        theme,
    },
    util::{record_id, today_iso},
};

#[component]
pub fn FieldsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<DataReload>();
    let mut draft = use_signal(|| None::<FormState<FieldDraft>>);

    let (loading, load_error, data, fields, layer) = state.with(|st| {
        (
            st.loading,
            st.load_error.clone(),
            st.data.clone(),
            st.fields.clone(),
            st.map_layer.clone(),
        )
    });
    let saved_paths: Vec<_> = fields.iter().map(|field| field.path.clone()).collect();
    let crop_names: Vec<String> = data.crops.iter().map(|crop| crop.crop_type.clone()).collect();
    let form = draft();
    let draft_summary = form.as_ref().map(|form| {
        format!(
            "{} points · {:.2} km",
            form.values.path.len(),
            total_distance_km(&form.values.path)
        )
    });

    let on_draw_complete = move |path: CompletedPath| {
        tracing::debug!(points = path.points.len(), km = path.distance_km, "path completed");
        draft.set(Some(FormState::new(FieldDraft::for_path(record_id("field"), path.points))));
    };

    let on_layer_change = move |id: String| {
        state.with_mut(|st| st.map_layer = id);
        persist_user_state(&state);
    };

    let on_marker_click = move |id: String| {
        let title = state.with(|st| {
            st.data
                .markers
                .iter()
                .find(|marker| marker.id == id)
                .map(|marker| format!("{} ({})", marker.title, marker.kind.label()))
        });
        if let Some(title) = title {
            push_toast(toasts, ToastKind::Info, title);
        }
    };

    let on_submit = move |_| {
        let Some(values) = draft.with_mut(|form| form.as_mut().and_then(|f| f.begin_submit()))
        else {
            return;
        };
        let field = values.into_field(today_iso());
        let name = field.name.clone();
        state.with_mut(|st| st.upsert_field(field));
        match save_user_state(&state) {
            Ok(()) => {
                draft.set(None);
                push_toast(toasts, ToastKind::Success, format!("Saved {name}."));
            }
            Err(err) => {
                draft.with_mut(|form| {
                    if let Some(form) = form.as_mut() {
                        form.finish(Err(format!("Kept for this session only: {err}")));
                    }
                });
            }
        }
    };

    let on_delete = move |id: String| {
        state.with_mut(|st| st.fields.retain(|field| field.id != id));
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Info, "Field removed.");
    };

    rsx! {
        Page {
            title: "Fields".to_string(),
            subtitle: "Measure plots and routes on the map".to_string(),
            is_loading: loading,
            error: load_error,
            on_retry: move |_| reload.request(),
            MapView {
                center: data.map_center,
                zoom: data.map_zoom,
                markers: data.markers,
                active_layer: layer,
                on_layer_change,
                on_marker_click,
                enable_drawing: true,
                on_draw_complete,
                saved_paths,
            }

            if let Some(form) = form {
                section { class: "panel",
                    h2 { "Save measured path" }
                    if let Some(summary) = draft_summary {
                        p { class: "muted", "{summary}" }
                    }
                    FormShell {
                        onsubmit: on_submit,
                        is_submitting: form.is_submitting(),
                        submit_error: form.submit_error().map(str::to_string),
                        submit_text: "Save field".to_string(),
                        label { r#for: "field-name", "Name" }
                        input {
                            id: "field-name",
                            value: "{form.values.name}",
                            oninput: move |evt: FormEvent| {
                                draft.with_mut(|form| {
                                    if let Some(form) = form.as_mut() {
                                        form.values.name = evt.value();
                                    }
                                });
                            },
                        }
                        if let Some(message) = form.error("name") {
                            p { class: "field-error", "{message}" }
                        }
                        label { r#for: "field-crop", "Crop (optional)" }
                        input {
                            id: "field-crop",
                            list: "field-crop-options",
                            value: "{form.values.crop}",
                            oninput: move |evt: FormEvent| {
                                draft.with_mut(|form| {
                                    if let Some(form) = form.as_mut() {
                                        form.values.crop = evt.value();
                                    }
                                });
                            },
                        }
                        datalist { id: "field-crop-options",
                            for crop in crop_names {
                                option { key: "{crop}", value: "{crop}" }
                            }
                        }
                        if let Some(message) = form.error("path") {
                            p { class: "field-error", "{message}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: theme::btn_outline(),
                        onclick: move |_| draft.set(None),
                        "Discard"
                    }
                }
            }

            section { class: "panel",
                h2 { "Saved fields" }
                if fields.is_empty() {
                    p { class: "empty", "Nothing saved yet. Start measuring to add a field." }
                } else {
                    ul { class: "saved-fields",
                        for field in fields {
                            SavedFieldRow { key: "{field.id}", field, on_delete }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedFieldRow(field: SavedField, on_delete: EventHandler<String>) -> Element {
    let id = field.id.clone();
    rsx! {
        li { class: "saved-field",
            div {
                strong { "{field.name}" }
                if let Some(crop) = field.crop.as_ref() {
                    span { class: "tag", "{crop}" }
                }
                p { class: "muted",
                    "{field.distance_km():.2} km · {field.path.len()} points · saved {field.created_on}"
                }
            }
            button {
                r#type: "button",
                class: "btn btn-ghost",
                onclick: move |_| on_delete.call(id.clone()),
                "Delete"
            }
        }
    }
}
