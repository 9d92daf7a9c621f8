use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::{DataReload, persist_user_state, Route},
    domain::{
        alert::{by_severity, open_count},
        climate::ThresholdState,
        market::recommend,
        AppState,
    },
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            AlertCard, ClimateIndicator, CropStatusWidget,
        },
        templates::{DataCard, DataCardColor, Page},
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<DataReload>();
    let nav = use_navigator();

    let (loading, load_error, data) =
        state.with(|st| (st.loading, st.load_error.clone(), st.data.clone()));
    let today = OffsetDateTime::now_utc().date();

    let alerts = by_severity(&data.alerts);
    let open_alerts = open_count(&data.alerts);
    let best_market = recommend(&data.markets.entries);
    let warnings = data
        .climate
        .iter()
        .filter(|reading| reading.threshold_state() == ThresholdState::Warning)
        .count();

    let on_acknowledge = {
        let mut state = state;
        move |id: String| {
            let changed = state.with_mut(|st| st.acknowledge_alert(&id));
            if changed {
                persist_user_state(&state);
                push_toast(toasts, ToastKind::Success, "Alert acknowledged.");
            }
        }
    };

    let on_alert_action = move |action: String| {
        tracing::info!(action = %action, "alert action requested");
        push_toast(toasts, ToastKind::Info, format!("{action}: request sent."));
    };

    let on_mark_harvested = {
        let mut state = state;
        move |id: String| {
            state.with_mut(|st| {
                if let Some(crop) = st.data.crops.iter_mut().find(|crop| crop.id == id) {
                    crop.mark_harvested();
                }
            });
            push_toast(toasts, ToastKind::Success, "Crop marked as harvested.");
        }
    };

    rsx! {
        Page {
            title: "Overview".to_string(),
            subtitle: "Alerts, crops and climate for your farm".to_string(),
            is_loading: loading,
            error: load_error,
            on_retry: move |_| reload.request(),
            div { class: "data-card-grid",
                DataCard {
                    title: "Open alerts".to_string(),
                    value: open_alerts.to_string(),
                    icon: "🔔".to_string(),
                    color: if open_alerts > 0 { DataCardColor::Warning } else { DataCardColor::Success },
                }
                DataCard {
                    title: "Crops tracked".to_string(),
                    value: data.crops.len().to_string(),
                    icon: "🌱".to_string(),
                    color: DataCardColor::Secondary,
                }
                DataCard {
                    title: "Best market".to_string(),
                    value: best_market
                        .as_ref()
                        .map(|entry| format!("{} · KES {:.2}", entry.name, entry.net()))
                        .unwrap_or_else(|| "No quotes".to_string()),
                    icon: "💰".to_string(),
                    onclick: move |_| {
                        nav.push(Route::Markets {});
                    },
                }
                DataCard {
                    title: "Climate warnings".to_string(),
                    value: warnings.to_string(),
                    icon: "🌦️".to_string(),
                    color: if warnings > 0 { DataCardColor::Warning } else { DataCardColor::Primary },
                }
            }

            section { class: "dashboard-section",
                h2 { "Alerts" }
                if alerts.is_empty() {
                    p { class: "empty", "No alerts right now." }
                }
                for alert in alerts {
                    AlertCard {
                        key: "{alert.id}",
                        alert,
                        on_action: on_alert_action,
                        on_acknowledge: on_acknowledge.clone(),
                    }
                }
            }

            section { class: "dashboard-section",
                h2 { "Crops" }
                div { class: "crop-grid",
                    for crop in data.crops {
                        CropStatusWidget {
                            key: "{crop.id}",
                            crop,
                            today,
                            on_add_photo: move |_| push_toast(toasts, ToastKind::Info, "Photo upload is not available offline."),
                            on_request_visit: move |_| push_toast(toasts, ToastKind::Success, "Extension officer visit requested."),
                            on_mark_harvested: on_mark_harvested.clone(),
                        }
                    }
                }
            }

            section { class: "dashboard-section",
                h2 { "Climate" }
                div { class: "climate-grid",
                    for reading in data.climate {
                        ClimateIndicator { key: "{reading.metric_type}", reading }
                    }
                }
            }
        }
    }
}
