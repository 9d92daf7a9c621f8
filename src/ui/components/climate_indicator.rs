use dioxus::prelude::*;

use crate::{domain::ClimateReading, ui::theme};

#[component]
pub fn ClimateIndicator(reading: ClimateReading) -> Element {
    let percent = reading.gauge_percent();
    let state = reading.threshold_state();
    let crossing = reading.first_crossing().map(|point| point.label.clone());
    let unit = reading.unit.clone();

    rsx! {
        article { class: theme::climate_panel(state),
            header { class: "climate-indicator__header",
                h3 { "{reading.metric_type}" }
                span {
                    class: "trend trend-{reading.trend.label()}",
                    title: "{reading.trend.label()}",
                    "{reading.trend.symbol()}"
                }
            }
            p { class: "climate-indicator__value",
                "{reading.current_value}{unit}"
                small { class: "muted", " / threshold {reading.threshold}{unit}" }
            }
            div {
                class: "gauge",
                role: "meter",
                aria_valuenow: "{percent}",
                aria_valuemin: "0",
                aria_valuemax: "100",
                div { class: "gauge__fill", style: "width: {percent}%" }
            }
            if let Some(label) = crossing {
                p { class: "climate-indicator__crossing", "Threshold first reached: {label}" }
            }
            if !reading.history.is_empty() {
                ol { class: "climate-indicator__history",
                    for point in reading.history.iter() {
                        li {
                            class: if point.value >= reading.threshold { "over" } else { "" },
                            span { "{point.label}" }
                            span { "{point.value}{unit}" }
                        }
                    }
                }
            }
        }
    }
}
