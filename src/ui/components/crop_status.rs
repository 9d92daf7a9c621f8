use dioxus::prelude::*;
use time::Date;

use crate::{domain::CropStatus, ui::theme};

/// Card for one planted crop: health, growth progress, open issues and the
/// quick actions a farmer takes from the field.
#[component]
pub fn CropStatusWidget(
    crop: CropStatus,
    today: Date,
    on_add_photo: Option<EventHandler<String>>,
    on_request_visit: Option<EventHandler<String>>,
    on_mark_harvested: Option<EventHandler<String>>,
) -> Element {
    let band = crop.health_band();
    let progress = (crop.progress() * 100.0).round();
    let days = crop.days_since_planting(today);
    let planted = crop.planted_label();

    let fire = move |handler: Option<EventHandler<String>>, id: String| {
        if let Some(handler) = handler {
            handler.call(id);
        }
    };
    let photo_id = crop.id.clone();
    let visit_id = crop.id.clone();
    let harvest_id = crop.id.clone();

    rsx! {
        article { class: "crop-widget",
            header { class: "crop-widget__header",
                div {
                    h3 { "{crop.crop_type}" }
                    p { class: "muted", "Planted {planted} · {days} days ago" }
                    if let Some(acreage) = crop.acreage {
                        p { class: "muted", "{acreage:.1} acres" }
                    }
                }
                span { class: theme::health_chip(band), "Health {crop.health_score}%" }
            }

            div { class: "crop-widget__stage",
                div { class: "stage-row",
                    span { "{crop.growth_stage.label()}" }
                    span { "{progress}%" }
                }
                div {
                    class: "progress",
                    role: "progressbar",
                    aria_valuenow: "{progress}",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    div { class: "progress__bar", style: "width: {progress}%" }
                }
            }

            if crop.issues.is_empty() {
                p { class: "muted", "No active issues." }
            } else {
                ul { class: "crop-widget__issues",
                    for issue in crop.issues.iter() {
                        li { key: "{issue.id}", class: theme::issue_row(issue.severity),
                            span { "{issue.label}" }
                            small { "{issue.severity.label()}" }
                        }
                    }
                }
            }

            footer { class: "crop-widget__actions",
                button {
                    r#type: "button",
                    class: theme::btn_outline(),
                    onclick: move |_| fire(on_add_photo, photo_id.clone()),
                    "Add Photo"
                }
                button {
                    r#type: "button",
                    class: theme::btn_outline(),
                    onclick: move |_| fire(on_request_visit, visit_id.clone()),
                    "Request Visit"
                }
                button {
                    r#type: "button",
                    class: theme::btn_primary(),
                    disabled: crop.growth_stage.progress() >= 1.0,
                    onclick: move |_| fire(on_mark_harvested, harvest_id.clone()),
                    "Mark Harvested"
                }
            }
        }
    }
}
