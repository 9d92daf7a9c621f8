use dioxus::prelude::*;

use crate::{domain::Alert, ui::theme};

#[component]
pub fn AlertCard(
    alert: Alert,
    on_action: Option<EventHandler<String>>,
    on_acknowledge: Option<EventHandler<String>>,
) -> Element {
    let mut expanded = use_signal(|| false);
    let class = theme::alert_card(alert.severity, alert.acknowledged);
    let show_acknowledge = on_acknowledge.is_some() && !alert.acknowledged;
    let alert_id = alert.id.clone();

    rsx! {
        article { class,
            header { class: "alert-card__header",
                span { class: "alert-card__icon", aria_hidden: "true", "{alert.severity.icon()}" }
                div { class: "alert-card__heading",
                    div { class: "alert-card__meta",
                        span { class: "severity-pill", "{alert.severity.label()}" }
                        span { class: "alert-type", "{alert.kind.label()}" }
                        span { class: "timestamp", "{alert.timestamp}" }
                    }
                    h3 { "{alert.title}" }
                }
                if alert.acknowledged {
                    span { class: "ack-pill", "Acknowledged" }
                }
            }
            p { class: "alert-card__message", "{alert.message}" }

            if let Some(details) = alert.details.clone() {
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    aria_expanded: "{expanded()}",
                    onclick: move |_| expanded.toggle(),
                    if expanded() { "Hide details" } else { "Show details" }
                }
                if expanded() {
                    p { class: "alert-card__details", "{details}" }
                }
            }

            if !alert.actions.is_empty() || show_acknowledge {
                footer { class: "alert-card__actions",
                    for action in alert.actions.clone() {
                        button {
                            key: "{action.id}",
                            r#type: "button",
                            class: theme::action_button(action.variant),
                            onclick: {
                                let id = action.id.clone();
                                move |_| {
                                    if let Some(handler) = on_action {
                                        handler.call(id.clone());
                                    }
                                }
                            },
                            "{action.label}"
                        }
                    }
                    if show_acknowledge {
                        button {
                            r#type: "button",
                            class: theme::btn_outline(),
                            onclick: move |_| {
                                if let Some(handler) = on_acknowledge {
                                    handler.call(alert_id.clone());
                                }
                            },
                            "Acknowledge"
                        }
                    }
                }
            }
        }
    }
}
