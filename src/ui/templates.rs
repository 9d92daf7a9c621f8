//! Generic page, card, list and form scaffolding reused by every screen.

use dioxus::prelude::*;

use crate::domain::climate::Trend;

#[component]
pub fn Page(
    title: String,
    subtitle: Option<String>,
    actions: Option<Element>,
    #[props(default)] is_loading: bool,
    error: Option<String>,
    on_retry: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let loading_message = format!("Loading {}...", title.to_lowercase());
    rsx! {
        div { class: "shamba-page",
            header { class: "page-header",
                div {
                    h1 { "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "subtitle", "{subtitle}" }
                    }
                }
                if let Some(actions) = actions {
                    div { class: "page-actions", {actions} }
                }
            }
            if is_loading {
                Loader { message: loading_message }
            } else if let Some(error) = error {
                ErrorPanel { error, on_retry }
            } else {
                main { class: "page-content", {children} }
            }
        }
    }
}

#[component]
pub fn Loader(#[props(default = "Loading...".to_string())] message: String, #[props(default)] compact: bool) -> Element {
    let class = if compact { "shamba-loader compact" } else { "shamba-loader" };
    rsx! {
        div { class, role: "status", aria_live: "polite",
            span { class: "spinner", aria_hidden: "true" }
            span { "{message}" }
        }
    }
}

#[component]
pub fn ErrorPanel(error: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "shamba-error", role: "alert",
            strong { "Something went wrong." }
            p { "{error}" }
            if let Some(on_retry) = on_retry {
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataCardColor {
    #[default]
    Primary,
    Secondary,
    Warning,
    Success,
}

impl DataCardColor {
    fn css(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

#[component]
pub fn DataCard(
    title: String,
    value: String,
    icon: String,
    trend: Option<Trend>,
    trend_value: Option<String>,
    #[props(default)] color: DataCardColor,
    onclick: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "data-card data-card--{color.css()}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            div { class: "data-card__icon", "{icon}" }
            div { class: "data-card__body",
                p { class: "data-card__title", "{title}" }
                p { class: "data-card__value", "{value}" }
            }
            if let Some(trend) = trend {
                div { class: "data-card__trend trend-{trend.label()}",
                    span { "{trend.symbol()}" }
                    if let Some(trend_value) = trend_value {
                        small { "{trend_value}" }
                    }
                }
            }
        }
    }
}

/// List frame: header with filters and refresh, loader, empty state and a
/// load-more footer. Rows are passed as children.
#[component]
pub fn ListView(
    title: Option<String>,
    filters: Option<Element>,
    #[props(default)] loading: bool,
    #[props(default)] is_empty: bool,
    empty: Option<Element>,
    #[props(default)] has_more: bool,
    on_refresh: Option<EventHandler<()>>,
    on_load_more: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "shamba-list",
            header { class: "shamba-list__header",
                if let Some(title) = title {
                    h2 { "{title}" }
                }
                div { class: "shamba-list__actions",
                    {filters}
                    if let Some(on_refresh) = on_refresh {
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| on_refresh.call(()),
                            "Refresh"
                        }
                    }
                }
            }
            if loading {
                Loader { compact: true, message: "Fetching latest data...".to_string() }
            }
            if !loading && is_empty {
                match empty {
                    Some(empty) => empty,
                    None => rsx! { p { class: "empty", "No records yet." } },
                }
            }
            div { class: "shamba-list__content",
                {children}
                if has_more {
                    if let Some(on_load_more) = on_load_more {
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| on_load_more.call(()),
                            "Load more"
                        }
                    }
                }
            }
        }
    }
}

/// Form frame: renders the fields, the submit error and the submit button.
#[component]
pub fn FormShell(
    onsubmit: EventHandler<()>,
    #[props(default)] is_submitting: bool,
    submit_error: Option<String>,
    #[props(default = "Save".to_string())] submit_text: String,
    children: Element,
) -> Element {
    let label = if is_submitting { "Saving...".to_string() } else { submit_text };
    rsx! {
        form {
            class: "shamba-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                onsubmit.call(());
            },
            {children}
            if let Some(message) = submit_error {
                p { class: "form-error", "{message}" }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: is_submitting,
                "{label}"
            }
        }
    }
}
