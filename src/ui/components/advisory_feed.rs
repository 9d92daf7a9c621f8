use dioxus::prelude::*;

use crate::{
    domain::{
        advisory::{crop_options, filter_advisories, issue_options},
        crop::format_planting_date,
        AdvisoryFilter, AdvisoryItem, FilterPresets, Paginator,
    },
    ui::{templates::ListView, theme},
};

const ALL: &str = "all";

fn selection(value: String) -> Option<String> {
    (value != ALL && !value.is_empty()).then_some(value)
}

#[component]
pub fn AdvisoryFeed(
    advisories: Vec<AdvisoryItem>,
    #[props(default)] presets: FilterPresets,
    #[props(default = 5)] page_size: usize,
    on_save: Option<EventHandler<String>>,
    on_share: Option<EventHandler<String>>,
) -> Element {
    let initial_range = presets.date_range;
    let mut filter = use_signal(move || AdvisoryFilter {
        date_range: initial_range,
        ..Default::default()
    });
    let mut pager = use_signal(move || Paginator::new(page_size));
    use_effect(use_reactive!(|page_size| {
        if pager.peek().page_size() != page_size.max(1) {
            pager.set(Paginator::new(page_size));
        }
    }));

    let crops = crop_options(&advisories, &presets);
    let issues = issue_options(&advisories, &presets);
    let current = filter();
    let matching = filter_advisories(&advisories, &current);
    let total = matching.len();
    let visible: Vec<AdvisoryItem> = matching
        .into_iter()
        .take(pager().visible(total))
        .cloned()
        .collect();

    let mut update_filter = move |change: &dyn Fn(&mut AdvisoryFilter)| {
        filter.with_mut(|f| change(f));
        pager.with_mut(|p| p.reset());
    };

    let filters = rsx! {
        select {
            aria_label: "Crop",
            value: current.crop.clone().unwrap_or_else(|| ALL.to_string()),
            onchange: move |evt: FormEvent| {
                let crop = selection(evt.value());
                update_filter(&|f| f.crop = crop.clone());
            },
            option { value: ALL, "All crops" }
            for crop in crops {
                option { key: "{crop}", value: "{crop}", "{crop}" }
            }
        }
        select {
            aria_label: "Issue type",
            value: current.issue_type.clone().unwrap_or_else(|| ALL.to_string()),
            onchange: move |evt: FormEvent| {
                let issue = selection(evt.value());
                update_filter(&|f| f.issue_type = issue.clone());
            },
            option { value: ALL, "All issues" }
            for issue in issues {
                option { key: "{issue}", value: "{issue}", "{issue}" }
            }
        }
        input {
            r#type: "search",
            placeholder: "Search titles",
            value: "{current.search}",
            oninput: move |evt: FormEvent| {
                let search = evt.value();
                update_filter(&|f| f.search = search.clone());
            },
        }
    };

    rsx! {
        ListView {
            title: "Advisories".to_string(),
            filters,
            is_empty: total == 0,
            empty: rsx! { p { class: "empty", "No advisories match these filters." } },
            has_more: pager().has_more(total),
            on_load_more: move |_| pager.with_mut(|p| p.load_more()),
            p { class: "muted", "{total} items" }
            if let Some((from, to)) = current.date_range {
                p { class: "muted",
                    "Showing {format_planting_date(from)} to {format_planting_date(to)}"
                }
            }
            for item in visible {
                AdvisoryRow { key: "{item.id}", item, on_save, on_share }
            }
        }
    }
}

#[component]
fn AdvisoryRow(
    item: AdvisoryItem,
    on_save: Option<EventHandler<String>>,
    on_share: Option<EventHandler<String>>,
) -> Element {
    let save_id = item.id.clone();
    let share_id = item.id.clone();
    let date = format_planting_date(item.date);

    rsx! {
        article { class: "advisory",
            header { class: "advisory__header",
                div { class: "advisory__tags",
                    span { class: "tag", "{item.crop}" }
                    span { class: "tag", "{item.issue_type}" }
                    time { class: "muted", "{date}" }
                }
                h3 { "{item.title}" }
            }
            p { "{item.content}" }
            if let Some(media) = item.media.as_ref() {
                a {
                    class: "advisory__media",
                    href: "{media.url}",
                    target: "_blank",
                    rel: "noopener",
                    "{media.kind.label()}"
                }
            }
            footer { class: "advisory__actions",
                button {
                    r#type: "button",
                    class: theme::btn_toggle(item.saved),
                    aria_pressed: "{item.saved}",
                    onclick: move |_| {
                        if let Some(handler) = on_save {
                            handler.call(save_id.clone());
                        }
                    },
                    if item.saved { "Saved" } else { "Save" }
                }
                button {
                    r#type: "button",
                    class: theme::btn_outline(),
                    onclick: move |_| {
                        if let Some(handler) = on_share {
                            handler.call(share_id.clone());
                        }
                    },
                    "Share"
                }
            }
        }
    }
}
