use dioxus::prelude::*;

use crate::{
    domain::{
        market::{rank, recommend, toggle_sort},
        MarketBoard, SortKey, SortSpec,
    },
    ui::theme,
};

/// Numeric columns between the market name and the update label.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Column {
    Sorted(SortKey),
    Transport,
}

impl Column {
    fn title(self) -> &'static str {
        match self {
            Column::Sorted(key) => key.label(),
            Column::Transport => "Transport (KES/kg)",
        }
    }
}

const COLUMNS: [Column; 4] = [
    Column::Sorted(SortKey::Price),
    Column::Sorted(SortKey::Distance),
    Column::Transport,
    Column::Sorted(SortKey::Net),
];

#[component]
pub fn MarketComparisonTable(
    board: MarketBoard,
    on_contact_buyer: Option<EventHandler<String>>,
) -> Element {
    let mut sort = use_signal(SortSpec::default);

    let spec = sort();
    let rows = rank(&board.entries, spec);
    // Highlight follows net profit, not the column the user sorted by.
    let recommended = recommend(&board.entries);
    let recommended_id = recommended.as_ref().map(|entry| entry.id.clone());

    rsx! {
        section { class: "panel market-table",
            header { class: "market-table__header",
                h2 { "Market comparison · {board.crop}" }
                if let Some(location) = board.current_location.as_ref() {
                    p { class: "muted", "From {location}" }
                }
            }

            if let Some(best) = recommended.as_ref() {
                div { class: "market-table__recommendation",
                    strong { "Recommended: sell at {best.name}" }
                    span { " · net KES {best.net():.2}/kg" }
                }
            }

            if rows.is_empty() {
                p { class: "empty", "No market quotes for {board.crop} yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Market" }
                            for column in COLUMNS {
                                {match column {
                                    Column::Sorted(key) => rsx! {
                                        th {
                                            button {
                                                r#type: "button",
                                                class: "sort-header",
                                                onclick: move |_| sort.set(toggle_sort(sort(), key)),
                                                "{column.title()}"
                                                if let Some(arrow) = spec.indicator(key) {
                                                    span { class: "sort-indicator", " {arrow}" }
                                                }
                                            }
                                        }
                                    },
                                    Column::Transport => rsx! {
                                        th { "{column.title()}" }
                                    },
                                }}
                            }
                            th { "Updated" }
                            th {}
                        }
                    }
                    tbody {
                        for entry in rows {
                            tr {
                                key: "{entry.id}",
                                class: if recommended_id.as_deref() == Some(entry.id.as_str()) { "recommended" } else { "" },
                                td { "{entry.name}" }
                                td { "{entry.price_per_kg:.2}" }
                                td { "{entry.distance_km:.1}" }
                                td { "{entry.transport_cost_per_kg:.2}" }
                                td { class: theme::net_value(entry.net()), "{entry.net():.2}" }
                                td { class: "muted", "{entry.last_updated}" }
                                td {
                                    button {
                                        r#type: "button",
                                        class: theme::btn_outline(),
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |_| {
                                                if let Some(handler) = on_contact_buyer {
                                                    handler.call(id.clone());
                                                }
                                            }
                                        },
                                        "Contact Buyer"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_cost_sits_before_net_profit() {
        let titles: Vec<&str> = COLUMNS.iter().map(|column| column.title()).collect();
        assert_eq!(
            titles,
            vec!["Price (KES/kg)", "Distance (km)", "Transport (KES/kg)", "Net Profit"]
        );
    }
}
