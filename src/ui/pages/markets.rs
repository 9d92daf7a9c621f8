use dioxus::prelude::*;

use crate::{
    app::DataReload,
    domain::AppState,
    ui::{
        clipboard::copy_text_to_clipboard,
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            MarketComparisonTable,
        },
        templates::Page,
    },
};

#[component]
pub fn MarketsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let reload = use_context::<DataReload>();

    let (loading, load_error, board) =
        state.with(|st| (st.loading, st.load_error.clone(), st.data.markets.clone()));
    let subtitle = match board.current_location.as_ref() {
        Some(location) => format!("Net price per kg after transport from {location}"),
        None => "Net price per kg after transport".to_string(),
    };

    let on_contact_buyer = move |id: String| {
        let contact = state.with(|st| {
            st.data
                .markets
                .entries
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| (entry.name.clone(), entry.buyer_contact.clone()))
        });
        match contact {
            Some((name, Some(contact))) => {
                spawn(async move {
                    if copy_text_to_clipboard(&contact).await {
                        push_toast(toasts, ToastKind::Success, format!("Copied {name} buyer contact: {contact}"));
                    } else {
                        push_toast(toasts, ToastKind::Warning, format!("Could not copy. {name} buyer contact: {contact}"));
                    }
                });
            }
            Some((name, None)) => {
                push_toast(toasts, ToastKind::Warning, format!("No buyer contact listed for {name}."));
            }
            None => tracing::warn!(market = %id, "contact requested for unknown market"),
        }
    };

    rsx! {
        Page {
            title: "Markets".to_string(),
            subtitle,
            is_loading: loading,
            error: load_error,
            on_retry: move |_| reload.request(),
            MarketComparisonTable { board, on_contact_buyer }
        }
    }
}
