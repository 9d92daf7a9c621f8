use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{alert::open_count, AppState},
    ui::theme,
    util::version::APP_NAME,
};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let open_alerts = state.with(|st| open_count(&st.data.alerts));
    let location = state.with(|st| st.data.markets.current_location.clone());

    let links = [
        (Route::Dashboard {}, "Overview"),
        (Route::Markets {}, "Markets"),
        (Route::Advisories {}, "Advisories"),
        (Route::Fields {}, "Fields"),
        (Route::Settings {}, "Settings"),
    ];

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div {
                    h1 { "🌾 {APP_NAME}" }
                    if let Some(location) = location {
                        p { class: "muted", "{location}" }
                    }
                }
                nav {
                    for (route, label) in links {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: theme::nav_link(route == current_route),
                            onclick: {
                                let route = route.clone();
                                move |_| {
                                    nav.push(route.clone());
                                }
                            },
                            "{label}"
                            if matches!(route, Route::Dashboard {}) && open_alerts > 0 {
                                span { class: "nav-badge", " {open_alerts}" }
                            }
                        }
                    }
                }
            }
            main { class: "shell-main", {children} }
        }
    }
}
