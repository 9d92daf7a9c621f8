use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::AppState,
    infra::seed,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AdvisoriesPage, DashboardPage, FieldsPage, MarketsPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/markets")]
    Markets {},
    #[route("/advisories")]
    Advisories {},
    #[route("/fields")]
    Fields {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let reload = DataReload(use_signal(|| 0u32));
    use_context_provider(|| reload);

    let _dashboard = use_resource(move || async move {
        let attempt = (reload.0)();
        load_dashboard(state, toasts, attempt).await
    });

    rsx! {
        document::Style { "{assets::dashboard_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Handle for re-running the dashboard data load, e.g. from an error panel.
#[derive(Clone, Copy)]
pub struct DataReload(Signal<u32>);

impl DataReload {
    pub fn request(self) {
        let DataReload(mut counter) = self;
        counter += 1;
    }
}

/// Writes the user-owned part of the state to disk.
pub fn save_user_state(state: &Signal<AppState>) -> Result<(), PersistSaveError> {
    let snapshot = state.with(|st| st.to_persisted());
    save_persisted_state(&snapshot)
}

/// Like [`save_user_state`], for callers that only need the failure logged.
pub fn persist_user_state(state: &Signal<AppState>) {
    if let Err(err) = save_user_state(state) {
        warn!(%err, "failed to persist user state");
    }
}

async fn load_dashboard(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    attempt: u32,
) {
    if attempt > 0 {
        info!(attempt, "reloading dashboard data");
        state.with_mut(|st| st.loading = true);
    }
    match seed::load_dashboard().await {
        Ok(data) => state.with_mut(|st| st.apply_data(data)),
        Err(err) => {
            error!(%err, "failed to load dashboard data");
            state.with_mut(|st| st.fail_load(err.to_string()));
            push_toast(toasts, ToastKind::Error, format!("Failed to load dashboard data: {err}"));
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Markets() -> Element {
    rsx! { Shell { MarketsPage {} } }
}

#[component]
pub fn Advisories() -> Element {
    rsx! { Shell { AdvisoriesPage {} } }
}

#[component]
pub fn Fields() -> Element {
    rsx! { Shell { FieldsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
