use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    advisory::{toggle_saved, AdvisoryItem},
    alert::{acknowledge, Alert},
    climate::ClimateReading,
    crop::CropStatus,
    field::SavedField,
    geo::{default_layers, GeoPoint, MapMarker},
    market::MarketEntry,
};

/// Markets quoted for one crop, as seen from the farmer's location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketBoard {
    pub crop: String,
    pub current_location: Option<String>,
    pub entries: Vec<MarketEntry>,
}

/// Everything the dashboard shows, as delivered by the data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub alerts: Vec<Alert>,
    pub crops: Vec<CropStatus>,
    pub markets: MarketBoard,
    pub climate: Vec<ClimateReading>,
    pub advisories: Vec<AdvisoryItem>,
    pub markers: Vec<MapMarker>,
    pub map_center: GeoPoint,
    pub map_zoom: f64,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub data: DashboardData,
    pub fields: Vec<SavedField>,
    pub map_layer: String,
    pub advisory_page_size: usize,
    pub loading: bool,
    pub load_error: Option<String>,
    acknowledged: BTreeSet<String>,
    saved: BTreeSet<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data: DashboardData::default(),
            fields: Vec::new(),
            map_layer: default_layer_id(),
            advisory_page_size: default_page_size(),
            loading: true,
            load_error: None,
            acknowledged: BTreeSet::new(),
            saved: BTreeSet::new(),
        }
    }
}

impl AppState {
    /// Installs freshly loaded data, re-applying the user's acknowledgements
    /// and saved advisories.
    pub fn apply_data(&mut self, data: DashboardData) {
        self.data = data;
        for alert in &self.data.alerts {
            if alert.acknowledged {
                self.acknowledged.insert(alert.id.clone());
            }
        }
        for advisory in &self.data.advisories {
            if advisory.saved {
                self.saved.insert(advisory.id.clone());
            }
        }
        self.mark_user_flags();
        self.loading = false;
        self.load_error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.load_error = Some(message.into());
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.acknowledged.extend(persisted.acknowledged_alerts);
        self.saved.extend(persisted.saved_advisories);
        self.mark_user_flags();
        self.fields = persisted.fields;
        if default_layers().iter().any(|layer| layer.id == persisted.map_layer) {
            self.map_layer = persisted.map_layer;
        }
        self.advisory_page_size = persisted.advisory_page_size.max(1);
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            acknowledged_alerts: self.acknowledged.iter().cloned().collect(),
            saved_advisories: self.saved.iter().cloned().collect(),
            fields: self.fields.clone(),
            map_layer: self.map_layer.clone(),
            advisory_page_size: self.advisory_page_size,
        }
    }

    /// Returns `true` when the alert was open before this call.
    pub fn acknowledge_alert(&mut self, id: &str) -> bool {
        let changed = acknowledge(&mut self.data.alerts, id);
        if changed {
            self.acknowledged.insert(id.to_string());
        }
        changed
    }

    /// Flips the saved flag and returns its new value.
    pub fn toggle_saved_advisory(&mut self, id: &str) -> Option<bool> {
        let saved = toggle_saved(&mut self.data.advisories, id)?;
        if saved {
            self.saved.insert(id.to_string());
        } else {
            self.saved.remove(id);
        }
        Some(saved)
    }

    /// Stores `field`, replacing a record with the same id. Returns `true`
    /// when the field was new.
    pub fn upsert_field(&mut self, field: SavedField) -> bool {
        match self.fields.iter_mut().find(|kept| kept.id == field.id) {
            Some(kept) => {
                *kept = field;
                false
            }
            None => {
                self.fields.push(field);
                true
            }
        }
    }

    /// Drops every user-owned record, keeping the loaded data set.
    pub fn reset_user_state(&mut self) {
        self.acknowledged.clear();
        self.saved.clear();
        self.fields.clear();
        self.map_layer = default_layer_id();
        self.advisory_page_size = default_page_size();
        for alert in &mut self.data.alerts {
            alert.acknowledged = false;
        }
        for advisory in &mut self.data.advisories {
            advisory.saved = false;
        }
    }

    fn mark_user_flags(&mut self) {
        for alert in &mut self.data.alerts {
            alert.acknowledged |= self.acknowledged.contains(&alert.id);
        }
        for advisory in &mut self.data.advisories {
            advisory.saved |= self.saved.contains(&advisory.id);
        }
    }
}

fn default_layer_id() -> String {
    "light".to_string()
}

fn default_page_size() -> usize {
    5
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub acknowledged_alerts: Vec<String>,
    #[serde(default)]
    pub saved_advisories: Vec<String>,
    #[serde(default)]
    pub fields: Vec<SavedField>,
    #[serde(default = "default_layer_id")]
    pub map_layer: String,
    #[serde(default = "default_page_size")]
    pub advisory_page_size: usize,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            acknowledged_alerts: Vec::new(),
            saved_advisories: Vec::new(),
            fields: Vec::new(),
            map_layer: default_layer_id(),
            advisory_page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::{AlertSeverity, AlertType};
    use time::macros::date;

    fn data() -> DashboardData {
        DashboardData {
            alerts: vec![Alert {
                id: "a1".into(),
                kind: AlertType::Climate,
                severity: AlertSeverity::Urgent,
                title: "Flood risk".into(),
                message: "River rising".into(),
                timestamp: "Now".into(),
                details: None,
                actions: Vec::new(),
                acknowledged: false,
            }],
            advisories: vec![AdvisoryItem {
                id: "adv1".into(),
                crop: "Maize".into(),
                issue_type: "Pests".into(),
                date: date!(2024 - 09 - 02),
                title: "Armyworm".into(),
                content: "Scout weekly".into(),
                media: None,
                saved: false,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn persisted_flags_survive_data_reload() {
        let mut state = AppState::default();
        state.apply_data(data());
        state.apply_persisted(PersistedState {
            acknowledged_alerts: vec!["a1".into()],
            saved_advisories: vec!["adv1".into()],
            ..Default::default()
        });
        assert!(state.data.alerts[0].acknowledged);
        assert!(state.data.advisories[0].saved);

        state.apply_data(data());
        assert!(state.data.alerts[0].acknowledged);
        assert!(state.data.advisories[0].saved);
        assert!(!state.loading);
    }

    #[test]
    fn persisted_flags_apply_to_later_load() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            acknowledged_alerts: vec!["a1".into()],
            ..Default::default()
        });
        state.apply_data(data());
        assert!(state.data.alerts[0].acknowledged);
        assert!(!state.data.advisories[0].saved);
    }

    #[test]
    fn user_actions_are_persisted() {
        let mut state = AppState::default();
        state.apply_data(data());
        assert!(state.acknowledge_alert("a1"));
        assert!(!state.acknowledge_alert("a1"));
        assert_eq!(state.toggle_saved_advisory("adv1"), Some(true));
        assert_eq!(state.toggle_saved_advisory("missing"), None);

        let persisted = state.to_persisted();
        assert_eq!(persisted.acknowledged_alerts, vec!["a1".to_string()]);
        assert_eq!(persisted.saved_advisories, vec!["adv1".to_string()]);

        assert_eq!(state.toggle_saved_advisory("adv1"), Some(false));
        assert!(state.to_persisted().saved_advisories.is_empty());

        state.reset_user_state();
        assert!(!state.data.alerts[0].acknowledged);
        assert!(state.to_persisted().acknowledged_alerts.is_empty());
    }

    #[test]
    fn resubmitting_a_draft_keeps_one_field() {
        use crate::domain::{FieldDraft, FormState};

        let path = vec![GeoPoint::new(36.80, -1.29), GeoPoint::new(36.90, -1.21)];
        let mut form = FormState::new(FieldDraft {
            name: "North plot".into(),
            ..FieldDraft::for_path("field-1".into(), path)
        });
        let mut state = AppState::default();

        let first = form.begin_submit().unwrap();
        assert!(state.upsert_field(first.into_field("2024-09-01".into())));
        form.finish(Err("disk full"));

        form.values.name = "North plot A".into();
        let retry = form.begin_submit().unwrap();
        assert!(!state.upsert_field(retry.into_field("2024-09-01".into())));

        assert_eq!(state.fields.len(), 1);
        assert_eq!(state.fields[0].name, "North plot A");
        assert_eq!(state.to_persisted().fields.len(), 1);
    }

    #[test]
    fn unknown_layer_falls_back() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            map_layer: "neon".into(),
            ..Default::default()
        });
        assert_eq!(state.map_layer, "light");

        state.apply_persisted(PersistedState {
            map_layer: "terrain".into(),
            ..Default::default()
        });
        assert_eq!(state.to_persisted().map_layer, "terrain");
    }

    #[test]
    fn empty_json_uses_defaults() {
        let parsed: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PersistedState::default());
    }
}
