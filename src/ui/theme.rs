//! Class-name helpers so components agree on the stylesheet vocabulary.

use crate::domain::{
    alert::{ActionVariant, AlertSeverity},
    climate::ThresholdState,
    crop::{HealthBand, IssueSeverity},
    geo::MarkerType,
};

// ============================================
// BUTTONS
// ============================================

pub fn btn_primary() -> &'static str {
    "btn btn-primary"
}

pub fn btn_outline() -> &'static str {
    "btn btn-outline"
}

pub fn btn_toggle(active: bool) -> &'static str {
    if active {
        "btn btn-outline active"
    } else {
        "btn btn-outline"
    }
}

pub fn action_button(variant: ActionVariant) -> &'static str {
    match variant {
        ActionVariant::Primary => "btn",
        ActionVariant::Secondary => "btn btn-outline",
        ActionVariant::Ghost => "btn btn-ghost",
    }
}

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "btn btn-outline nav-link active"
    } else {
        "btn btn-outline nav-link"
    }
}

// ============================================
// CARDS
// ============================================

pub fn alert_card(severity: AlertSeverity, acknowledged: bool) -> String {
    let mut class = format!("alert-card severity-{}", severity.color());
    if acknowledged {
        class.push_str(" acknowledged");
    }
    class
}

pub fn health_chip(band: HealthBand) -> String {
    format!("health-chip {}", band.css())
}

pub fn issue_row(severity: IssueSeverity) -> &'static str {
    match severity {
        IssueSeverity::Low => "issue low",
        IssueSeverity::Medium => "issue medium",
        IssueSeverity::High => "issue high",
    }
}

pub fn climate_panel(state: ThresholdState) -> String {
    format!("panel climate-indicator {}", state.css())
}

pub fn net_value(net: f64) -> &'static str {
    if net >= 0.0 {
        "net positive"
    } else {
        "net negative"
    }
}

// ============================================
// MAP
// ============================================

pub fn map_canvas(layer_id: &str) -> String {
    format!("map-view__canvas layer-{layer_id}")
}

pub fn marker(kind: MarkerType) -> String {
    format!("dashboard-marker marker-{}", kind.label())
}
