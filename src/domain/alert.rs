use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Urgent,
    Warning,
    Advisory,
    Market,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::Warning => "WARNING",
            Self::Advisory => "ADVISORY",
            Self::Market => "MARKET",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Urgent => "red",
            Self::Warning => "orange",
            Self::Advisory => "blue",
            Self::Market => "green",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Urgent => "⚠️",
            Self::Warning => "🟠",
            Self::Market => "💰",
            Self::Advisory => "ℹ️",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Climate,
    Insurance,
    Market,
    System,
}

impl AlertType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Insurance => "insurance",
            Self::Market => "market",
            Self::System => "system",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

/// Button on an alert card. `id` is echoed back when clicked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertAction {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub variant: ActionVariant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub actions: Vec<AlertAction>,
    #[serde(default)]
    pub acknowledged: bool,
}

/// Marks the alert acknowledged. Returns true only on the first call.
pub fn acknowledge(alerts: &mut [Alert], id: &str) -> bool {
    match alerts.iter_mut().find(|alert| alert.id == id) {
        Some(alert) if !alert.acknowledged => {
            alert.acknowledged = true;
            true
        }
        _ => false,
    }
}

pub fn open_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|alert| !alert.acknowledged).count()
}

/// Most severe first; equal severities keep their feed order.
pub fn by_severity(alerts: &[Alert]) -> Vec<Alert> {
    let mut sorted = alerts.to_vec();
    sorted.sort_by_key(|alert| alert.severity);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, severity: AlertSeverity) -> Alert {
        Alert {
            id: id.to_string(),
            kind: AlertType::Climate,
            severity,
            title: "Flood risk".into(),
            message: "River rising".into(),
            timestamp: "Now".into(),
            details: None,
            actions: Vec::new(),
            acknowledged: false,
        }
    }

    #[test]
    fn severity_presentation() {
        assert_eq!(AlertSeverity::Urgent.label(), "URGENT");
        assert_eq!(AlertSeverity::Urgent.color(), "red");
        assert_eq!(AlertSeverity::Warning.color(), "orange");
        assert_eq!(AlertSeverity::Advisory.icon(), "ℹ️");
        assert_eq!(AlertSeverity::Market.icon(), "💰");
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let mut alerts = vec![alert("a", AlertSeverity::Urgent), alert("b", AlertSeverity::Market)];
        assert_eq!(open_count(&alerts), 2);
        assert!(acknowledge(&mut alerts, "a"));
        assert!(!acknowledge(&mut alerts, "a"));
        assert!(!acknowledge(&mut alerts, "zzz"));
        assert_eq!(open_count(&alerts), 1);
    }

    #[test]
    fn severity_order_is_stable() {
        let alerts = vec![
            alert("m", AlertSeverity::Market),
            alert("w1", AlertSeverity::Warning),
            alert("u", AlertSeverity::Urgent),
            alert("w2", AlertSeverity::Warning),
        ];
        let ids: Vec<_> = by_severity(&alerts).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["u", "w1", "w2", "m"]);
    }

    #[test]
    fn deserialises_with_defaults() {
        let json = r#"{
            "id": "x",
            "type": "insurance",
            "severity": "advisory",
            "title": "Policy renewal",
            "message": "Renew before planting",
            "timestamp": "2h ago"
        }"#;
        let parsed: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, AlertType::Insurance);
        assert!(parsed.actions.is_empty());
        assert!(!parsed.acknowledged);
    }
}
