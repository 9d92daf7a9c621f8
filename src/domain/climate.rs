use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Stable => "➖",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdState {
    Normal,
    Warning,
}

impl ThresholdState {
    pub fn css(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClimateReading {
    pub metric_type: String,
    pub current_value: f64,
    #[serde(default)]
    pub unit: String,
    pub threshold: f64,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

impl ClimateReading {
    pub fn gauge_percent(&self) -> u8 {
        gauge_percent(self.current_value, self.threshold)
    }

    pub fn threshold_state(&self) -> ThresholdState {
        threshold_state(self.current_value, self.threshold)
    }

    pub fn first_crossing(&self) -> Option<&HistoryPoint> {
        first_crossing(&self.history, self.threshold)
    }
}

/// Gauge fill: current as a percentage of threshold, capped at 100.
///
/// A non-positive threshold reads as full once reached and empty otherwise.
pub fn gauge_percent(current: f64, threshold: f64) -> u8 {
    if threshold <= 0.0 || !threshold.is_finite() {
        return if current >= threshold { 100 } else { 0 };
    }
    let percent = (current / threshold * 100.0).round();
    if percent.is_nan() {
        0
    } else {
        percent.clamp(0.0, 100.0) as u8
    }
}

pub fn threshold_state(current: f64, threshold: f64) -> ThresholdState {
    if current >= threshold {
        ThresholdState::Warning
    } else {
        ThresholdState::Normal
    }
}

/// First history point at or above the threshold that follows one below it.
pub fn first_crossing(history: &[HistoryPoint], threshold: f64) -> Option<&HistoryPoint> {
    history
        .windows(2)
        .find(|pair| pair[0].value < threshold && pair[1].value >= threshold)
        .map(|pair| &pair[1])
}
