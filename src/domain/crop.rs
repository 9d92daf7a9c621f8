use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    Flowering,
    Tasseling,
    Harvest,
}

impl GrowthStage {
    /// Fixed share of the season a stage represents, for the progress bar.
    pub fn progress(&self) -> f64 {
        match self {
            Self::Seedling => 0.2,
            Self::Vegetative => 0.45,
            Self::Flowering => 0.65,
            Self::Tasseling => 0.85,
            Self::Harvest => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Seedling => "seedling",
            Self::Vegetative => "vegetative",
            Self::Flowering => "flowering",
            Self::Tasseling => "tasseling",
            Self::Harvest => "harvest",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Warning,
    Critical,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 75 => Self::Good,
            s if s >= 40 => Self::Warning,
            _ => Self::Critical,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl IssueSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropIssue {
    pub id: String,
    pub label: String,
    pub severity: IssueSeverity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CropStatus {
    pub id: String,
    pub crop_type: String,
    pub planting_date: Date,
    pub growth_stage: GrowthStage,
    /// 0-100.
    pub health_score: u8,
    pub issues: Vec<CropIssue>,
    pub acreage: Option<f64>,
}

impl CropStatus {
    pub fn health_band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score)
    }

    pub fn progress(&self) -> f64 {
        self.growth_stage.progress()
    }

    /// Whole days elapsed since planting; negative for future plantings.
    pub fn days_since_planting(&self, today: Date) -> i64 {
        (today - self.planting_date).whole_days()
    }

    pub fn planted_label(&self) -> String {
        format_planting_date(self.planting_date)
    }

    pub fn mark_harvested(&mut self) {
        self.growth_stage = GrowthStage::Harvest;
    }
}

/// `01 Sep 2024`.
pub fn format_planting_date(date: Date) -> String {
    date.format(format_description!("[day] [month repr:short] [year]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn parse_planting_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn maize() -> CropStatus {
        CropStatus {
            id: "c1".into(),
            crop_type: "Maize".into(),
            planting_date: date!(2024 - 09 - 01),
            growth_stage: GrowthStage::Vegetative,
            health_score: 80,
            issues: Vec::new(),
            acreage: Some(2.5),
        }
    }

    #[test]
    fn stage_progress_is_fixed() {
        assert_eq!(GrowthStage::Seedling.progress(), 0.2);
        assert_eq!(GrowthStage::Vegetative.progress(), 0.45);
        assert_eq!(GrowthStage::Flowering.progress(), 0.65);
        assert_eq!(GrowthStage::Tasseling.progress(), 0.85);
        assert_eq!(GrowthStage::Harvest.progress(), 1.0);
    }

    #[test]
    fn health_bands_at_boundaries() {
        assert_eq!(HealthBand::from_score(100), HealthBand::Good);
        assert_eq!(HealthBand::from_score(75), HealthBand::Good);
        assert_eq!(HealthBand::from_score(74), HealthBand::Warning);
        assert_eq!(HealthBand::from_score(40), HealthBand::Warning);
        assert_eq!(HealthBand::from_score(39), HealthBand::Critical);
        assert_eq!(HealthBand::from_score(0), HealthBand::Critical);
    }

    #[test]
    fn days_since_planting_counts_whole_days() {
        let crop = maize();
        assert_eq!(crop.days_since_planting(date!(2024 - 09 - 01)), 0);
        assert_eq!(crop.days_since_planting(date!(2024 - 10 - 01)), 30);
        assert_eq!(crop.days_since_planting(date!(2024 - 08 - 30)), -2);
    }

    #[test]
    fn planting_date_round_trip_through_labels() {
        let parsed = parse_planting_date("2024-09-01").unwrap();
        assert_eq!(parsed, date!(2024 - 09 - 01));
        assert_eq!(format_planting_date(parsed), "01 Sep 2024");
        assert!(parse_planting_date("September first").is_err());
    }

    #[test]
    fn harvesting_completes_progress() {
        let mut crop = maize();
        crop.mark_harvested();
        assert_eq!(crop.progress(), 1.0);
    }
}
