//! Bundled demo dataset. Decodes `assets/seed.json` into domain types.

use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::{
    domain::{
        advisory::{Media, MediaType},
        climate::ClimateReading,
        crop::{parse_planting_date, CropIssue, GrowthStage},
        AdvisoryItem, Alert, CropStatus, DashboardData, GeoPoint, MapMarker, MarketBoard,
        MarketEntry,
    },
    util::assets,
};

const SEED_PATH: &str = "/assets/seed.json";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("embedded asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("seed data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{record}: invalid date {value:?}")]
    InvalidDate {
        record: String,
        value: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("{record}: invalid media URL {value:?}")]
    InvalidUrl {
        record: String,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Deserialize)]
struct SeedFile {
    map: SeedMap,
    #[serde(default)]
    alerts: Vec<Alert>,
    #[serde(default)]
    crops: Vec<SeedCrop>,
    markets: SeedMarkets,
    #[serde(default)]
    climate: Vec<ClimateReading>,
    #[serde(default)]
    advisories: Vec<SeedAdvisory>,
}

#[derive(Deserialize)]
struct SeedMap {
    center: GeoPoint,
    zoom: f64,
    #[serde(default)]
    markers: Vec<MapMarker>,
}

#[derive(Deserialize)]
struct SeedCrop {
    id: String,
    crop_type: String,
    planting_date: String,
    growth_stage: GrowthStage,
    health_score: u8,
    #[serde(default)]
    issues: Vec<CropIssue>,
    #[serde(default)]
    acreage: Option<f64>,
}

#[derive(Deserialize)]
struct SeedMarkets {
    crop: String,
    #[serde(default)]
    current_location: Option<String>,
    entries: Vec<MarketEntry>,
}

#[derive(Deserialize)]
struct SeedAdvisory {
    id: String,
    crop: String,
    issue_type: String,
    date: String,
    title: String,
    content: String,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    media_url: Option<String>,
    #[serde(default)]
    saved: bool,
}

impl TryFrom<SeedCrop> for CropStatus {
    type Error = SeedError;

    fn try_from(raw: SeedCrop) -> Result<Self, Self::Error> {
        let planting_date =
            parse_planting_date(&raw.planting_date).map_err(|source| SeedError::InvalidDate {
                record: format!("crop {}", raw.id),
                value: raw.planting_date.clone(),
                source,
            })?;
        Ok(CropStatus {
            id: raw.id,
            crop_type: raw.crop_type,
            planting_date,
            growth_stage: raw.growth_stage,
            health_score: raw.health_score.min(100),
            issues: raw.issues,
            acreage: raw.acreage,
        })
    }
}

impl TryFrom<SeedAdvisory> for AdvisoryItem {
    type Error = SeedError;

    fn try_from(raw: SeedAdvisory) -> Result<Self, Self::Error> {
        let record = format!("advisory {}", raw.id);
        let date = parse_planting_date(&raw.date).map_err(|source| SeedError::InvalidDate {
            record: record.clone(),
            value: raw.date.clone(),
            source,
        })?;

        let media = match (raw.media_type.as_deref().and_then(MediaType::parse), raw.media_url) {
            (Some(kind), Some(value)) => {
                let url = Url::parse(&value).map_err(|source| SeedError::InvalidUrl {
                    record,
                    value: value.clone(),
                    source,
                })?;
                Some(Media { kind, url })
            }
            _ => None,
        };

        Ok(AdvisoryItem {
            id: raw.id,
            crop: raw.crop,
            issue_type: raw.issue_type,
            date,
            title: raw.title,
            content: raw.content,
            media,
            saved: raw.saved,
        })
    }
}

pub fn parse_dashboard(json: &str) -> Result<DashboardData, SeedError> {
    let seed: SeedFile = serde_json::from_str(json)?;

    let crops = seed
        .crops
        .into_iter()
        .map(CropStatus::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let advisories = seed
        .advisories
        .into_iter()
        .map(AdvisoryItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DashboardData {
        alerts: seed.alerts,
        crops,
        markets: MarketBoard {
            crop: seed.markets.crop,
            current_location: seed.markets.current_location,
            entries: seed.markets.entries,
        },
        climate: seed.climate,
        advisories,
        markers: seed.map.markers,
        map_center: seed.map.center,
        map_zoom: seed.map.zoom,
    })
}

/// Loads the dataset bundled with the binary.
pub async fn load_dashboard() -> Result<DashboardData, SeedError> {
    let json = assets::load_text(SEED_PATH).ok_or(SeedError::MissingAsset(SEED_PATH))?;
    let data = parse_dashboard(&json)?;
    info!(
        alerts = data.alerts.len(),
        crops = data.crops.len(),
        markets = data.markets.entries.len(),
        advisories = data.advisories.len(),
        "dashboard data loaded"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "map": { "center": [36.82, -1.29], "zoom": 9 },
        "markets": { "crop": "Beans", "entries": [] }
    }"#;

    #[test]
    fn bundled_seed_parses() {
        let json = assets::load_text(SEED_PATH).expect("seed bundled");
        let data = parse_dashboard(&json).expect("valid seed");
        assert!(!data.alerts.is_empty());
        assert!(!data.crops.is_empty());
        assert!(!data.markets.entries.is_empty());
        assert!(!data.climate.is_empty());
        assert!(!data.advisories.is_empty());
        assert!(!data.markers.is_empty());
    }

    #[test]
    fn minimal_seed_defaults_lists() {
        let data = parse_dashboard(MINIMAL).unwrap();
        assert!(data.alerts.is_empty());
        assert_eq!(data.map_center, GeoPoint::new(36.82, -1.29));
        assert_eq!(data.markets.crop, "Beans");
    }

    #[test]
    fn bad_dates_are_reported_with_record() {
        let json = r#"{
            "map": { "center": [0, 0], "zoom": 3 },
            "markets": { "crop": "Beans", "entries": [] },
            "crops": [{
                "id": "c9", "crop_type": "Maize", "planting_date": "01/09/2024",
                "growth_stage": "seedling", "health_score": 50
            }]
        }"#;
        let err = parse_dashboard(json).unwrap_err();
        assert!(matches!(err, SeedError::InvalidDate { .. }));
        assert!(err.to_string().contains("crop c9"));
    }

    #[test]
    fn media_requires_type_and_url() {
        let json = r#"{
            "map": { "center": [0, 0], "zoom": 3 },
            "markets": { "crop": "Beans", "entries": [] },
            "advisories": [
                { "id": "a", "crop": "Maize", "issue_type": "Pests", "date": "2024-09-01",
                  "title": "T", "content": "C", "media_type": "video",
                  "media_url": "https://example.org/clip" },
                { "id": "b", "crop": "Maize", "issue_type": "Pests", "date": "2024-09-01",
                  "title": "T", "content": "C", "media_type": "video" }
            ]
        }"#;
        let data = parse_dashboard(json).unwrap();
        assert_eq!(data.advisories[0].media.as_ref().map(|m| m.kind), Some(MediaType::Video));
        assert!(data.advisories[1].media.is_none());
    }
}
