//! Advisory feed: filtering by crop, issue type, title search and date.

use std::collections::HashSet;

use time::Date;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Text,
}

impl MediaType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Text => "TEXT",
        }
    }
}

/// Attached resource; only present when both a type and a URL are known.
#[derive(Clone, Debug, PartialEq)]
pub struct Media {
    pub kind: MediaType,
    pub url: Url,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdvisoryItem {
    pub id: String,
    pub crop: String,
    pub issue_type: String,
    pub date: Date,
    pub title: String,
    pub content: String,
    pub media: Option<Media>,
    pub saved: bool,
}

impl AdvisoryItem {
    pub fn share_text(&self) -> String {
        match &self.media {
            Some(media) => format!("{} ({} · {}) {}", self.title, self.crop, self.issue_type, media.url),
            None => format!("{} ({} · {})", self.title, self.crop, self.issue_type),
        }
    }
}

/// Option lists and date window supplied by the page hosting the feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterPresets {
    pub crops: Option<Vec<String>>,
    pub issue_types: Option<Vec<String>>,
    pub date_range: Option<(Date, Date)>,
}

/// Current selection in the feed header. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvisoryFilter {
    pub crop: Option<String>,
    pub issue_type: Option<String>,
    pub search: String,
    pub date_range: Option<(Date, Date)>,
}

impl AdvisoryFilter {
    pub fn matches(&self, item: &AdvisoryItem) -> bool {
        if let Some(crop) = &self.crop {
            if &item.crop != crop {
                return false;
            }
        }
        if let Some(issue) = &self.issue_type {
            if &item.issue_type != issue {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !item.title.to_lowercase().contains(&needle) {
            return false;
        }
        if let Some((from, to)) = self.date_range {
            if item.date < from || item.date > to {
                return false;
            }
        }
        true
    }
}

pub fn filter_advisories<'a>(
    items: &'a [AdvisoryItem],
    filter: &AdvisoryFilter,
) -> Vec<&'a AdvisoryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub fn crop_options(items: &[AdvisoryItem], presets: &FilterPresets) -> Vec<String> {
    presets
        .crops
        .clone()
        .unwrap_or_else(|| distinct_in_order(items.iter().map(|item| item.crop.as_str())))
}

pub fn issue_options(items: &[AdvisoryItem], presets: &FilterPresets) -> Vec<String> {
    presets
        .issue_types
        .clone()
        .unwrap_or_else(|| distinct_in_order(items.iter().map(|item| item.issue_type.as_str())))
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Flips the saved flag; returns the new value, or `None` for unknown ids.
pub fn toggle_saved(items: &mut [AdvisoryItem], id: &str) -> Option<bool> {
    let item = items.iter_mut().find(|item| item.id == id)?;
    item.saved = !item.saved;
    Some(item.saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn advisory(id: &str, crop: &str, issue: &str, title: &str, date: Date) -> AdvisoryItem {
        AdvisoryItem {
            id: id.to_string(),
            crop: crop.to_string(),
            issue_type: issue.to_string(),
            date,
            title: title.to_string(),
            content: "Details".to_string(),
            media: None,
            saved: false,
        }
    }

    fn feed() -> Vec<AdvisoryItem> {
        vec![
            advisory("1", "Maize", "Pests", "Fall armyworm scouting", date!(2024 - 09 - 02)),
            advisory("2", "Beans", "Disease", "Bean rust control", date!(2024 - 09 - 10)),
            advisory("3", "Maize", "Disease", "Maize lethal necrosis", date!(2024 - 10 - 01)),
            advisory("4", "Maize", "Pests", "Stalk borer traps", date!(2024 - 10 - 12)),
        ]
    }

    fn ids(items: &[&AdvisoryItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let items = feed();
        assert_eq!(filter_advisories(&items, &AdvisoryFilter::default()).len(), 4);
    }

    #[test]
    fn filters_combine() {
        let items = feed();
        let filter = AdvisoryFilter {
            crop: Some("Maize".into()),
            issue_type: Some("Pests".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_advisories(&items, &filter)), vec!["1", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let items = feed();
        let filter = AdvisoryFilter {
            search: "RUST".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_advisories(&items, &filter)), vec!["2"]);

        let content_only = AdvisoryFilter {
            search: "details".into(),
            ..Default::default()
        };
        assert!(filter_advisories(&items, &content_only).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let items = feed();
        let filter = AdvisoryFilter {
            date_range: Some((date!(2024 - 09 - 10), date!(2024 - 10 - 01))),
            ..Default::default()
        };
        assert_eq!(ids(&filter_advisories(&items, &filter)), vec!["2", "3"]);
    }

    #[test]
    fn options_are_distinct_in_first_seen_order() {
        let items = feed();
        let presets = FilterPresets::default();
        assert_eq!(crop_options(&items, &presets), vec!["Maize", "Beans"]);
        assert_eq!(issue_options(&items, &presets), vec!["Pests", "Disease"]);
    }

    #[test]
    fn presets_override_derived_options() {
        let items = feed();
        let presets = FilterPresets {
            crops: Some(vec!["Sorghum".into()]),
            ..Default::default()
        };
        assert_eq!(crop_options(&items, &presets), vec!["Sorghum"]);
        assert_eq!(issue_options(&items, &presets), vec!["Pests", "Disease"]);
    }

    #[test]
    fn toggling_saved_flag() {
        let mut items = feed();
        assert_eq!(toggle_saved(&mut items, "2"), Some(true));
        assert_eq!(toggle_saved(&mut items, "2"), Some(false));
        assert_eq!(toggle_saved(&mut items, "missing"), None);
    }

    #[test]
    fn media_type_parsing() {
        assert_eq!(MediaType::parse("Video"), Some(MediaType::Video));
        assert_eq!(MediaType::parse("pdf"), None);
    }
}
