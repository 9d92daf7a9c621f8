//! Market comparison: net-profit ranking and table sort state.

use serde::{Deserialize, Serialize};

/// A buyer market quoted for the selected crop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    pub id: String,
    pub name: String,
    pub price_per_kg: f64,
    pub distance_km: f64,
    pub transport_cost_per_kg: f64,
    #[serde(default)]
    pub buyer_contact: Option<String>,
    pub last_updated: String,
}

impl MarketEntry {
    /// Price left per kg after transport.
    pub fn net(&self) -> f64 {
        self.price_per_kg - self.transport_cost_per_kg
    }

    fn value_for(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Price => self.price_per_kg,
            SortKey::Distance => self.distance_km,
            SortKey::Net => self.net(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Distance,
    Net,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Price (KES/kg)",
            Self::Distance => "Distance (km)",
            Self::Net => "Net Profit",
        }
    }

    /// Direction a column starts in when first selected.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Distance => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Net,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    /// Arrow to show next to `key`'s header, if it is the active column.
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.key == key).then(|| self.direction.arrow())
    }
}

/// Clicking the active column flips it; any other column starts in its
/// default direction.
pub fn toggle_sort(current: SortSpec, key: SortKey) -> SortSpec {
    if current.key == key {
        SortSpec {
            key,
            direction: current.direction.flipped(),
        }
    } else {
        SortSpec {
            key,
            direction: key.default_direction(),
        }
    }
}

/// Returns the entries ordered by `spec`. Equal keys keep their input order.
pub fn rank(entries: &[MarketEntry], spec: SortSpec) -> Vec<MarketEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| {
        let ord = a.value_for(spec.key).total_cmp(&b.value_for(spec.key));
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    ranked
}

/// Best market by net profit, whatever order the table is displayed in.
pub fn recommend(entries: &[MarketEntry]) -> Option<MarketEntry> {
    rank(entries, SortSpec::default()).into_iter().next()
}
