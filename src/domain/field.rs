use serde::{Deserialize, Serialize};

use super::{
    form::{FieldErrors, Validate},
    geo::{total_distance_km, GeoPoint},
};

const MAX_NAME_LEN: usize = 60;

/// A drawn path the user named and kept, e.g. a plot boundary or a route to
/// market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub crop: Option<String>,
    pub path: Vec<GeoPoint>,
    pub created_on: String,
}

impl SavedField {
    pub fn distance_km(&self) -> f64 {
        total_distance_km(&self.path)
    }
}

/// Form values for naming a completed path. The record id is fixed when the
/// draft opens, so resubmitting after a failed write updates one record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDraft {
    pub id: String,
    pub name: String,
    pub crop: String,
    pub path: Vec<GeoPoint>,
}

impl FieldDraft {
    pub fn for_path(id: String, path: Vec<GeoPoint>) -> Self {
        Self {
            id,
            path,
            ..Default::default()
        }
    }

    pub fn into_field(self, created_on: String) -> SavedField {
        let crop = self.crop.trim();
        SavedField {
            id: self.id,
            name: self.name.trim().to_string(),
            crop: (!crop.is_empty()).then(|| crop.to_string()),
            path: self.path,
            created_on,
        }
    }
}

impl Validate for FieldDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Give the field a name.".to_string());
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.insert("name", format!("Keep the name under {MAX_NAME_LEN} characters."));
        }
        if self.path.len() < 2 {
            errors.insert("path", "Draw at least two points.".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Vec<GeoPoint> {
        vec![GeoPoint::new(36.80, -1.29), GeoPoint::new(36.90, -1.21)]
    }

    #[test]
    fn draft_requires_name_and_two_points() {
        let errors = FieldDraft::default().validate().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("path"));

        let draft = FieldDraft {
            id: "f1".into(),
            name: "  North plot ".into(),
            crop: String::new(),
            path: path(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn long_names_are_rejected() {
        let draft = FieldDraft {
            id: "f1".into(),
            name: "x".repeat(61),
            crop: String::new(),
            path: path(),
        };
        assert!(draft.validate().unwrap_err().contains_key("name"));
    }

    #[test]
    fn into_field_trims_and_drops_blank_crop() {
        let draft = FieldDraft {
            id: "f1".into(),
            name: "  North plot ".into(),
            crop: "   ".into(),
            path: path(),
        };
        let field = draft.into_field("2024-09-01".into());
        assert_eq!(field.id, "f1");
        assert_eq!(field.name, "North plot");
        assert_eq!(field.crop, None);
        assert!((field.distance_km() - 14.4).abs() < 1.0);
    }
}
