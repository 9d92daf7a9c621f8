//! Dashboard domain logic: pure, synchronous and free of UI types.

pub mod advisory;
pub mod alert;
pub mod app_state;
pub mod climate;
pub mod crop;
pub mod field;
pub mod form;
pub mod geo;
pub mod market;
pub mod paging;

pub use advisory::{AdvisoryFilter, AdvisoryItem, FilterPresets};
pub use alert::Alert;
pub use app_state::{AppState, DashboardData, MarketBoard, PersistedState};
pub use climate::ClimateReading;
pub use crop::CropStatus;
pub use field::{FieldDraft, SavedField};
pub use form::FormState;
pub use geo::{CompletedPath, DrawCommand, DrawingSession, GeoPoint, MapLayer, MapMarker, MapViewport};
pub use market::{MarketEntry, SortKey, SortSpec};
pub use paging::Paginator;
