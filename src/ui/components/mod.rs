pub mod advisory_feed;
pub mod alert_card;
pub mod climate_indicator;
pub mod crop_status;
pub mod map_view;
pub mod market_table;
pub mod toast;

pub use advisory_feed::AdvisoryFeed;
pub use alert_card::AlertCard;
pub use climate_indicator::ClimateIndicator;
pub use crop_status::CropStatusWidget;
pub use map_view::MapView;
pub use market_table::MarketComparisonTable;
