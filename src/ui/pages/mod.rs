pub mod advisories;
pub mod dashboard;
pub mod fields;
pub mod markets;
pub mod settings;

pub use advisories::AdvisoriesPage;
pub use dashboard::DashboardPage;
pub use fields::FieldsPage;
pub use markets::MarketsPage;
pub use settings::SettingsPage;
