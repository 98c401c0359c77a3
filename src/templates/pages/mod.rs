pub mod dashboard;
pub mod property;

pub use dashboard::{dashboard_page, DashboardVm, ReviewRow};
pub use property::{property_page, PropertyVm};
