pub mod dashboard;
pub mod params_panel;
pub mod report_card;

pub use dashboard::ReportsDashboard;
