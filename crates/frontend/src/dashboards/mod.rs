pub mod d100_reports;

pub use d100_reports::ui::ReportsDashboard;
