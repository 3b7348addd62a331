pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod grid;
pub mod params;
pub mod preview;
pub mod state;

pub use catalog::{catalog, find_report};
pub use descriptor::{ReportDescriptor, ReportRequest};
pub use error::ReportError;
pub use grid::SpreadsheetGrid;
pub use params::ReportParams;
pub use preview::{PreviewContent, PreviewResult};
pub use state::DashboardState;
