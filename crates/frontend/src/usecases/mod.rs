pub mod common;
pub mod u100_health_probe;
pub mod u101_generate_preview;
pub mod u102_download_report;
