pub mod api_utils;
pub mod components;
pub mod excel_preview;
pub mod export;
pub mod icons;
pub mod pdf_preview;
