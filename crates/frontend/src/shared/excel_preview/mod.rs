pub mod package;
pub mod parser;
pub mod widget;

pub use parser::{decode, decode_and_report, DecodedSheet};
pub use widget::ExcelPreview;
