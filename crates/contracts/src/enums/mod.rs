pub mod backend_status;
pub mod input_kind;
pub mod output_kind;

pub use backend_status::BackendStatus;
pub use input_kind::InputKind;
pub use output_kind::OutputKind;
