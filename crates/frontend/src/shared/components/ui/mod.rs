pub mod badge;
pub mod button;
pub mod select;

pub use badge::Badge;
pub use button::Button;
pub use select::Select;
