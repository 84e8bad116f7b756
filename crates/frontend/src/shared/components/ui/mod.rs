pub mod badge;
pub mod select;

pub use badge::{Badge, StrandBadge};
pub use select::Select;
