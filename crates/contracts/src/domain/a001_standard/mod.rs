pub mod aggregate;
pub mod code;
pub mod sample;

pub use aggregate::{CardKey, StandardRecord};
pub use code::ProgressionKey;
pub use sample::fallback_records;
