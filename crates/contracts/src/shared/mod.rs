pub mod catalog;
pub mod config;
pub mod expansion;
pub mod view_state;
