pub mod components;
pub mod icons;
pub mod keyboard;
pub mod list_utils;
pub mod print;
