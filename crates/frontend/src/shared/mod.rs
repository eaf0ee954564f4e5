pub mod api_utils;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod notify;
