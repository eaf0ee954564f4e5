pub mod config;
pub mod remote_error;
