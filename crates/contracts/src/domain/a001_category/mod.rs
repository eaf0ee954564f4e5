pub mod aggregate;
pub mod commands;
