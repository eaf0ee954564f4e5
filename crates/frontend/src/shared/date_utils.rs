//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Utc};

/// Placeholder for missing values in tables
pub const EMPTY_CELL: &str = "-";

/// Format a UTC timestamp as DD/MM/YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Same as [`format_datetime`] but renders `-` for absent values
pub fn format_optional_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}
