use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs and form buffers
    fn as_string(&self) -> String;

    /// Parse an id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_round_trip_through_string() {
        assert_eq!(<i64 as AggregateId>::from_string(" 42 "), Ok(42));
        assert_eq!(AggregateId::as_string(&42_i64), "42");
    }

    #[test]
    fn test_i64_rejects_garbage() {
        let err = <i64 as AggregateId>::from_string("abc").unwrap_err();
        assert!(err.starts_with("Invalid i64"));
    }
}
