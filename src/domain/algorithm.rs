//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants produce identical grids; they only differ in how the
//! work is scheduled.

use serde::{Deserialize, Serialize};

/// Available stepping strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_deserializes_lowercase() {
        let algo: Algorithm = serde_json::from_str("\"parallel\"").unwrap();
        assert_eq!(algo, Algorithm::Parallel);
    }
}
