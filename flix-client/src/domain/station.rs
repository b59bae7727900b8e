//! Stations attached to autocomplete results.

use serde::Serialize;

/// A bus or train station belonging to a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Identifier from the previous generation of the API.
    pub legacy_id: i64,
    /// Importance rank within the city. Lower is more important.
    pub importance_order: i64,
    /// `true` for a train station, `false` for a bus stop.
    pub is_train: bool,
}

impl Station {
    /// Human-readable kind, for display.
    pub fn kind(&self) -> &'static str {
        if self.is_train { "Train" } else { "Bus" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_label() {
        let mut station = Station {
            id: "dcbb6c4a-9603-11e6-9066-549f350fcb0c".to_string(),
            name: "Karlsruhe Hbf".to_string(),
            legacy_id: 1207,
            importance_order: 1,
            is_train: true,
        };
        assert_eq!(station.kind(), "Train");

        station.is_train = false;
        assert_eq!(station.kind(), "Bus");
    }
}
