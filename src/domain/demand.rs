use serde::{Deserialize, Serialize};

/// One modelled origin-destination pair and its demand (BRT) score
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemandRecord {
    pub origin: String,
    pub destination: String,
    pub demand: f64,
}

impl DemandRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, demand: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            demand,
        }
    }

    /// "origin → destination", for logs and labels
    pub fn pair_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
