use serde::{Deserialize, Serialize};

/// A user's position in one catalogued asset.
///
/// Fractional ownership is the product's premise, so `fractions_owned`
/// need not be integral. Values are taken as given; nothing here validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Catalog id of the held asset
    pub asset_id: String,

    pub fractions_owned: f64,

    /// Average acquisition price per fraction
    pub average_price: f64,
}

impl Holding {
    pub fn new(asset_id: impl Into<String>, fractions_owned: f64, average_price: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            fractions_owned,
            average_price,
        }
    }

    /// Amount paid for the position: fractions × average price.
    pub fn cost_basis(&self) -> f64 {
        self.fractions_owned * self.average_price
    }
}
