use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::InsuranceStatus;

/// Summary of the user's collection at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Moment this summary was computed for
    pub as_of: DateTime<Utc>,

    /// Currency used for all monetary values
    pub currency: String,

    /// Sum of fractions × current fraction price over matched holdings
    pub total_value: f64,

    /// Sum of fractions × average acquisition price over matched holdings
    pub total_invested: f64,

    /// total_value - total_invested
    pub total_gain_loss: f64,

    /// (total_gain_loss / total_invested) * 100
    pub total_return_pct: f64,

    /// Per-asset breakdown, largest allocation first
    pub holdings: Vec<HoldingSummary>,

    /// Holdings whose asset id is missing from the catalog (excluded above)
    pub unmatched_holdings: usize,
}

/// One line of the "assets under custody" list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub asset_id: String,

    pub title: String,

    pub artist: String,

    pub fractions_owned: f64,

    /// Current catalog price per fraction
    pub fraction_price: f64,

    /// fractions_owned × fraction_price
    pub current_value: f64,

    /// fractions_owned × average_price
    pub cost_basis: f64,

    pub gain_loss: f64,

    pub return_pct: f64,

    /// This holding's value / total portfolio value × 100
    pub allocation_pct: f64,

    /// Badge shown next to the holding
    pub insurance_status: InsuranceStatus,
}
