use chrono::{DateTime, Utc};

use crate::models::analytics::{HoldingSummary, PortfolioSummary};
use crate::models::catalog::AssetCatalog;
use crate::models::holding::Holding;

/// Values a user's holdings against the current catalog prices.
///
/// Pure business logic: no I/O, no state. A holding whose asset is missing
/// from the catalog contributes nothing instead of failing, since the catalog
/// is sourced independently and may drift from the user's holdings.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Total value of the holdings: Σ fractions_owned × fraction_price.
    pub fn compute_portfolio_value(&self, holdings: &[Holding], catalog: &AssetCatalog) -> f64 {
        holdings
            .iter()
            .map(|holding| match catalog.fraction_price(&holding.asset_id) {
                Some(price) => holding.fractions_owned * price,
                None => {
                    tracing::debug!(asset_id = %holding.asset_id, "holding not in catalog, valued at zero");
                    0.0
                }
            })
            .sum()
    }

    /// Per-holding breakdown with cost basis, gain/loss and allocation.
    ///
    /// Unmatched holdings are left out of the list and counted in
    /// `unmatched_holdings`. `total_value` always equals
    /// [`compute_portfolio_value`](Self::compute_portfolio_value).
    pub fn summarize(
        &self,
        holdings: &[Holding],
        catalog: &AssetCatalog,
        currency: &str,
        as_of: DateTime<Utc>,
    ) -> PortfolioSummary {
        let mut summaries = Vec::with_capacity(holdings.len());
        let mut unmatched = 0;

        for holding in holdings {
            let Some(asset) = catalog.get(&holding.asset_id) else {
                tracing::debug!(asset_id = %holding.asset_id, "holding not in catalog, omitted from summary");
                unmatched += 1;
                continue;
            };

            let current_value = holding.fractions_owned * asset.fraction_price;
            let cost_basis = holding.cost_basis();
            let gain_loss = current_value - cost_basis;

            summaries.push(HoldingSummary {
                asset_id: asset.id.clone(),
                title: asset.title.clone(),
                artist: asset.artist.clone(),
                fractions_owned: holding.fractions_owned,
                fraction_price: asset.fraction_price,
                current_value,
                cost_basis,
                gain_loss,
                return_pct: percentage(gain_loss, cost_basis),
                allocation_pct: 0.0, // filled below
                insurance_status: asset.insurance.status,
            });
        }

        let total_value: f64 = summaries.iter().map(|h| h.current_value).sum();
        let total_invested: f64 = summaries.iter().map(|h| h.cost_basis).sum();

        for summary in &mut summaries {
            summary.allocation_pct = percentage(summary.current_value, total_value);
        }

        // Largest allocation first
        summaries.sort_by(|a, b| {
            b.allocation_pct
                .partial_cmp(&a.allocation_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_gain_loss = total_value - total_invested;

        PortfolioSummary {
            as_of,
            currency: currency.to_string(),
            total_value,
            total_invested,
            total_gain_loss,
            total_return_pct: percentage(total_gain_loss, total_invested),
            holdings: summaries,
            unmatched_holdings: unmatched,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}

/// `part / whole × 100`, or 0 when the whole is not positive.
fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

/// Free-function form of [`ValuationService::compute_portfolio_value`].
pub fn compute_portfolio_value(holdings: &[Holding], catalog: &AssetCatalog) -> f64 {
    ValuationService::new().compute_portfolio_value(holdings, catalog)
}
