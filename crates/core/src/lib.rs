pub mod errors;
pub mod models;
pub mod services;

use chrono::{DateTime, Utc};
use models::{
    analytics::PortfolioSummary,
    asset::ArtAsset,
    catalog::AssetCatalog,
    guarantee::GuaranteeStatus,
    holding::Holding,
    settings::Settings,
    transaction::{Transaction, TransactionType},
};
use services::{guarantee_service::GuaranteeService, valuation_service::ValuationService};

use errors::CoreError;

pub use services::guarantee_service::{compute_guarantee_status, tier_for_days};
pub use services::valuation_service::compute_portfolio_value;

/// Main entry point for the AUREA core library.
///
/// Holds the read-only catalog plus the user's holdings, wallet activity and
/// settings, and answers the derived-value questions the app screens ask.
/// Nothing here mutates the catalog or reaches outside the process.
#[must_use]
pub struct Aurea {
    catalog: AssetCatalog,
    holdings: Vec<Holding>,
    transactions: Vec<Transaction>,
    settings: Settings,
    /// Uninvested cash in the display currency.
    cash_balance: f64,
    valuation_service: ValuationService,
    guarantee_service: GuaranteeService,
}

impl std::fmt::Debug for Aurea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aurea")
            .field("catalog", &self.catalog.len())
            .field("holdings", &self.holdings.len())
            .field("transactions", &self.transactions.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Aurea {
    /// Create a session over a catalog with no holdings and an empty wallet.
    pub fn new(catalog: AssetCatalog, settings: Settings) -> Self {
        Self {
            catalog,
            holdings: Vec::new(),
            transactions: Vec::new(),
            settings,
            cash_balance: 0.0,
            valuation_service: ValuationService::new(),
            guarantee_service: GuaranteeService::new(),
        }
    }

    /// Load the catalog and settings from JSON documents.
    pub fn from_json(catalog_json: &str, settings_json: &str) -> Result<Self, CoreError> {
        let catalog = AssetCatalog::from_json(catalog_json)?;
        let settings = Settings::from_json(settings_json)?;
        Ok(Self::new(catalog, settings))
    }

    pub fn with_holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = holdings;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_cash_balance(mut self, cash_balance: f64) -> Self {
        self.cash_balance = cash_balance;
        self
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    #[must_use]
    pub fn get_asset(&self, asset_id: &str) -> Option<&ArtAsset> {
        self.catalog.get(asset_id)
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Current value of all holdings at catalog prices.
    #[must_use]
    pub fn portfolio_value(&self) -> f64 {
        self.valuation_service
            .compute_portfolio_value(&self.holdings, &self.catalog)
    }

    /// Cash plus holdings value.
    #[must_use]
    pub fn total_equity(&self) -> f64 {
        self.cash_balance + self.portfolio_value()
    }

    /// Per-holding breakdown in the display currency.
    #[must_use]
    pub fn portfolio_summary(&self, now: DateTime<Utc>) -> PortfolioSummary {
        self.valuation_service.summarize(
            &self.holdings,
            &self.catalog,
            &self.settings.display_currency,
            now,
        )
    }

    // ── Guarantees ──────────────────────────────────────────────────

    /// Guarantee countdown for one catalogued asset.
    pub fn guarantee_status(
        &self,
        asset_id: &str,
        now: DateTime<Utc>,
    ) -> Result<GuaranteeStatus, CoreError> {
        let asset = self
            .catalog
            .get(asset_id)
            .ok_or_else(|| CoreError::AssetNotFound(asset_id.to_string()))?;
        Ok(self
            .guarantee_service
            .status_for_asset(asset, now, self.settings.policy_term_days))
    }

    /// Catalogued assets whose guarantee ends within `days`, soonest first.
    #[must_use]
    pub fn expiring_guarantees(
        &self,
        now: DateTime<Utc>,
        days: i64,
    ) -> Vec<(&ArtAsset, GuaranteeStatus)> {
        self.guarantee_service.expiring_within(
            &self.catalog,
            now,
            days,
            self.settings.policy_term_days,
        )
    }

    // ── Catalog listings ────────────────────────────────────────────

    /// Tradable assets matching a title/artist search.
    #[must_use]
    pub fn search_marketplace(&self, query: &str) -> Vec<&ArtAsset> {
        self.catalog.marketplace(query)
    }

    /// Institutional catalog entries.
    #[must_use]
    pub fn institutional_catalog(&self) -> Vec<&ArtAsset> {
        self.catalog.institutional()
    }

    // ── Wallet activity ─────────────────────────────────────────────

    /// All transactions, newest first.
    #[must_use]
    pub fn get_transactions(&self) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.transactions.iter().collect();
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }

    /// Transactions of one type, newest first.
    #[must_use]
    pub fn get_transactions_by_type(&self, tx_type: TransactionType) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.tx_type == tx_type)
            .collect();
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }
}
