use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::guarantee::GuaranteeRecord;

/// Insurance badge status as declared by the catalog source.
///
/// This is the static label shipped with each asset. The live countdown
/// classification is [`GuaranteeTier`](super::guarantee::GuaranteeTier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsuranceStatus {
    /// Policy active and in good standing
    Secured,
    /// Policy close to renewal
    Warning,
    /// Policy lapsed
    Expired,
}

impl std::fmt::Display for InsuranceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsuranceStatus::Secured => write!(f, "SECURED"),
            InsuranceStatus::Warning => write!(f, "WARNING"),
            InsuranceStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// The insurance policy backing a catalogued artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub status: InsuranceStatus,

    /// Insurer name
    pub company: String,

    #[serde(alias = "policyNumber")]
    pub policy_number: String,

    /// Last day of coverage (ISO date, e.g. "2025-12-31")
    pub expiry: NaiveDate,
}

/// A catalogued artwork and its market facts.
///
/// Top-level keys also load under their camelCase names (`fractionPrice`,
/// `isCatalogOnly`, ...). Insurance details always sit in a nested `insurance` object.
///
/// Prices are per fraction, in the display currency. A validated catalog
/// guarantees `available_fractions <= total_fractions` and
/// `total_fractions > 0` (see [`AssetCatalog`](super::catalog::AssetCatalog)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtAsset {
    /// Unique catalog identifier
    pub id: String,

    pub title: String,

    pub artist: String,

    /// Year the work was produced
    pub year: i32,

    /// Appraised value of the whole work
    #[serde(alias = "totalValue")]
    pub total_value: f64,

    /// Current price of a single fraction
    #[serde(alias = "fractionPrice")]
    pub fraction_price: f64,

    #[serde(alias = "totalFractions")]
    pub total_fractions: u64,

    /// Fractions still on offer
    #[serde(alias = "availableFractions")]
    pub available_fractions: u64,

    #[serde(default, alias = "imageUrl")]
    pub image_url: String,

    pub insurance: InsurancePolicy,

    #[serde(default, alias = "technicalReportUrl")]
    pub technical_report_url: String,

    #[serde(default)]
    pub description: String,

    /// Institutional catalog entries are listed but not traded on the marketplace.
    #[serde(default, alias = "isCatalogOnly")]
    pub is_catalog_only: bool,
}

impl ArtAsset {
    /// Share of fractions still available, as a percentage of the total.
    pub fn availability_pct(&self) -> f64 {
        if self.total_fractions == 0 {
            return 0.0;
        }
        (self.available_fractions as f64 / self.total_fractions as f64) * 100.0
    }

    /// Fractions already placed with investors.
    pub fn sold_fractions(&self) -> u64 {
        self.total_fractions.saturating_sub(self.available_fractions)
    }

    /// The asset's policy as a countdown input.
    /// The expiry date is taken as midnight UTC, the way ISO dates parse on the client.
    pub fn guarantee(&self) -> GuaranteeRecord {
        GuaranteeRecord::new(self.expiry_utc())
    }

    /// Same as [`guarantee`](Self::guarantee) with a configured policy term.
    pub fn guarantee_with_term(&self, policy_term_days: u32) -> GuaranteeRecord {
        GuaranteeRecord::with_term(self.expiry_utc(), policy_term_days)
    }

    fn expiry_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.insurance.expiry.and_time(NaiveTime::MIN))
    }

    /// Case-insensitive substring match against title or artist.
    /// Only the empty query matches everything; whitespace is matched literally.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let lower = query.to_lowercase();
        self.title.to_lowercase().contains(&lower) || self.artist.to_lowercase().contains(&lower)
    }
}
