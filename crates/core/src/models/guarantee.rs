use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Baseline policy term used to turn days remaining into a progress percentage.
pub const DEFAULT_POLICY_TERM_DAYS: u32 = 365;

/// More than this many days remaining is `Secure`.
pub const SECURE_THRESHOLD_DAYS: i64 = 90;

/// More than this many days remaining (and not `Secure`) is `Warning`.
pub const WARNING_THRESHOLD_DAYS: i64 = 30;

/// An insurance policy expiry to count down against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeRecord {
    /// May lie in the past (policy already expired).
    pub expiry: DateTime<Utc>,

    /// Full-term baseline for the display percentage. The policy start date
    /// is not modeled, so this is an approximation.
    pub policy_term_days: u32,
}

impl GuaranteeRecord {
    pub fn new(expiry: DateTime<Utc>) -> Self {
        Self {
            expiry,
            policy_term_days: DEFAULT_POLICY_TERM_DAYS,
        }
    }

    pub fn with_term(expiry: DateTime<Utc>, policy_term_days: u32) -> Self {
        Self {
            expiry,
            policy_term_days,
        }
    }
}

/// Countdown classification, evaluated on days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuaranteeTier {
    /// More than 90 days left
    Secure,
    /// 31 to 90 days left
    Warning,
    /// 30 days or fewer, including expired policies
    Critical,
}

impl std::fmt::Display for GuaranteeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuaranteeTier::Secure => write!(f, "SECURE"),
            GuaranteeTier::Warning => write!(f, "WARNING"),
            GuaranteeTier::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Result of a guarantee countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeStatus {
    /// Whole days until expiry, rounded up. Negative once expired.
    pub days_remaining: i64,

    /// Progress bar width, always within `[0, 100]`.
    pub display_percentage: f64,

    pub tier: GuaranteeTier,
}

impl GuaranteeStatus {
    pub fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }
}
