use chrono::{DateTime, Utc};

use crate::models::asset::ArtAsset;
use crate::models::catalog::AssetCatalog;
use crate::models::guarantee::{
    GuaranteeRecord, GuaranteeStatus, GuaranteeTier, SECURE_THRESHOLD_DAYS, WARNING_THRESHOLD_DAYS,
};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Insurance guarantee countdowns: days left, progress percentage, tier.
///
/// Every computation takes `now` explicitly; [`status_now`](Self::status_now)
/// is the only entry point that reads the wall clock.
pub struct GuaranteeService;

impl GuaranteeService {
    pub fn new() -> Self {
        Self
    }

    /// Countdown from `now` to `expiry`.
    ///
    /// - `days_remaining` is the difference in days rounded up (negative once expired).
    /// - `display_percentage` is `days_remaining / policy_term_days × 100`, clamped to `[0, 100]`.
    ///   A zero-day term yields 100 while days remain and 0 otherwise.
    /// - The tier is `Secure` above 90 days, `Warning` above 30, `Critical` otherwise.
    pub fn compute_guarantee_status(
        &self,
        expiry: DateTime<Utc>,
        now: DateTime<Utc>,
        policy_term_days: u32,
    ) -> GuaranteeStatus {
        let days_remaining = ceil_days(expiry, now);

        let display_percentage = if policy_term_days == 0 {
            if days_remaining > 0 { 100.0 } else { 0.0 }
        } else {
            ((days_remaining as f64 / f64::from(policy_term_days)) * 100.0).clamp(0.0, 100.0)
        };

        let status = GuaranteeStatus {
            days_remaining,
            display_percentage,
            tier: tier_for_days(days_remaining),
        };
        if status.is_expired() {
            tracing::debug!(%expiry, days_remaining, "guarantee expired");
        }
        status
    }

    /// Countdown against the current wall-clock time.
    pub fn status_now(&self, expiry: DateTime<Utc>, policy_term_days: u32) -> GuaranteeStatus {
        self.compute_guarantee_status(expiry, Utc::now(), policy_term_days)
    }

    /// Countdown for a guarantee record, against the record's own policy term.
    pub fn status_for_record(&self, record: &GuaranteeRecord, now: DateTime<Utc>) -> GuaranteeStatus {
        self.compute_guarantee_status(record.expiry, now, record.policy_term_days)
    }

    /// Countdown for a catalogued asset's insurance policy.
    pub fn status_for_asset(
        &self,
        asset: &ArtAsset,
        now: DateTime<Utc>,
        policy_term_days: u32,
    ) -> GuaranteeStatus {
        self.status_for_record(&asset.guarantee_with_term(policy_term_days), now)
    }

    /// Assets whose guarantee is still running but ends within `days`.
    /// Sorted by days remaining, soonest first; ties keep catalog order.
    pub fn expiring_within<'a>(
        &self,
        catalog: &'a AssetCatalog,
        now: DateTime<Utc>,
        days: i64,
        policy_term_days: u32,
    ) -> Vec<(&'a ArtAsset, GuaranteeStatus)> {
        let mut expiring: Vec<(&ArtAsset, GuaranteeStatus)> = catalog
            .iter()
            .map(|asset| (asset, self.status_for_asset(asset, now, policy_term_days)))
            .filter(|(_, status)| (0..=days).contains(&status.days_remaining))
            .collect();
        expiring.sort_by_key(|(_, status)| status.days_remaining);
        if !expiring.is_empty() {
            tracing::debug!(count = expiring.len(), within_days = days, "guarantees expiring soon");
        }
        expiring
    }
}

impl Default for GuaranteeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole days from `now` until `expiry`, rounded towards positive infinity.
fn ceil_days(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    // Millisecond resolution on purpose: a sub-millisecond gap counts as 0 days.
    let millis = (expiry - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// Tier for a given number of days remaining. First match wins.
pub fn tier_for_days(days_remaining: i64) -> GuaranteeTier {
    if days_remaining > SECURE_THRESHOLD_DAYS {
        GuaranteeTier::Secure
    } else if days_remaining > WARNING_THRESHOLD_DAYS {
        GuaranteeTier::Warning
    } else {
        GuaranteeTier::Critical
    }
}

/// Free-function form of [`GuaranteeService::compute_guarantee_status`].
pub fn compute_guarantee_status(
    expiry: DateTime<Utc>,
    now: DateTime<Utc>,
    policy_term_days: u32,
) -> GuaranteeStatus {
    GuaranteeService::new().compute_guarantee_status(expiry, now, policy_term_days)
}
