use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of wallet movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Acquiring fractions
    Buy,
    /// Selling fractions
    Sell,
    /// Exchanging fractions of one asset for another
    Swap,
    /// Cash in
    Deposit,
    /// Cash out
    Withdraw,
}

impl TransactionType {
    /// Whether cash leaves the wallet for this kind of movement.
    pub fn is_outflow(&self) -> bool {
        matches!(self, TransactionType::Buy | TransactionType::Withdraw)
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "BUY"),
            TransactionType::Sell => write!(f, "SELL"),
            TransactionType::Swap => write!(f, "SWAP"),
            TransactionType::Deposit => write!(f, "DEPOSIT"),
            TransactionType::Withdraw => write!(f, "WITHDRAW"),
        }
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "COMPLETED"),
            TransactionStatus::Pending => write!(f, "PENDING"),
            TransactionStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// A single wallet movement shown in the activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Set for BUY/SELL/SWAP; cash movements carry no asset
    #[serde(default)]
    pub asset_id: Option<String>,

    /// Cash amount in the display currency (always positive)
    pub amount: f64,

    pub timestamp: DateTime<Utc>,

    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(
        tx_type: TransactionType,
        asset_id: Option<String>,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tx_type,
            asset_id,
            amount,
            timestamp,
            status: TransactionStatus::Completed,
        }
    }

    /// Same as [`Transaction::new`] with an explicit status.
    pub fn with_status(
        tx_type: TransactionType,
        asset_id: Option<String>,
        amount: f64,
        timestamp: DateTime<Utc>,
        status: TransactionStatus,
    ) -> Self {
        Self {
            status,
            ..Self::new(tx_type, asset_id, amount, timestamp)
        }
    }
}
