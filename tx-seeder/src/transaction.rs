use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

/// The status vocabulary of the backend. `Scheduled` exists on the wire but
/// carries weight 0 in the generator table and is never drawn.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Initiated,
    Pending,
    Processing,
    Completed,
    Failed,
    Rejected,
    Cancelled,
    OnHold,
    Scheduled,
}

/// A single synthesized transaction, shaped like the JSON body the backend
/// expects. `source_account`/`destination_account` serialize as `null` when
/// absent; which one is present depends on `transaction_type`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub timestamp: NaiveDateTime,
    pub bank_reference: String,
    pub source_account: Option<String>,
    pub destination_account: Option<String>,
}

impl TransactionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
