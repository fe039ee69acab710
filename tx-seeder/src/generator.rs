use chrono::{Duration, Local, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use crate::transaction::{Transaction, TransactionStatus, TransactionType};

pub const SOURCE_ACCOUNTS: [&str; 5] = [
    "ACCT12345678",
    "ACCT23456789",
    "ACCT34567890",
    "ACCT45678901",
    "ACCT56789012",
];

pub const DESTINATION_ACCOUNTS: [&str; 5] = [
    "ACCT87654321",
    "ACCT98765432",
    "ACCT09876543",
    "ACCT10987654",
    "ACCT21098765",
];

const DEPOSIT_DESCRIPTIONS: [&str; 5] = [
    "Salary payment",
    "Interest earned",
    "Refund received",
    "Tax return",
    "Dividend payment",
];

const WITHDRAWAL_DESCRIPTIONS: [&str; 5] = [
    "ATM withdrawal",
    "Bill payment",
    "Loan payment",
    "Subscription fee",
    "Service charge",
];

const TRANSFER_DESCRIPTIONS: [&str; 5] = [
    "Transfer to savings",
    "Payment for services",
    "Rent payment",
    "Utility payment",
    "Insurance premium",
];

const TRANSACTION_TYPES: [TransactionType; 3] = [
    TransactionType::Deposit,
    TransactionType::Withdrawal,
    TransactionType::Transfer,
];

/// Relative weights skewing the draw towards `Completed` and `Initiated`.
/// `Scheduled` is kept in the table at weight 0 and is never selected.
const STATUS_WEIGHTS: [(TransactionStatus, u32); 9] = [
    (TransactionStatus::Initiated, 30),
    (TransactionStatus::Completed, 45),
    (TransactionStatus::Pending, 15),
    (TransactionStatus::Processing, 5),
    (TransactionStatus::Failed, 2),
    (TransactionStatus::Rejected, 1),
    (TransactionStatus::Cancelled, 1),
    (TransactionStatus::OnHold, 1),
    (TransactionStatus::Scheduled, 0),
];

const MIN_AMOUNT_CENTS: i64 = 10_00;
const MAX_AMOUNT_CENTS: i64 = 10_000_00;

/// Synthesizes one transaction: uniform type, weighted status, amount in
/// [10.00, 10000.00], timestamp within the past 30 days, and the
/// source/destination account pairing dictated by the type.
pub fn random_transaction<R: Rng + ?Sized>(rng: &mut R) -> Transaction {
    let transaction_type = pick(rng, &TRANSACTION_TYPES);

    let (description, source_account, destination_account) = match transaction_type {
        TransactionType::Deposit => (
            pick(rng, &DEPOSIT_DESCRIPTIONS),
            None,
            Some(pick(rng, &DESTINATION_ACCOUNTS)),
        ),
        TransactionType::Withdrawal => (
            pick(rng, &WITHDRAWAL_DESCRIPTIONS),
            Some(pick(rng, &SOURCE_ACCOUNTS)),
            None,
        ),
        TransactionType::Transfer => (
            pick(rng, &TRANSFER_DESCRIPTIONS),
            Some(pick(rng, &SOURCE_ACCOUNTS)),
            Some(pick(rng, &DESTINATION_ACCOUNTS)),
        ),
    };

    Transaction {
        description: description.to_owned(),
        amount: random_amount(rng),
        transaction_type,
        status: random_status(rng),
        timestamp: random_timestamp(rng),
        bank_reference: random_reference(rng),
        source_account: source_account.map(ToOwned::to_owned),
        destination_account: destination_account.map(ToOwned::to_owned),
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    *items.choose(rng).expect("choice pool is non-empty")
}

/// Uniform over the 2-decimal grid, so the scale is always exactly 2.
fn random_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS), 2)
}

fn random_status<R: Rng + ?Sized>(rng: &mut R) -> TransactionStatus {
    STATUS_WEIGHTS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(status, _)| *status)
        .expect("status weight table has a positive total weight")
}

/// Now minus a random offset of under 30 days, in local time without an
/// offset, matching the backend's `LocalDateTime` field.
fn random_timestamp<R: Rng + ?Sized>(rng: &mut R) -> NaiveDateTime {
    let offset = Duration::days(rng.gen_range(0..30))
        + Duration::hours(rng.gen_range(0..24))
        + Duration::minutes(rng.gen_range(0..60))
        + Duration::seconds(rng.gen_range(0..60));

    Local::now().naive_local() - offset
}

fn random_reference<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("REF{:08X}", rng.gen::<u32>())
}
