use std::thread;
use std::time::{Duration, Instant};

use log::warn;
use rand::Rng;

use crate::client::ApiClient;
use crate::generator::random_transaction;
use crate::transaction::TransactionType;

/// Per-type tally of successfully created transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeCounts {
    pub deposit: u32,
    pub withdrawal: u32,
    pub transfer: u32,
}

impl TypeCounts {
    fn record(&mut self, transaction_type: TransactionType) {
        match transaction_type {
            TransactionType::Deposit => self.deposit += 1,
            TransactionType::Withdrawal => self.withdrawal += 1,
            TransactionType::Transfer => self.transfer += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.deposit + self.withdrawal + self.transfer
    }
}

/// Outcome of a full seeding run. Failures are counted, never fatal, so the
/// report is always produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub success_count: u32,
    pub error_count: u32,
    pub type_counts: TypeCounts,
    pub elapsed: Duration,
}

/// Drives the generate-then-submit loop: one record per iteration, one
/// progress line per iteration, a fixed pause in between.
pub struct Seeder {
    client: ApiClient,
    count: u32,
    delay: Duration,
}

impl Seeder {
    #[must_use]
    pub fn new(client: ApiClient, count: u32, delay: Duration) -> Self {
        Seeder {
            client,
            count,
            delay,
        }
    }

    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SeedReport {
        let mut success_count = 0;
        let mut error_count = 0;
        let mut type_counts = TypeCounts::default();
        let timer = Instant::now();

        for i in 1..=self.count {
            let transaction = random_transaction(rng);
            match self.client.submit(&transaction) {
                Ok(created) => {
                    success_count += 1;
                    type_counts.record(transaction.transaction_type);
                    let id = created.id.map_or_else(|| "N/A".to_owned(), |id| id.to_string());
                    println!(
                        "[{i}/{}] Created {} transaction: ID {id}",
                        self.count, transaction.transaction_type
                    );
                }
                Err(e) => {
                    error_count += 1;
                    warn!("Submission {i} of {} failed: {e}", self.count);
                    println!("[{i}/{}] Error creating transaction: {e}", self.count);
                }
            }

            if i < self.count {
                thread::sleep(self.delay);
            }
        }

        SeedReport {
            success_count,
            error_count,
            type_counts,
            elapsed: timer.elapsed(),
        }
    }
}
