use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::SeedError;
use crate::transaction::Transaction;

pub const TRANSACTION_ENDPOINT: &str = "/transactions";

/// The body the backend answers with once it accepts a transaction. Only the
/// generated `id` is of interest here; it may be missing, in which case the
/// progress line shows `N/A`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTransaction {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Blocking client for the transaction-creation endpoint. Built once per run
/// and reused for every submission.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    endpoint: String,
}

impl ApiClient {
    /// # Errors
    /// Errors when the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, SeedError> {
        let http = Client::builder().build()?;
        Ok(ApiClient {
            http,
            endpoint: format!("{base_url}{TRANSACTION_ENDPOINT}"),
        })
    }

    /// Sends one record as a JSON POST and waits for the response.
    ///
    /// # Errors
    /// Errors when the request cannot be completed, when the server answers
    /// with a non-success status, or when the success body cannot be decoded.
    pub fn submit(&self, transaction: &Transaction) -> Result<CreatedTransaction, SeedError> {
        debug!("POST {}: {:?}", self.endpoint, transaction);

        let response = self.http.post(&self.endpoint).json(transaction).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::ErrorStatus { status });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_joined_onto_base_url() {
        let client = ApiClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(client.endpoint, "http://localhost:8080/api/transactions");
    }

    #[test]
    fn test_created_transaction_tolerates_missing_id() {
        let with_id: CreatedTransaction = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(with_id.id, Some(42));

        let without_id: CreatedTransaction = serde_json::from_str("{}").unwrap();
        assert_eq!(without_id.id, None);
    }
}
