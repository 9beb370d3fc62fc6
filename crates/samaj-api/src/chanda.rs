//! Chanda (annual contribution) collection.

use reqwest::Method;
use samaj_core::entities::{ChandaEntry, ChandaRecord};
use samaj_core::validation::validate_chanda_entry;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

impl ApiClient {
    /// Per-village collection totals, optionally for one year.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn chanda_records(&self, year: Option<i32>) -> Result<Vec<ChandaRecord>, ApiError> {
        let query = ListQuery::new().filter_opt("year", year.map(|y| y.to_string()));
        self.get(&query.apply("/api/chanda")).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn village_chanda(&self, village_id: &str) -> Result<ChandaRecord, ApiError> {
        self.get(&format!("/api/chanda/village/{}", segment(village_id)))
            .await
    }

    /// Record one family's payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending for a missing
    /// family/village, a zero amount or a future date, otherwise any error from
    /// the request wrapper.
    pub async fn record_chanda(&self, entry: &ChandaEntry) -> Result<ChandaEntry, ApiError> {
        validate_chanda_entry(entry)?;
        tracing::info!(
            family_id = %entry.family_id,
            amount = entry.amount,
            "recording chanda payment"
        );
        self.request(Method::POST, "/api/chanda", Some(entry)).await
    }
}
