//! Chokhla (regional council) endpoints.

use reqwest::Method;
use samaj_core::entities::{Chokhla, Paginated, Village};
use samaj_core::validation::validate_chokhla;
use serde::de::IgnoredAny;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_chokhlas(&self, query: &ListQuery) -> Result<Paginated<Chokhla>, ApiError> {
        self.get(&query.apply("/api/chokhlas")).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn get_chokhla(&self, id: &str) -> Result<Chokhla, ApiError> {
        self.get(&format!("/api/chokhlas/{}", segment(id))).await
    }

    /// Register a new chokhla.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending when the form is
    /// invalid, otherwise any error from the request wrapper.
    pub async fn create_chokhla(&self, chokhla: &Chokhla) -> Result<Chokhla, ApiError> {
        validate_chokhla(chokhla)?;
        self.request(Method::POST, "/api/chokhlas", Some(chokhla))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending when the form is
    /// invalid, otherwise any error from the request wrapper.
    pub async fn update_chokhla(&self, id: &str, chokhla: &Chokhla) -> Result<Chokhla, ApiError> {
        validate_chokhla(chokhla)?;
        self.request(
            Method::PUT,
            &format!("/api/chokhlas/{}", segment(id)),
            Some(chokhla),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn delete_chokhla(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .request::<_, ()>(Method::DELETE, &format!("/api/chokhlas/{}", segment(id)), None)
            .await?;
        Ok(())
    }

    /// Villages belonging to one chokhla.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn chokhla_villages(&self, id: &str) -> Result<Vec<Village>, ApiError> {
        self.get(&format!("/api/chokhlas/{}/villages", segment(id)))
            .await
    }
}
