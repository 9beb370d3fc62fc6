//! Village endpoints.

use reqwest::Method;
use samaj_core::entities::{Family, Paginated, Village};
use samaj_core::validation::validate_village;
use serde::de::IgnoredAny;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

impl ApiClient {
    /// List villages; narrow to one chokhla with a `chokhlaId` filter.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_villages(&self, query: &ListQuery) -> Result<Paginated<Village>, ApiError> {
        self.get(&query.apply("/api/villages")).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn get_village(&self, id: &str) -> Result<Village, ApiError> {
        self.get(&format!("/api/villages/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending when the form is
    /// invalid, otherwise any error from the request wrapper.
    pub async fn create_village(&self, village: &Village) -> Result<Village, ApiError> {
        validate_village(village)?;
        self.request(Method::POST, "/api/villages", Some(village))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending when the form is
    /// invalid, otherwise any error from the request wrapper.
    pub async fn update_village(&self, id: &str, village: &Village) -> Result<Village, ApiError> {
        validate_village(village)?;
        self.request(
            Method::PUT,
            &format!("/api/villages/{}", segment(id)),
            Some(village),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn delete_village(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .request::<_, ()>(Method::DELETE, &format!("/api/villages/{}", segment(id)), None)
            .await?;
        Ok(())
    }

    /// Families registered in one village.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn village_families(&self, id: &str) -> Result<Vec<Family>, ApiError> {
        self.get(&format!("/api/villages/{}/families", segment(id)))
            .await
    }
}
