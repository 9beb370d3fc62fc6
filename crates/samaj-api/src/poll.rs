//! Community polls.

use reqwest::Method;
use samaj_core::entities::Poll;
use samaj_core::enums::PollStatus;
use samaj_core::errors::CoreError;
use samaj_core::validation::validate_poll;
use serde::de::IgnoredAny;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

fn poll_path(id: &str) -> String {
    format!("/api/polls/{}", segment(id))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_polls(&self, query: &ListQuery) -> Result<Vec<Poll>, ApiError> {
        self.get(&query.apply("/api/polls")).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn get_poll(&self, id: &str) -> Result<Poll, ApiError> {
        self.get(&poll_path(id)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] (keys such as `question-0-options`)
    /// before sending when the poll is malformed, otherwise any error from the
    /// request wrapper.
    pub async fn create_poll(&self, poll: &Poll) -> Result<Poll, ApiError> {
        validate_poll(poll)?;
        self.request(Method::POST, "/api/polls", Some(poll)).await
    }

    /// # Errors
    ///
    /// Same as [`ApiClient::create_poll`].
    pub async fn update_poll(&self, id: &str, poll: &Poll) -> Result<Poll, ApiError> {
        validate_poll(poll)?;
        self.put_poll(id, poll).await
    }

    async fn put_poll(&self, id: &str, poll: &Poll) -> Result<Poll, ApiError> {
        self.request(Method::PUT, &poll_path(id), Some(poll)).await
    }

    /// Move a poll along `DRAFT → ACTIVE → CLOSED`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] when the poll cannot move to `next` from its
    /// current status, otherwise any error from the request wrapper. The
    /// stored body is sent back as-is, without re-running form validation.
    pub async fn set_poll_status(&self, id: &str, next: PollStatus) -> Result<Poll, ApiError> {
        let mut poll = self.get_poll(id).await?;
        if !poll.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "poll".into(),
                id: id.to_string(),
                from: poll.status.to_string(),
                to: next.to_string(),
            }
            .into());
        }
        poll.status = next;
        self.put_poll(id, &poll).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn delete_poll(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .request::<_, ()>(Method::DELETE, &poll_path(id), None)
            .await?;
        Ok(())
    }
}
