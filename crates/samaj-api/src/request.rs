//! Family change requests and their review.

use reqwest::Method;
use samaj_core::entities::{FamilyRequest, Paginated};
use samaj_core::enums::RequestStatus;
use samaj_core::errors::CoreError;
use serde::Serialize;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

#[derive(Serialize)]
struct ReviewBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
}

impl ApiClient {
    /// List requests; filter with `status` (e.g. `PENDING`) or `villageId`.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_requests(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<FamilyRequest>, ApiError> {
        self.get(&query.apply("/api/requests")).await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn get_request(&self, id: &str) -> Result<FamilyRequest, ApiError> {
        self.get(&format!("/api/requests/{}", segment(id))).await
    }

    /// Approve a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] with an invalid-transition error when the
    /// request was already reviewed, otherwise any error from the request
    /// wrapper.
    pub async fn approve_request(
        &self,
        id: &str,
        remarks: Option<&str>,
    ) -> Result<FamilyRequest, ApiError> {
        self.review(id, RequestStatus::Approved, remarks).await
    }

    /// Reject a pending request.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::approve_request`].
    pub async fn reject_request(
        &self,
        id: &str,
        remarks: Option<&str>,
    ) -> Result<FamilyRequest, ApiError> {
        self.review(id, RequestStatus::Rejected, remarks).await
    }

    async fn review(
        &self,
        id: &str,
        decision: RequestStatus,
        remarks: Option<&str>,
    ) -> Result<FamilyRequest, ApiError> {
        let current = self.get_request(id).await?;
        ensure_reviewable(&current, decision)?;

        let action = match decision {
            RequestStatus::Approved => "approve",
            _ => "reject",
        };
        let body = ReviewBody {
            remarks: remarks.map(str::trim).filter(|r| !r.is_empty()),
        };
        tracing::info!(request_id = id, %decision, "reviewing family request");
        self.request(
            Method::PUT,
            &format!("/api/requests/{}/{action}", segment(id)),
            Some(&body),
        )
        .await
    }
}

fn ensure_reviewable(request: &FamilyRequest, decision: RequestStatus) -> Result<(), CoreError> {
    if request.status.can_transition_to(decision) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity_type: "request".into(),
            id: request.id.clone(),
            from: request.status.to_string(),
            to: decision.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus) -> FamilyRequest {
        FamilyRequest {
            id: "req-1".into(),
            status,
            ..FamilyRequest::default()
        }
    }

    #[test]
    fn only_pending_requests_are_reviewable() {
        assert!(ensure_reviewable(&request(RequestStatus::Pending), RequestStatus::Approved).is_ok());
        assert!(ensure_reviewable(&request(RequestStatus::Pending), RequestStatus::Rejected).is_ok());

        let err =
            ensure_reviewable(&request(RequestStatus::Approved), RequestStatus::Rejected).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state transition: request req-1 from APPROVED to REJECTED"
        );
    }

    #[test]
    fn empty_remarks_are_omitted() {
        let body = ReviewBody { remarks: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }
}
