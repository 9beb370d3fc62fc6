//! Family endpoints and the member routes nested under them.
//!
//! Every write runs the household validator first; member writes fetch the
//! current member list so the one-mukhiya and unique-Aadhaar rules are checked
//! against what the backend holds.

use reqwest::Method;
use samaj_core::entities::{Family, Paginated, Person};
use samaj_core::validation::{
    FieldErrors, validate_family, validate_member_addition, validate_member_update,
};
use serde::de::IgnoredAny;

use crate::{ApiClient, ListQuery, error::ApiError, segment};

fn family_path(id: &str) -> String {
    format!("/api/families/{}", segment(id))
}

fn members_path(family_id: &str) -> String {
    format!("{}/members", family_path(family_id))
}

fn member_path(family_id: &str, member_id: &str) -> String {
    format!("{}/{}", members_path(family_id), segment(member_id))
}

impl ApiClient {
    /// List families; filter with `villageId`, `chokhlaId` or `status`.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_families(&self, query: &ListQuery) -> Result<Paginated<Family>, ApiError> {
        self.get(&query.apply("/api/families")).await
    }

    /// Fetch one family including its members.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn get_family(&self, id: &str) -> Result<Family, ApiError> {
        self.get(&family_path(id)).await
    }

    /// Register a family together with its members.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] (keys such as `member-1-aadhaarNumber`
    /// or `mukhiya`) without sending anything when the household is invalid,
    /// otherwise any error from the request wrapper.
    pub async fn create_family(&self, family: &Family) -> Result<Family, ApiError> {
        validate_family(family)?;
        self.request(Method::POST, "/api/families", Some(family))
            .await
    }

    /// Replace a family record and its member list.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::create_family`].
    pub async fn update_family(&self, id: &str, family: &Family) -> Result<Family, ApiError> {
        validate_family(family)?;
        self.request(Method::PUT, &family_path(id), Some(family))
            .await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn delete_family(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .request::<_, ()>(Method::DELETE, &family_path(id), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn list_members(&self, family_id: &str) -> Result<Vec<Person>, ApiError> {
        self.get(&members_path(family_id)).await
    }

    /// Add one member to an existing family.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the member is invalid, would be a
    /// second mukhiya, or reuses an Aadhaar number already in the family.
    pub async fn add_member(&self, family_id: &str, member: &Person) -> Result<Person, ApiError> {
        let existing = self.list_members(family_id).await?;
        validate_member_addition(&existing, member)?;
        self.request(Method::POST, &members_path(family_id), Some(member))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the edit breaks a field rule or a
    /// household invariant, otherwise any error from the request wrapper.
    pub async fn update_member(
        &self,
        family_id: &str,
        member_id: &str,
        member: &Person,
    ) -> Result<Person, ApiError> {
        let existing = self.list_members(family_id).await?;
        let mut member = member.clone();
        if member.id.is_empty() {
            member.id = member_id.to_string();
        }
        validate_member_update(&existing, &member)?;
        self.request(Method::PUT, &member_path(family_id, member_id), Some(&member))
            .await
    }

    /// Remove a member. The mukhiya can only be removed once another member
    /// has taken over, or when they are the last member left.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with key `isMukhiya` when removing the
    /// member would leave the family headless.
    pub async fn delete_member(&self, family_id: &str, member_id: &str) -> Result<(), ApiError> {
        let existing = self.list_members(family_id).await?;
        check_removal(&existing, member_id)?;
        let _: IgnoredAny = self
            .request::<_, ()>(Method::DELETE, &member_path(family_id, member_id), None)
            .await?;
        Ok(())
    }
}

fn check_removal(existing: &[Person], member_id: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let removes_head = existing
        .iter()
        .any(|m| m.id == member_id && m.is_mukhiya);
    if removes_head && existing.iter().any(|m| m.id != member_id) {
        errors.insert(
            "isMukhiya",
            "Assign another mukhiya before removing the head of family",
        );
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, is_mukhiya: bool) -> Person {
        Person {
            id: id.into(),
            first_name: id.into(),
            is_mukhiya,
            ..Person::default()
        }
    }

    #[test]
    fn nested_paths() {
        assert_eq!(members_path("fam-1"), "/api/families/fam-1/members");
        assert_eq!(member_path("fam-1", "m 2"), "/api/families/fam-1/members/m%202");
    }

    #[test]
    fn head_cannot_be_removed_while_others_remain() {
        let household = vec![member("a", true), member("b", false)];
        let err = check_removal(&household, "a").unwrap_err();
        assert!(err.contains("isMukhiya"));

        assert!(check_removal(&household, "b").is_ok());
        assert!(check_removal(&household[..1], "a").is_ok());
    }
}
