//! Status enums, roles, and demographic categories for the census records.
//!
//! All enums serialize with the backend's `SCREAMING_SNAKE_CASE` literals.
//! Status enums with a review workflow provide `allowed_next_states()` so
//! callers can refuse an impossible transition before it reaches the backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role issued by the backend at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    ChokhlaAdmin,
    VillageMember,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::ChokhlaAdmin => "CHOKHLA_ADMIN",
            Self::VillageMember => "VILLAGE_MEMBER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerificationStatus
// ---------------------------------------------------------------------------

/// Verification state of a family record.
///
/// Moves between states are decided by the backend's review flow; the client
/// only reads and filters on it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    #[default]
    Draft,
    Pending,
    Verified,
}

impl VerificationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Status of a family approval request.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// What a family request asks the reviewer to do.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    #[default]
    New,
    Update,
    Delete,
}

impl RequestType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EconomicStatus
// ---------------------------------------------------------------------------

/// Household economic bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EconomicStatus {
    Bpl,
    Apl,
    MiddleClass,
    UpperClass,
}

impl EconomicStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bpl => "BPL",
            Self::Apl => "APL",
            Self::MiddleClass => "MIDDLE_CLASS",
            Self::UpperClass => "UPPER_CLASS",
        }
    }
}

impl fmt::Display for EconomicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// A member's relation to the head of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// The head of the family themself.
    #[serde(rename = "SELF")]
    Head,
    Spouse,
    Son,
    Daughter,
    Father,
    Mother,
    Brother,
    Sister,
    DaughterInLaw,
    SonInLaw,
    Grandson,
    Granddaughter,
    Other,
}

impl Relation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "SELF",
            Self::Spouse => "SPOUSE",
            Self::Son => "SON",
            Self::Daughter => "DAUGHTER",
            Self::Father => "FATHER",
            Self::Mother => "MOTHER",
            Self::Brother => "BROTHER",
            Self::Sister => "SISTER",
            Self::DaughterInLaw => "DAUGHTER_IN_LAW",
            Self::SonInLaw => "SON_IN_LAW",
            Self::Grandson => "GRANDSON",
            Self::Granddaughter => "GRANDDAUGHTER",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaritalStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Widowed,
    Divorced,
    Separated,
}

impl MaritalStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Married => "MARRIED",
            Self::Widowed => "WIDOWED",
            Self::Divorced => "DIVORCED",
            Self::Separated => "SEPARATED",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EducationLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    Illiterate,
    Primary,
    Secondary,
    HigherSecondary,
    Diploma,
    Graduate,
    PostGraduate,
    Doctorate,
}

impl EducationLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illiterate => "ILLITERATE",
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::HigherSecondary => "HIGHER_SECONDARY",
            Self::Diploma => "DIPLOMA",
            Self::Graduate => "GRADUATE",
            Self::PostGraduate => "POST_GRADUATE",
            Self::Doctorate => "DOCTORATE",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmploymentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Student,
    Retired,
    Homemaker,
}

impl EmploymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employed => "EMPLOYED",
            Self::SelfEmployed => "SELF_EMPLOYED",
            Self::Unemployed => "UNEMPLOYED",
            Self::Student => "STUDENT",
            Self::Retired => "RETIRED",
            Self::Homemaker => "HOMEMAKER",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Answer shape of a poll question.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    #[default]
    SingleChoice,
    MultipleChoice,
    Text,
}

impl QuestionType {
    /// Whether answers are picked from the question's options.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "SINGLE_CHOICE",
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PollStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a poll.
///
/// ```text
/// draft → active → closed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollStatus {
    #[default]
    Draft,
    Active,
    Closed,
}

impl PollStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Active],
            Self::Active => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_status_is_terminal_after_review() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Approved));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Rejected));
        assert!(!RequestStatus::Approved.can_transition_to(RequestStatus::Rejected));
        assert!(RequestStatus::Rejected.allowed_next_states().is_empty());
    }

    #[test]
    fn poll_closes_only_from_active() {
        assert!(!PollStatus::Draft.can_transition_to(PollStatus::Closed));
        assert!(PollStatus::Active.can_transition_to(PollStatus::Closed));
    }

    #[test]
    fn wire_names_match_as_str() {
        let json = serde_json::to_string(&Relation::Head).unwrap();
        assert_eq!(json, "\"SELF\"");
        let json = serde_json::to_string(&EconomicStatus::MiddleClass).unwrap();
        assert_eq!(json, format!("\"{}\"", EconomicStatus::MiddleClass.as_str()));
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"MULTIPLE_CHOICE\"");
        let json = serde_json::to_string(&Relation::DaughterInLaw).unwrap();
        assert_eq!(json, format!("\"{}\"", Relation::DaughterInLaw.as_str()));
    }

    #[test]
    fn role_parses_backend_literal() {
        let role: Role = serde_json::from_str("\"CHOKHLA_ADMIN\"").unwrap();
        assert_eq!(role, Role::ChokhlaAdmin);
    }

    #[test]
    fn question_type_choice_flag() {
        assert!(QuestionType::SingleChoice.is_choice());
        assert!(!QuestionType::Text.is_choice());
    }
}
