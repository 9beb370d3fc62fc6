//! Role-based gating of command areas.

use std::fmt;

use samaj_core::enums::Role;

use crate::error::AuthError;

/// A section of the application, matching the web app's route groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Dashboard,
    Chokhlas,
    Villages,
    Families,
    Requests,
    Chanda,
    Polls,
    Profile,
}

impl Area {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Chokhlas => "chokhlas",
            Self::Villages => "villages",
            Self::Families => "families",
            Self::Requests => "requests",
            Self::Chanda => "chanda",
            Self::Polls => "polls",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` may view `area`.
///
/// Super admins see everything. Chokhla admins see everything within their
/// chokhla but not the chokhla registry itself. Village members see their
/// own village's families, chanda, polls, and their profile.
#[must_use]
pub const fn can_access(role: Role, area: Area) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::ChokhlaAdmin => !matches!(area, Area::Chokhlas),
        Role::VillageMember => matches!(
            area,
            Area::Dashboard | Area::Families | Area::Chanda | Area::Polls | Area::Profile
        ),
    }
}

/// Whether `role` may create, edit, or delete records in `area`.
#[must_use]
pub const fn can_write(role: Role, area: Area) -> bool {
    match role {
        Role::SuperAdmin => !matches!(area, Area::Dashboard),
        Role::ChokhlaAdmin => matches!(
            area,
            Area::Villages | Area::Families | Area::Requests | Area::Chanda | Area::Polls | Area::Profile
        ),
        Role::VillageMember => matches!(area, Area::Families | Area::Profile),
    }
}

/// # Errors
///
/// Returns `AuthError::Forbidden` when `role` may not view `area`.
pub fn require_access(role: Role, area: Area) -> Result<(), AuthError> {
    if can_access(role, area) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            role: role.to_string(),
            action: "view",
            area: area.to_string(),
        })
    }
}

/// # Errors
///
/// Returns `AuthError::Forbidden` when `role` may not modify `area`.
pub fn require_write(role: Role, area: Area) -> Result<(), AuthError> {
    if can_write(role, area) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            role: role.to_string(),
            action: "modify",
            area: area.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Area; 8] = [
        Area::Dashboard,
        Area::Chokhlas,
        Area::Villages,
        Area::Families,
        Area::Requests,
        Area::Chanda,
        Area::Polls,
        Area::Profile,
    ];

    #[test]
    fn super_admin_sees_everything() {
        assert!(ALL.iter().all(|area| can_access(Role::SuperAdmin, *area)));
    }

    #[test]
    fn chokhla_admin_cannot_manage_chokhlas() {
        assert!(!can_access(Role::ChokhlaAdmin, Area::Chokhlas));
        assert!(can_write(Role::ChokhlaAdmin, Area::Requests));
        assert!(require_write(Role::ChokhlaAdmin, Area::Chokhlas).is_err());
    }

    #[test]
    fn village_member_is_limited() {
        assert!(!can_access(Role::VillageMember, Area::Requests));
        assert!(!can_write(Role::VillageMember, Area::Polls));
        assert!(can_write(Role::VillageMember, Area::Families));

        let err = require_access(Role::VillageMember, Area::Villages).unwrap_err();
        assert_eq!(err.to_string(), "VILLAGE_MEMBER accounts cannot view villages");
    }

    #[test]
    fn writing_implies_viewing() {
        for role in [Role::SuperAdmin, Role::ChokhlaAdmin, Role::VillageMember] {
            for area in ALL {
                if can_write(role, area) {
                    assert!(can_access(role, area), "{role} can write {area} but not view it");
                }
            }
        }
    }
}
