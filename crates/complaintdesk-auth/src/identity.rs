//! The authenticated identity attached to a request.

use complaintdesk_core::AppError;
use complaintdesk_models::{AdminId, StudentId};

use crate::claims::{Role, SessionClaims};

/// Who is making the request. Built from the session token on every request
/// and passed explicitly to the handlers that need it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    Student(StudentId),
    Admin(AdminId),
}

impl Identity {
    pub fn student_id(&self) -> Option<StudentId> {
        match self {
            Self::Student(id) => Some(*id),
            _ => None,
        }
    }

    pub fn admin_id(&self) -> Option<AdminId> {
        match self {
            Self::Admin(id) => Some(*id),
            _ => None,
        }
    }

    /// Subject string written into the token's `sub` claim.
    pub(crate) fn subject(&self) -> Option<(String, Role)> {
        match self {
            Self::Anonymous => None,
            Self::Student(id) => Some((id.to_string(), Role::Student)),
            Self::Admin(id) => Some((id.to_string(), Role::Admin)),
        }
    }
}

impl TryFrom<&SessionClaims> for Identity {
    type Error = AppError;

    fn try_from(claims: &SessionClaims) -> Result<Self, Self::Error> {
        let invalid = |_| AppError::Unauthorized;

        match claims.role {
            Role::Student => claims.sub.parse().map(Self::Student).map_err(invalid),
            Role::Admin => claims.sub.parse().map(Self::Admin).map_err(invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: Role) -> SessionClaims {
        SessionClaims {
            sub: sub.to_string(),
            role,
            iat: 0,
            jti: "jti".to_string(),
        }
    }

    #[test]
    fn test_accessors_only_match_own_role() {
        let student = Identity::Student(StudentId::new(4));
        assert_eq!(student.student_id(), Some(StudentId::new(4)));
        assert_eq!(student.admin_id(), None);

        let admin = Identity::Admin(AdminId::new(4));
        assert_eq!(admin.student_id(), None);
        assert_eq!(admin.admin_id(), Some(AdminId::new(4)));
    }

    #[test]
    fn test_from_claims() {
        let identity = Identity::try_from(&claims("9", Role::Student)).unwrap();
        assert_eq!(identity, Identity::Student(StudentId::new(9)));

        let identity = Identity::try_from(&claims("2", Role::Admin)).unwrap();
        assert_eq!(identity, Identity::Admin(AdminId::new(2)));
    }

    #[test]
    fn test_from_claims_rejects_non_numeric_subject() {
        assert!(Identity::try_from(&claims("not-a-number", Role::Student)).is_err());
    }
}
