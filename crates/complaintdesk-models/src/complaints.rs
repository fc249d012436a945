//! Complaint records, their status lifecycle and the filing form.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

use crate::ids::{ComplaintId, StudentId};

/// Lifecycle of a complaint. New complaints start `Pending`; an admin can
/// move them to `Resolved`. Stored as the variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Complaint {
    pub id: ComplaintId,
    pub student_id: StudentId,
    pub issue_type: String,
    pub description: String,
    pub status: ComplaintStatus,
}

impl Complaint {
    pub fn is_resolved(&self) -> bool {
        self.status == ComplaintStatus::Resolved
    }
}

/// Values for a complaint about to be inserted. The status is always the default.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub student_id: StudentId,
    pub issue_type: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewComplaintForm {
    #[validate(length(min = 1, max = 100, message = "issue_type must be 1 to 100 characters"))]
    pub issue_type: String,
    #[validate(length(min = 1, max = 500, message = "description must be 1 to 500 characters"))]
    pub description: String,
}

impl NewComplaintForm {
    pub fn into_new_complaint(self, student_id: StudentId) -> NewComplaint {
        NewComplaint {
            student_id,
            issue_type: self.issue_type,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Pending);
        assert_eq!(ComplaintStatus::default().to_string(), "Pending");
    }

    #[test]
    fn test_status_serializes_as_variant_name() {
        let json = serde_json::to_string(&ComplaintStatus::Resolved).unwrap();
        assert_eq!(json, r#""Resolved""#);
    }

    #[test]
    fn test_complaint_form_length_limits() {
        let form = NewComplaintForm {
            issue_type: "Wifi".to_string(),
            description: "x".repeat(501),
        };
        assert!(form.validate().is_err());

        let form = NewComplaintForm {
            issue_type: String::new(),
            description: "down".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_into_new_complaint() {
        let form = NewComplaintForm {
            issue_type: "Wifi".to_string(),
            description: "down".to_string(),
        };
        let new = form.into_new_complaint(StudentId::new(3));
        assert_eq!(new.student_id, StudentId::new(3));
        assert_eq!(new.issue_type, "Wifi");
    }
}
