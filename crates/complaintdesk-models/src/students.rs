//! Student records and the signup/login forms.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::ids::StudentId;

/// A registered student, without the password hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: StudentId,
    pub email: String,
}

/// A student row including the stored password hash. Only used to verify logins.
#[derive(Clone, FromRow)]
pub struct StudentCredentials {
    pub id: StudentId,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct SignupForm {
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 150, message = "email must be at most 150 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "password must be 1 to 200 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 150, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_form_rejects_bad_email() {
        let form = SignupForm {
            email: "not-an-email".to_string(),
            password: "p".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_signup_form_accepts_short_password() {
        let form = SignupForm {
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_signup_form_rejects_empty_password() {
        let form = SignupForm {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_login_form_does_not_check_email_format() {
        let form = LoginForm {
            email: "whoever".to_string(),
            password: "p".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
