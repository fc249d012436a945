//! HTML pages rendered with Handlebars.
//!
//! Templates are compiled into the binary from `templates/` and registered
//! once when the application state is built. Handlebars escapes every
//! interpolated value, so complaint text is safe to echo back.

use std::sync::Arc;

use anyhow::anyhow;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use complaintdesk_core::AppError;
use complaintdesk_models::{Complaint, ComplaintId, StudentId};

pub const STUDENT_SIGNUP: &str = "student_signup";
pub const STUDENT_LOGIN: &str = "student_login";
pub const STUDENT_DASHBOARD: &str = "student_dashboard";
pub const ADMIN_LOGIN: &str = "admin_login";
pub const ADMIN_DASHBOARD: &str = "admin_dashboard";

const TEMPLATES: [(&str, &str); 5] = [
    (
        STUDENT_SIGNUP,
        include_str!("../templates/student_signup.hbs"),
    ),
    (STUDENT_LOGIN, include_str!("../templates/student_login.hbs")),
    (
        STUDENT_DASHBOARD,
        include_str!("../templates/student_dashboard.hbs"),
    ),
    (ADMIN_LOGIN, include_str!("../templates/admin_login.hbs")),
    (
        ADMIN_DASHBOARD,
        include_str!("../templates/admin_dashboard.hbs"),
    ),
];

/// One complaint as shown in a dashboard table.
#[derive(Debug, Serialize)]
pub struct ComplaintRow<'a> {
    pub id: ComplaintId,
    pub student_id: StudentId,
    pub issue_type: &'a str,
    pub description: &'a str,
    pub status: &'static str,
    pub resolved: bool,
}

impl<'a> From<&'a Complaint> for ComplaintRow<'a> {
    fn from(complaint: &'a Complaint) -> Self {
        Self {
            id: complaint.id,
            student_id: complaint.student_id,
            issue_type: &complaint.issue_type,
            description: &complaint.description,
            status: complaint.status.as_str(),
            resolved: complaint.is_resolved(),
        }
    }
}

#[derive(Clone)]
pub struct Views {
    registry: Arc<Handlebars<'static>>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();

        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source).map_err(|e| {
                AppError::internal(anyhow!("Error registering template {}: {}", name, e))
            })?;
        }

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        self.registry
            .render(name, data)
            .map(Html)
            .map_err(|e| AppError::internal(anyhow!("Error rendering template {}: {}", name, e)))
    }

    /// Renders a template that takes no data, such as a login form.
    pub fn render_form(&self, name: &str) -> Result<Html<String>, AppError> {
        self.render(name, &json!({}))
    }

    pub fn render_complaints(
        &self,
        name: &str,
        complaints: &[Complaint],
    ) -> Result<Html<String>, AppError> {
        let rows: Vec<ComplaintRow<'_>> = complaints.iter().map(ComplaintRow::from).collect();
        self.render(name, &json!({ "complaints": rows }))
    }
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views")
            .field("templates", &self.registry.get_templates().len())
            .finish()
    }
}
