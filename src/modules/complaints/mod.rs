//! Complaint filing, listing and moderation shared by the student and admin
//! handlers.

pub mod service;
