//! Admin dashboard and complaint moderation.

pub mod controller;
pub mod router;
