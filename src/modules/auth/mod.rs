//! Signup, login and logout for students and admins.

pub mod controller;
pub mod router;
pub mod service;
