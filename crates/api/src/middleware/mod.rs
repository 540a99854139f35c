//! Request middleware: authentication and role-based access extractors.

pub mod auth;
pub mod rbac;
