//! HTTP request handlers, grouped by resource.

pub mod attachments;
pub mod auth;
pub mod classes;
pub mod groups;
pub mod notes;
pub mod study;
