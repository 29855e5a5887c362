//! HTTP request handlers, one module per route group.

pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod health;
pub mod inquiries;
pub mod me;
pub mod portal;
pub mod reports;
pub mod site;
