//! HTTP handlers for the brand insight service.

pub mod analyze;
pub mod health;
