//! brand-insight-service: brand visibility analysis over the Gemini API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;
