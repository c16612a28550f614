//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod calculator;

pub use calculator::{add, divide, health, multiply, subtract};
