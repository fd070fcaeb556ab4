//! HTTP handlers

pub mod employees;
pub mod health;

pub use health::{health, not_found};
