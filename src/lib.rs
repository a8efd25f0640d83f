//! fitlog - Personal workout log
//!
//! Lifting, swimming and running sessions, reusable workout plans and body
//! weight, with progress analytics computed from the raw log.

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod exercises;
pub mod models;
pub mod tips;

pub use db::{Database, Repository};
pub use error::{Error, Result};
