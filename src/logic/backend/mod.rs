//! Backend Module - Client to Prediction API Communication
//!
//! This module handles:
//! - Risk prediction submissions
//! - Admin login (HTTP Basic)
//! - Informational resource loads

pub mod client;

pub use client::{ApiClient, ApiConfig, ApiError};
