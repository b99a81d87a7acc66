//! Logic Module - Client-Side Behavior
//!
//! Everything between the front ends and the wire:
//! - `backend/` - HTTP client for the prediction API
//! - `form` - numeric coercion and range validation
//! - `controller` - page state and the submission/login flows
//! - `report` - risk assessment rendering
//! - `sections`/`content` - view routing and static copy

pub mod backend;
pub mod content;
pub mod controller;
pub mod diagnostics;
pub mod form;
pub mod report;
pub mod sections;
pub mod session;
