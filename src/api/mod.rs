//! API Module
//!
//! The command layer the front ends (CLI and console) call into.

pub mod commands;
