//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store load/save around query and mutation logic.
//! - Keep request-handling layers decoupled from storage details.

pub mod food_service;
