//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into administration use-cases.
//! - Keep UI layers decoupled from storage details.

pub mod habilitations_service;
