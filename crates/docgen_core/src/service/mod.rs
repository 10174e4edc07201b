//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and generation calls into use-case level APIs:
//!   account flows, project dashboard/wizard flows, and the per-section
//!   editor session.
//! - Keep UI layers decoupled from transport and prompt details.

pub mod account_service;
pub mod editor_service;
pub mod project_service;
