//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and persistence into use-case APIs.
//! - Keep UI layers decoupled from storage details.

pub mod task_service;
