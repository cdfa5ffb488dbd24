//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input before it reaches the entity store.
//! - Orchestrate multi-step flows such as roster import and drafting.
//! - Keep FFI/UI layers decoupled from store internals.

pub mod planner_service;
pub mod roster_service;
pub mod sample;
pub mod task_service;
