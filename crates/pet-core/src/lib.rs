//! # pet-core
//!
//! Core types shared across the pet store crates:
//! - The `Pet` entity with its defaulting, tagging and equality rules
//! - Response envelope types and the fixed response messages

pub mod entities;
pub mod responses;
