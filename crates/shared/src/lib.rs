//! Shared utilities and common types for Condo Manager backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic for request payloads
//! - Cursor-based pagination helpers

pub mod pagination;
pub mod validation;
