//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The external settings store the theme is read from
//! - Error types

pub mod error;
pub mod settings_store;
