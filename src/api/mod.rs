//! Directory HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules, pagination, error shaping, and wire types.
pub mod directories;
pub mod error;
pub mod openapi;
pub mod pagination;
pub mod system;
pub mod types;
