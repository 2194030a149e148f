//! Directory service library crate.
//!
//! # Purpose
//! Exposes the directory HTTP API, configuration, observability, and the
//! in-memory store for use by the binary and tests.
pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod observability;
pub mod store;
