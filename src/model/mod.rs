//! Directory data model module.
//!
//! # Purpose
//! Re-exports the directory record, request payloads, and validation helpers
//! used by the API and store layers.
mod directory;

pub use directory::{
    Directory, DirectoryPatchRequest, DirectoryRequest, ValidationError, validate_full_record,
};
