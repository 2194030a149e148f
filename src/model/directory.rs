//! Directory record model and payload validation.
//!
//! # Purpose
//! Defines the stored contact record and the create/replace/patch payloads.
//! Payloads arrive as raw JSON so that type mismatches surface as validation
//! errors instead of extractor rejections.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// A contact record as stored and returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Directory {
    pub id: u64,
    pub name: String,
    pub emails: Vec<String>,
}

/// Reason a payload was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("`{0}` must be a string")]
    NotAString(&'static str),
    #[error("`{0}` must be an array")]
    NotAnArray(&'static str),
    #[error("`emails[{0}]` must be a string")]
    NonStringEmail(usize),
}

/// Full payload accepted by create and replace.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct DirectoryRequest {
    pub name: String,
    pub emails: Vec<String>,
}

impl DirectoryRequest {
    /// Validate a raw JSON payload and extract `name` and `emails`.
    ///
    /// Fields other than `name` and `emails` are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = as_object(value)?;
        let name = match object.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(ValidationError::NotAString("name")),
            None => return Err(ValidationError::MissingField("name")),
        };
        let emails = match object.get("emails") {
            Some(Value::Array(items)) => parse_emails(items)?,
            Some(_) => return Err(ValidationError::NotAnArray("emails")),
            None => return Err(ValidationError::MissingField("emails")),
        };
        Ok(Self { name, emails })
    }
}

/// Partial payload accepted by patch.
///
/// A `name` that is not a string and an `emails` value that is not an array
/// are ignored rather than rejected. An `emails` array with a non-string
/// element rejects the whole patch.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPatchRequest {
    pub name: Option<String>,
    pub emails: Option<Vec<String>>,
}

impl DirectoryPatchRequest {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = as_object(value)?;
        let name = match object.get("name") {
            Some(Value::String(name)) => Some(name.clone()),
            _ => None,
        };
        let emails = match object.get("emails") {
            Some(Value::Array(items)) => Some(parse_emails(items)?),
            _ => None,
        };
        Ok(Self { name, emails })
    }

    /// Apply both fields to `record`. The id is never touched.
    pub fn apply(self, record: &mut Directory) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(emails) = self.emails {
            record.emails = emails;
        }
    }
}

/// Whether `value` is a complete, well-typed directory payload.
pub fn validate_full_record(value: &Value) -> bool {
    DirectoryRequest::from_value(value).is_ok()
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::NotAnObject)
}

fn parse_emails(items: &[Value]) -> Result<Vec<String>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(email) => Ok(email.clone()),
            _ => Err(ValidationError::NonStringEmail(index)),
        })
        .collect()
}
