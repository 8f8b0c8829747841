//! Request body validation.
//!
//! Turns raw body bytes into typed request values, or into a list of
//! field-level failures rendered as `{"detail": [...]}`. Nothing here knows
//! about HTTP; the extractor in [`crate::extract`] is the only caller on the
//! request path.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::message::ChatRequest;

/// One segment of the path to an offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocItem::Key(key) => f.write_str(key),
            LocItem::Index(index) => write!(f, "{}", index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    JsonInvalid,
    ModelAttributesType,
    Missing,
    StringType,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::JsonInvalid => "JSON decode error",
            ErrorKind::ModelAttributesType => {
                "Input should be a valid dictionary or object to extract fields from"
            }
            ErrorKind::Missing => "Field required",
            ErrorKind::StringType => "Input should be a valid string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(kind: ErrorKind, loc: Vec<LocItem>, input: Option<Value>) -> Self {
        Self {
            kind,
            loc,
            msg: kind.message().to_string(),
            input,
        }
    }

    pub fn json_invalid(offset: usize) -> Self {
        Self::new(
            ErrorKind::JsonInvalid,
            vec!["body".into(), LocItem::Index(offset)],
            None,
        )
    }

    /// The body parsed, but is not a JSON object.
    pub fn not_an_object(input: Value) -> Self {
        Self::new(ErrorKind::ModelAttributesType, vec!["body".into()], Some(input))
    }

    pub fn missing(loc: Vec<LocItem>, input: Option<Value>) -> Self {
        Self::new(ErrorKind::Missing, loc, input)
    }

    pub fn string_type(loc: Vec<LocItem>, input: Value) -> Self {
        Self::new(ErrorKind::StringType, loc, Some(input))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc: Vec<String> = self.loc.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", loc.join("."), self.msg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.detail
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            detail: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.detail.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Types that can be built from a JSON request body.
pub trait FromJsonBody: Sized {
    fn from_json_body(body: &[u8]) -> Result<Self, ValidationErrors>;
}

impl FromJsonBody for ChatRequest {
    fn from_json_body(body: &[u8]) -> Result<Self, ValidationErrors> {
        parse_chat_request(body)
    }
}

pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, ValidationErrors> {
    let fields = parse_object(body)?;
    let message = required_string(&fields, "message")?;
    Ok(ChatRequest { message })
}

/// Parse the body as a JSON object. An empty body counts as a missing body.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationErrors> {
    if body.is_empty() {
        return Err(FieldError::missing(vec!["body".into()], None).into());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|err| FieldError::json_invalid(error_offset(body, &err)))?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(FieldError::not_an_object(other).into()),
    }
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String, FieldError> {
    let loc = vec![LocItem::from("body"), LocItem::from(name)];
    match fields.get(name) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(FieldError::string_type(loc, other.clone())),
        None => Err(FieldError::missing(loc, Some(Value::Object(fields.clone())))),
    }
}

// serde_json reports 1-based line/column; callers want a byte offset.
fn error_offset(body: &[u8], err: &serde_json::Error) -> usize {
    let line_start: usize = body
        .split(|byte| *byte == b'\n')
        .take(err.line().saturating_sub(1))
        .map(|line| line.len() + 1)
        .sum();
    (line_start + err.column().saturating_sub(1)).min(body.len())
}
