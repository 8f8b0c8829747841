use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde_json::Value;

use crate::{
    error::AppError,
    validation::{FieldError, FromJsonBody, ValidationErrors},
};

/// JSON body extractor that runs the pure validators in [`crate::validation`]
/// and rejects with a 422 carrying field-level detail.
///
/// A missing `Content-Type` is treated as JSON. Any other non-JSON content
/// type fails validation because the body cannot be read as an object.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromJsonBody,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content(req.headers());
        let body = Bytes::from_request(req, state).await?;

        if !declared_json {
            let input = Value::String(String::from_utf8_lossy(&body).into_owned());
            return Err(ValidationErrors::from(FieldError::not_an_object(input)).into());
        }

        Ok(ValidatedJson(T::from_json_body(&body)?))
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
