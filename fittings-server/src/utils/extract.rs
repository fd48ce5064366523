//! Extractors whose rejections render as [`AppError`]
//!
//! Axum's own extractors answer with plain-text bodies; these wrappers keep
//! malformed input inside the JSON error envelope.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{FittingType, ItemCreate, ItemUpdate};

use super::error::{AppError, ErrorCode};

/// Request body type that can explain why a well-formed JSON document was rejected
///
/// The explanation looks at the decoded document, so values echoed back by
/// serde in its messages never influence the error code.
pub trait JsonPayload: DeserializeOwned {
    fn rejection(_body: &Value, err: serde_json::Error) -> AppError {
        invalid_body(&err)
    }
}

fn invalid_body(err: &serde_json::Error) -> AppError {
    AppError::validation("Invalid request body").with_detail("reason", err.to_string())
}

impl JsonPayload for ItemCreate {
    fn rejection(body: &Value, err: serde_json::Error) -> AppError {
        if let Some(raw) = body.get("type").and_then(Value::as_str)
            && let Err(unknown) = raw.parse::<FittingType>()
        {
            return AppError::new(ErrorCode::InvalidFittingType)
                .with_detail("type", unknown.0)
                .with_detail("expected", FittingType::ALL.map(|t| t.as_str()).to_vec());
        }
        invalid_body(&err)
    }
}

impl JsonPayload for ItemUpdate {
    fn rejection(body: &Value, err: serde_json::Error) -> AppError {
        let rejected: Vec<&str> = body
            .as_object()
            .map(|fields| {
                fields
                    .keys()
                    .map(String::as_str)
                    .filter(|key| !ItemUpdate::FIELDS.contains(key))
                    .collect()
            })
            .unwrap_or_default();

        if rejected.is_empty() {
            invalid_body(&err)
        } else {
            AppError::new(ErrorCode::UnknownPatchField).with_detail("fields", rejected)
        }
    }
}

/// JSON body
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: JsonPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        match T::deserialize(&body) {
            Ok(payload) => Ok(AppJson(payload)),
            Err(err) => Err(T::rejection(&body, err)),
        }
    }
}

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
