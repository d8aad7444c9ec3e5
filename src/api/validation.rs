use axum::{Json, extract::FromRequest, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use validator::{Validate, ValidationError};

use crate::models::error::ServerError;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ServerError::Api(StatusCode::BAD_REQUEST, "Expected JSON".to_string()))?;

        let value = if content_type.starts_with("application/json") {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(val)) => val,
                Err(rejection) => {
                    return Err(ServerError::Api(
                        StatusCode::BAD_REQUEST,
                        rejection.body_text(),
                    ));
                }
            }
        } else {
            return Err(ServerError::Api(
                StatusCode::BAD_REQUEST,
                "Expected JSON".to_string(),
            ));
        };

        match value.validate() {
            Ok(_) => {
                debug!("Validation passed");
                Ok(ValidatedJson(value))
            }
            Err(e) => {
                let error_msg = format_validation_errors(&e);
                info!("Validation error: {}", error_msg);
                Err(ServerError::Api(StatusCode::BAD_REQUEST, error_msg))
            }
        }
    }
}

/// Format validation errors into a user-friendly message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} validation failed", field));
            messages.push(msg);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.sort();
        messages.join(", ")
    }
}

/// Validate week days: at least one day, every entry a code between 0 and 6, no repeats
pub fn validate_week_days(days: &[String]) -> Result<(), ValidationError> {
    if days.is_empty() {
        return Err(ValidationError::new("week_days_empty")
            .with_message("At least one week day is required".into()));
    }

    for (i, day) in days.iter().enumerate() {
        // single digit codes only, 0 (sunday) to 6 (saturday)
        if !matches!(day.as_bytes(), [b'0'..=b'6']) {
            return Err(ValidationError::new("week_days_invalid")
                .with_message("Week days must be codes between 0 and 6".into()));
        }

        if days[..i].contains(day) {
            return Err(ValidationError::new("week_days_duplicate")
                .with_message("Week days cannot contain duplicates".into()));
        }
    }

    Ok(())
}
