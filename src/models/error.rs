use axum::{http::StatusCode, response::IntoResponse};
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Sqlx failed: {0}")]
    Sqlx(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Api error: {1}")]
    Api(StatusCode, String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {1}")]
    Constraint(StatusCode, String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &e {
            let status = match db_error.kind() {
                ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation => {
                    Some(StatusCode::BAD_REQUEST)
                }
                ErrorKind::UniqueViolation | ErrorKind::CheckViolation => {
                    Some(StatusCode::CONFLICT)
                }
                _ => None,
            };

            if let Some(status) = status {
                return ServerError::Constraint(status, db_error.message().to_string());
            }
        }

        match e {
            sqlx::Error::RowNotFound => ServerError::NotFound("Entity does not exist".into()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => ServerError::Unavailable(e.to_string()),
            other => ServerError::Sqlx(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Sqlx(e) => {
                error!("Sqlx failed with error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
            ServerError::Internal(e) => {
                error!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
            ServerError::Api(sc, msg) => {
                warn!("Api error: {} - {}", sc, msg);
                (sc, msg)
            }
            ServerError::NotFound(e) => {
                warn!("Entity not found: {}", e);
                (StatusCode::NOT_FOUND, e)
            }
            ServerError::Constraint(sc, e) => {
                warn!("Constraint violation: {}", e);
                let msg = if sc == StatusCode::BAD_REQUEST {
                    "Request references an entity that does not exist"
                } else {
                    "Request conflicts with existing data"
                };
                (sc, String::from(msg))
            }
            ServerError::Unavailable(e) => {
                error!("Database unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    String::from("Database unavailable"),
                )
            }
        }
        .into_response()
    }
}
