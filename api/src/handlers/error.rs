//! Mapping of domain errors to HTTP responses
//!
//! Every failure gets a request id. Client errors echo the domain reason;
//! internal errors log the full error under the id and return only an
//! opaque reference the user can quote to support.

use actix_web::HttpResponse;
use uuid::Uuid;

use gl_core::errors::{AuthError, DomainError};
use gl_shared::types::ApiResponse;

/// Convert a domain error into the HTTP response for the client
pub fn to_response(error: &DomainError) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();

    let (mut builder, message) = match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
            (HttpResponse::BadRequest(), error.to_string())
        }

        DomainError::Auth(auth) => match auth {
            AuthError::InvalidEmail
            | AuthError::PasswordTooShort { .. }
            | AuthError::VerificationNotPending
            | AuthError::VerificationCodeExpired => {
                (HttpResponse::BadRequest(), auth.to_string())
            }

            AuthError::InvalidCredentials
            | AuthError::InvalidVerificationCode
            | AuthError::SessionExpired => (HttpResponse::Unauthorized(), auth.to_string()),

            AuthError::EmailAlreadyRegistered => (HttpResponse::Conflict(), auth.to_string()),

            AuthError::ResendCooldown { .. } | AuthError::MaxAttemptsExceeded => {
                (HttpResponse::TooManyRequests(), auth.to_string())
            }

            AuthError::UserNotFound => (HttpResponse::NotFound(), auth.to_string()),

            AuthError::MailDeliveryFailure => {
                tracing::error!(
                    request_id = %request_id,
                    error = %auth,
                    "Mail delivery failure"
                );
                (HttpResponse::BadGateway(), auth.to_string())
            }
        },

        DomainError::NotFound { resource } => (
            HttpResponse::NotFound(),
            format!("Resource not found: {}", resource),
        ),

        DomainError::Unauthorized => {
            (HttpResponse::Unauthorized(), "Unauthorized".to_string())
        }

        DomainError::Internal { .. } => {
            tracing::error!(
                request_id = %request_id,
                error = %error,
                "Internal error while handling request"
            );
            (
                HttpResponse::InternalServerError(),
                format!("Server error ({})", request_id),
            )
        }
    };

    builder.json(ApiResponse::<()>::error(message).with_request_id(request_id))
}

/// Reject a request whose DTO failed validator checks
pub fn validation_failure(errors: &validator::ValidationErrors) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();

    HttpResponse::BadRequest().json(
        ApiResponse::<()>::error(format!("Invalid request data: {}", fields.join(", ")))
            .with_request_id(request_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DomainError::Auth(AuthError::InvalidEmail),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Auth(AuthError::InvalidVerificationCode),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Auth(AuthError::EmailAlreadyRegistered),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::Auth(AuthError::ResendCooldown { seconds: 12 }),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                DomainError::Auth(AuthError::MaxAttemptsExceeded),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                DomainError::Auth(AuthError::UserNotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::Auth(AuthError::MailDeliveryFailure),
                StatusCode::BAD_GATEWAY,
            ),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                DomainError::Internal {
                    message: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(to_response(&error).status(), expected, "{:?}", error);
        }
    }
}
