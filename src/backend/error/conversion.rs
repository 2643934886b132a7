/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Field errors are returned as a flat object keyed by form field:
 * ```json
 * { "email": "Email already exists" }
 * ```
 *
 * Everything else uses the generic shape:
 * ```json
 * { "error": "Unauthorized", "status": 401 }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        match self.field_errors() {
            Some(errors) => (status, Json(errors)).into_response(),
            None => {
                let body = serde_json::json!({
                    "error": self.message(),
                    "status": status.as_u16(),
                });
                (status, Json(body)).into_response()
            }
        }
    }
}
