/* src/i18n/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rejection for `I18nContext` on routes the middleware does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingI18nContext;

impl MissingI18nContext {
  pub const MESSAGE: &'static str =
    "No i18n context found. Is the i18n middleware installed on this route?";
}

impl IntoResponse for MissingI18nContext {
  fn into_response(self) -> Response {
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": "INTERNAL_ERROR",
        "message": Self::MESSAGE,
        "transient": false,
      }
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
  }
}
