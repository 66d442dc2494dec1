/* src/i18n/adapter/axum/src/middleware.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, MatchedPath, RawPathParams, Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::BodyExt;
use seam_i18n::{I18n, RequestParts, RouteLookup, set_html_lang};

/// Shared state for `i18n_middleware`.
#[derive(Clone)]
pub struct I18nLayerState {
  pub i18n: Arc<I18n>,
  pub lookup: Arc<dyn RouteLookup>,
}

impl I18nLayerState {
  pub fn new(i18n: I18n, lookup: impl RouteLookup + 'static) -> Self {
    Self { i18n: Arc::new(i18n), lookup: Arc::new(lookup) }
  }
}

/// Snapshot the parts of the request the detector reads.
fn request_view(headers: &HeaderMap, params: Vec<(String, String)>) -> RequestParts {
  let mut view = RequestParts::new().with_params(params);
  let cookies: Vec<&str> = headers.get_all(COOKIE).iter().filter_map(|v| v.to_str().ok()).collect();
  if !cookies.is_empty() {
    view = view.with_cookie_header(cookies.join("; "));
  }
  if let Some(lang) = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) {
    view = view.with_header(ACCEPT_LANGUAGE.as_str(), lang);
  }
  view
}

fn is_html(response: &Response) -> bool {
  response
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.starts_with("text/html"))
}

async fn rewrite_html_lang(response: Response, language: &str) -> Response {
  let (mut parts, body) = response.into_parts();
  let bytes = match body.collect().await {
    Ok(collected) => collected.to_bytes(),
    Err(e) => {
      tracing::warn!(error = %e, "failed to buffer html response");
      return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
  };
  let Ok(html) = std::str::from_utf8(&bytes) else {
    return Response::from_parts(parts, Body::from(bytes));
  };
  let rewritten = set_html_lang(html, language);
  parts.headers.remove(CONTENT_LENGTH);
  Response::from_parts(parts, Body::from(rewritten))
}

/// Per-request i18n setup. Detects the locale, resolves namespaces for the
/// matched route and exposes the instance through request extensions. HTML
/// responses get the detected language on `<html lang>`.
///
/// Install with `Router::route_layer` so `MatchedPath` and path params are set.
pub async fn i18n_middleware(
  State(state): State<I18nLayerState>,
  request: Request,
  next: Next,
) -> Response {
  let (mut parts, body) = request.into_parts();

  let params: Vec<(String, String)> = RawPathParams::from_request_parts(&mut parts, &state)
    .await
    .map(|raw| raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    .unwrap_or_default();
  let route_id = parts.extensions.get::<MatchedPath>().map(|m| m.as_str().to_string());
  let view = request_view(&parts.headers, params);

  let instance =
    Arc::new(state.i18n.init(&view, route_id.as_deref(), state.lookup.as_ref()).await);
  parts.extensions.insert(instance.clone());

  let response = next.run(Request::from_parts(parts, body)).await;
  if is_html(&response) { rewrite_html_lang(response, &instance.language).await } else { response }
}
