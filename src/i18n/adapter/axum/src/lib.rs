/* src/i18n/adapter/axum/src/lib.rs */

mod error;
mod middleware;

use std::sync::Arc;

use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use seam_i18n::I18nInstance;

pub use error::MissingI18nContext;
pub use middleware::{I18nLayerState, i18n_middleware};

/// Re-export seam-i18n core for convenience
pub use seam_i18n;

/// Extractor for the instance set up by `i18n_middleware`.
#[derive(Debug, Clone)]
pub struct I18nContext(pub Arc<I18nInstance>);

impl<S> FromRequestParts<S> for I18nContext
where
  S: Send + Sync,
{
  type Rejection = MissingI18nContext;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    parts.extensions.get::<Arc<I18nInstance>>().cloned().map(Self).ok_or(MissingI18nContext)
  }
}

/// Extension trait that installs the i18n middleware on every route added so far.
pub trait I18nRouterExt {
  fn with_i18n(self, state: I18nLayerState) -> Self;
}

impl<S> I18nRouterExt for Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  fn with_i18n(self, state: I18nLayerState) -> Self {
    self.route_layer(axum::middleware::from_fn_with_state(state, i18n_middleware))
  }
}
