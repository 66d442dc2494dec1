/* src/i18n/core/rust/src/i18n.rs */

use crate::config::I18nOptions;
use crate::detector::LocaleDetector;
use crate::errors::I18nError;
use crate::instance::I18nInstance;
use crate::namespace::{NamespaceResolver, RouteLookup};
use crate::request::RequestContext;
use crate::store::{I18nEvent, I18nStore};

/// Entry point for hosts: validated options plus the detector and namespace
/// resolver built from them. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct I18n {
  options: I18nOptions,
  detector: LocaleDetector,
  namespaces: NamespaceResolver,
}

impl I18n {
  pub fn new(options: I18nOptions) -> Result<Self, I18nError> {
    options.validate()?;
    let detector = LocaleDetector::new(options.detection_config())?;
    let namespaces =
      NamespaceResolver::new(options.default_namespaces(), options.routes_root.clone());
    Ok(Self { options, detector, namespaces })
  }

  pub fn from_toml_str(content: &str) -> Result<Self, I18nError> {
    Self::new(I18nOptions::from_toml_str(content)?)
  }

  pub fn options(&self) -> &I18nOptions {
    &self.options
  }

  pub fn detector(&self) -> &LocaleDetector {
    &self.detector
  }

  pub fn get_locale(&self, request: &impl RequestContext) -> String {
    self.detector.detect(request)
  }

  /// Requests without a matched route only get the default namespaces.
  pub async fn get_namespaces(
    &self,
    route_id: Option<&str>,
    lookup: &dyn RouteLookup,
  ) -> Vec<String> {
    self.namespaces.resolve(route_id.unwrap_or_default(), lookup).await
  }

  /// Detect the locale and namespaces for one request.
  pub async fn init(
    &self,
    request: &impl RequestContext,
    route_id: Option<&str>,
    lookup: &dyn RouteLookup,
  ) -> I18nInstance {
    let language = self.get_locale(request);
    let namespaces = self.get_namespaces(route_id, lookup).await;
    tracing::debug!(%language, ?namespaces, route_id, "i18n initialized");
    I18nInstance {
      fallback_locale: language.clone(),
      language,
      namespaces,
      default_namespaces: self.namespaces.defaults().to_vec(),
      supported_locales: self.detector.config().supported_locales.clone(),
    }
  }

  /// Like `init`, but wraps the instance in a store that has already
  /// announced `Initialized`.
  pub async fn init_store(
    &self,
    request: &impl RequestContext,
    route_id: Option<&str>,
    lookup: &dyn RouteLookup,
  ) -> I18nStore {
    let store = I18nStore::new(self.init(request, route_id, lookup).await);
    store.publish(I18nEvent::Initialized);
    store
  }
}
