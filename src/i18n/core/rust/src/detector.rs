/* src/i18n/core/rust/src/detector.rs */

use crate::config::{DetectionConfig, DetectionSource};
use crate::errors::I18nError;
use crate::locale::{best_match, parse_accept_language};
use crate::request::RequestContext;

pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Resolves a request to one supported locale by walking the configured sources.
#[derive(Debug, Clone)]
pub struct LocaleDetector {
  config: DetectionConfig,
}

impl LocaleDetector {
  pub fn new(config: DetectionConfig) -> Result<Self, I18nError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &DetectionConfig {
    &self.config
  }

  /// Detection chain: first source in `order` whose candidate resolves wins.
  /// Falls back to `fallback_locale`, then the first supported locale.
  pub fn detect(&self, request: &impl RequestContext) -> String {
    for source in &self.config.order {
      let Some(candidate) = self.candidate(*source, request) else {
        continue;
      };
      if let Some(locale) = self.pick(&candidate) {
        tracing::debug!(source = source.as_str(), %candidate, locale, "locale detected");
        return locale.to_string();
      }
      tracing::debug!(source = source.as_str(), %candidate, "candidate not supported");
    }
    self.config.default_locale().to_string()
  }

  /// Raw candidate string from one source; `None` when absent or empty.
  fn candidate(&self, source: DetectionSource, request: &impl RequestContext) -> Option<String> {
    let value = match source {
      DetectionSource::Params => request.param(&self.config.param_name).map(str::to_string),
      DetectionSource::Cookie => request.cookie(&self.config.cookie_name),
      DetectionSource::Header => request.header(ACCEPT_LANGUAGE).map(|header| {
        parse_accept_language(header).into_iter().map(|r| r.tag).collect::<Vec<_>>().join(",")
      }),
    };
    value.filter(|v| !v.trim().is_empty())
  }

  /// Strict then loose match of a (possibly comma-joined) candidate list.
  pub fn pick(&self, candidate: &str) -> Option<&str> {
    best_match(&self.config.supported_locales, candidate)
  }
}
