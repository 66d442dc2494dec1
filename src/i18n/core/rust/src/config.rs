/* src/i18n/core/rust/src/config.rs */

use serde::Deserialize;

use crate::errors::I18nError;
use crate::locale::split_tag;

pub const DEFAULT_COOKIE_NAME: &str = "i18next";
pub const DEFAULT_PARAM_NAME: &str = "lng";
pub const DEFAULT_NAMESPACE: &str = "translation";
pub const DEFAULT_ROUTES_ROOT: &str = "src/routes";

/// Where a locale candidate is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
  Params,
  Cookie,
  Header,
}

impl DetectionSource {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Params => "params",
      Self::Cookie => "cookie",
      Self::Header => "header",
    }
  }
}

pub fn default_order() -> Vec<DetectionSource> {
  vec![DetectionSource::Params, DetectionSource::Cookie, DetectionSource::Header]
}

/// Locale detection settings. `supported_locales` is ordered; its first entry
/// is the default when nothing matches and no fallback is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
  pub cookie_name: String,
  pub param_name: String,
  pub order: Vec<DetectionSource>,
  pub supported_locales: Vec<String>,
  pub fallback_locale: Option<String>,
}

impl DetectionConfig {
  pub fn new<I, S>(supported_locales: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      cookie_name: DEFAULT_COOKIE_NAME.to_string(),
      param_name: DEFAULT_PARAM_NAME.to_string(),
      order: default_order(),
      supported_locales: supported_locales.into_iter().map(Into::into).collect(),
      fallback_locale: None,
    }
  }

  pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
    self.cookie_name = name.into();
    self
  }

  pub fn param_name(mut self, name: impl Into<String>) -> Self {
    self.param_name = name.into();
    self
  }

  pub fn order(mut self, order: Vec<DetectionSource>) -> Self {
    self.order = order;
    self
  }

  pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
    self.fallback_locale = Some(locale.into());
    self
  }

  pub fn validate(&self) -> Result<(), I18nError> {
    if self.supported_locales.iter().all(|l| l.trim().is_empty()) {
      return Err(I18nError::NoSupportedLocales);
    }
    if let Some(bad) = self.supported_locales.iter().find(|l| split_tag(l).is_none()) {
      return Err(I18nError::invalid(format!("unsupported locale tag {bad:?}")));
    }
    for (i, source) in self.order.iter().enumerate() {
      if self.order[..i].contains(source) {
        return Err(I18nError::invalid(format!("duplicate source in order: {}", source.as_str())));
      }
    }
    if self.cookie_name.is_empty() {
      return Err(I18nError::invalid("cookie name must not be empty"));
    }
    if self.param_name.is_empty() {
      return Err(I18nError::invalid("param name must not be empty"));
    }
    Ok(())
  }

  /// Locale returned when no source resolves.
  pub fn default_locale(&self) -> &str {
    match self.fallback_locale.as_deref() {
      Some(fallback) if !fallback.is_empty() => fallback,
      _ => self.supported_locales.first().map(String::as_str).unwrap_or_default(),
    }
  }
}

/// `[detector]` section of the options file. Locale lists left out here are
/// inherited from the top level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectorSection {
  pub cookie: Option<String>,
  pub param: Option<String>,
  pub order: Option<Vec<DetectionSource>>,
  pub supported_locales: Option<Vec<String>>,
  pub fallback_locale: Option<String>,
}

/// A namespace declaration: one identifier or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Namespaces {
  One(String),
  Many(Vec<String>),
}

impl Namespaces {
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    let slice = match self {
      Self::One(ns) => std::slice::from_ref(ns),
      Self::Many(list) => list.as_slice(),
    };
    slice.iter().map(String::as_str)
  }
}

impl Default for Namespaces {
  fn default() -> Self {
    Self::One(DEFAULT_NAMESPACE.to_string())
  }
}

/// Top-level i18n options, usually read from `i18n.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nOptions {
  pub supported_locales: Vec<String>,
  #[serde(default)]
  pub fallback_locale: Option<String>,
  #[serde(default)]
  pub default_ns: Namespaces,
  #[serde(default = "default_routes_root")]
  pub routes_root: String,
  #[serde(default)]
  pub detector: DetectorSection,
}

fn default_routes_root() -> String {
  DEFAULT_ROUTES_ROOT.to_string()
}

impl I18nOptions {
  pub fn new<I, S>(supported_locales: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      supported_locales: supported_locales.into_iter().map(Into::into).collect(),
      fallback_locale: None,
      default_ns: Namespaces::default(),
      routes_root: default_routes_root(),
      detector: DetectorSection::default(),
    }
  }

  pub fn from_toml_str(content: &str) -> Result<Self, I18nError> {
    let options: Self = toml::from_str(content)?;
    options.validate()?;
    Ok(options)
  }

  pub fn validate(&self) -> Result<(), I18nError> {
    if self.default_ns.iter().all(str::is_empty) {
      return Err(I18nError::invalid("default_ns must name at least one namespace"));
    }
    self.detection_config().validate()
  }

  /// Merge the `[detector]` section over the top-level locale settings.
  pub fn detection_config(&self) -> DetectionConfig {
    let section = &self.detector;
    let supported =
      section.supported_locales.clone().unwrap_or_else(|| self.supported_locales.clone());
    let mut config = DetectionConfig::new(supported);
    if let Some(ref cookie) = section.cookie {
      config = config.cookie_name(cookie.clone());
    }
    if let Some(ref param) = section.param {
      config = config.param_name(param.clone());
    }
    if let Some(ref order) = section.order {
      config = config.order(order.clone());
    }
    if let Some(fallback) = section.fallback_locale.clone().or_else(|| self.fallback_locale.clone())
    {
      config = config.fallback_locale(fallback);
    }
    config
  }

  pub fn default_namespaces(&self) -> Vec<String> {
    self.default_ns.iter().filter(|ns| !ns.is_empty()).map(str::to_string).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detection_defaults() {
    let config = DetectionConfig::new(["en", "es"]);
    assert_eq!(config.cookie_name, "i18next");
    assert_eq!(config.param_name, "lng");
    assert_eq!(config.order, default_order());
    assert_eq!(config.default_locale(), "en");
  }

  #[test]
  fn fallback_beats_first_supported() {
    let config = DetectionConfig::new(["en", "es"]).fallback_locale("es");
    assert_eq!(config.default_locale(), "es");
  }

  #[test]
  fn empty_fallback_uses_first_supported() {
    let config = DetectionConfig::new(["fr", "en"]).fallback_locale("");
    assert_eq!(config.default_locale(), "fr");
  }

  #[test]
  fn empty_supported_rejected() {
    let config = DetectionConfig::new(Vec::<String>::new());
    assert!(matches!(config.validate(), Err(I18nError::NoSupportedLocales)));
    let blank = DetectionConfig::new([""]);
    assert!(matches!(blank.validate(), Err(I18nError::NoSupportedLocales)));
  }

  #[test]
  fn blank_or_malformed_entry_rejected() {
    for list in [vec!["", "en"], vec!["en", " "], vec!["en", "es_MX"], vec!["en-US-x-y"]] {
      let config = DetectionConfig::new(list.clone());
      assert!(matches!(config.validate(), Err(I18nError::InvalidConfig(_))), "{list:?}");
    }
    assert!(DetectionConfig::new(["en", "es-MX", "zh-Hant-TW"]).validate().is_ok());
  }

  #[test]
  fn duplicate_order_rejected() {
    use DetectionSource::*;
    let config = DetectionConfig::new(["en"]).order(vec![Cookie, Header, Cookie]);
    let err = config.validate().map_err(|e| e.to_string());
    assert_eq!(err, Err("invalid i18n config: duplicate source in order: cookie".to_string()));
  }

  #[test]
  fn empty_cookie_name_rejected() {
    let config = DetectionConfig::new(["en"]).cookie_name("");
    assert!(matches!(config.validate(), Err(I18nError::InvalidConfig(_))));
  }

  #[test]
  fn parse_minimal_toml() {
    let options = I18nOptions::from_toml_str(r#"supported_locales = ["en", "es"]"#)
      .expect("valid config");
    assert_eq!(options.routes_root, "src/routes");
    assert_eq!(options.default_namespaces(), vec!["translation"]);
    assert_eq!(options.detection_config().order, default_order());
  }

  #[test]
  fn parse_full_toml() {
    let options = I18nOptions::from_toml_str(
      r#"
supported_locales = ["en", "es", "fr"]
fallback_locale = "en"
default_ns = ["common", "translation"]
routes_root = "/app/src/routes"

[detector]
cookie = "lang"
param = "locale"
order = ["header", "cookie"]
"#,
    )
    .expect("valid config");
    let config = options.detection_config();
    assert_eq!(config.cookie_name, "lang");
    assert_eq!(config.param_name, "locale");
    assert_eq!(config.order, vec![DetectionSource::Header, DetectionSource::Cookie]);
    assert_eq!(config.supported_locales, vec!["en", "es", "fr"]);
    assert_eq!(config.fallback_locale.as_deref(), Some("en"));
    assert_eq!(options.default_namespaces(), vec!["common", "translation"]);
  }

  #[test]
  fn detector_section_overrides_locales() {
    let options = I18nOptions::from_toml_str(
      r#"
supported_locales = ["en", "es"]
fallback_locale = "en"

[detector]
supported_locales = ["es"]
fallback_locale = "es"
"#,
    )
    .expect("valid config");
    let config = options.detection_config();
    assert_eq!(config.supported_locales, vec!["es"]);
    assert_eq!(config.default_locale(), "es");
  }

  #[test]
  fn empty_locales_fail_fast() {
    let err = I18nOptions::from_toml_str("supported_locales = []");
    assert!(matches!(err, Err(I18nError::NoSupportedLocales)));
  }

  #[test]
  fn unknown_source_rejected() {
    let err = I18nOptions::from_toml_str(
      r#"
supported_locales = ["en"]
[detector]
order = ["session"]
"#,
    );
    assert!(matches!(err, Err(I18nError::Toml(_))));
  }

  #[test]
  fn blank_default_ns_rejected() {
    let err = I18nOptions::from_toml_str(
      r#"
supported_locales = ["en"]
default_ns = ""
"#,
    );
    assert!(matches!(err, Err(I18nError::InvalidConfig(_))));
  }

  #[test]
  fn namespaces_iter() {
    assert_eq!(Namespaces::One("a".into()).iter().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(
      Namespaces::Many(vec!["a".into(), "b".into()]).iter().collect::<Vec<_>>(),
      vec!["a", "b"]
    );
  }
}
