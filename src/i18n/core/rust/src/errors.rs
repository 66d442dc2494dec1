/* src/i18n/core/rust/src/errors.rs */

use thiserror::Error;

/// Configuration errors. Everything past construction degrades instead of failing.
#[derive(Debug, Error)]
pub enum I18nError {
  #[error("supported locales must not be empty")]
  NoSupportedLocales,
  #[error("invalid i18n config: {0}")]
  InvalidConfig(String),
  #[error("failed to parse i18n config: {0}")]
  Toml(#[from] toml::de::Error),
}

impl I18nError {
  pub fn invalid(msg: impl Into<String>) -> Self {
    Self::InvalidConfig(msg.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_format() {
    assert_eq!(I18nError::NoSupportedLocales.to_string(), "supported locales must not be empty");
    assert_eq!(
      I18nError::invalid("cookie name must not be empty").to_string(),
      "invalid i18n config: cookie name must not be empty"
    );
  }

  #[test]
  fn toml_error_converts() {
    let err = toml::from_str::<toml::Value>("= broken").map_err(I18nError::from);
    assert!(matches!(err, Err(I18nError::Toml(_))));
  }
}
