/* src/i18n/core/rust/src/instance.rs */

use serde::Serialize;

/// Per-request translation state handed to views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nInstance {
  pub language: String,
  pub namespaces: Vec<String>,
  pub default_namespaces: Vec<String>,
  pub fallback_locale: String,
  pub supported_locales: Vec<String>,
}

/// Options a hydrating client needs to rebuild the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
  pub lng: String,
  pub ns: Vec<String>,
  #[serde(rename = "defaultNS")]
  pub default_ns: Vec<String>,
  pub fallback_lng: String,
  pub supported_lngs: Vec<String>,
}

impl I18nInstance {
  pub fn init_options(&self) -> InitOptions {
    InitOptions {
      lng: self.language.clone(),
      ns: self.namespaces.clone(),
      default_ns: self.default_namespaces.clone(),
      fallback_lng: self.fallback_locale.clone(),
      supported_lngs: self.supported_locales.clone(),
    }
  }

  pub fn has_namespace(&self, ns: &str) -> bool {
    self.namespaces.iter().any(|n| n == ns)
  }
}

/// Rewrite the `lang` attribute of the document's `<html>` tag.
/// Documents without `<html lang="...">` are returned unchanged.
pub fn set_html_lang(html: &str, lang: &str) -> String {
  const OPEN: &str = "<html lang=\"";
  let Some(start) = html.find(OPEN) else {
    return html.to_string();
  };
  let value_start = start + OPEN.len();
  let Some(len) = html[value_start..].find('"') else {
    return html.to_string();
  };
  let mut out = String::with_capacity(html.len() + lang.len());
  out.push_str(&html[..value_start]);
  out.push_str(lang);
  out.push_str(&html[value_start + len..]);
  out
}
