/* src/i18n/core/rust/src/request.rs */

use std::collections::HashMap;

/// Read-only view of an incoming request, as far as locale detection cares.
pub trait RequestContext {
  /// Route path parameter, e.g. `lng` in `/[[lng]]/about`.
  fn param(&self, name: &str) -> Option<&str>;
  fn cookie(&self, name: &str) -> Option<String>;
  /// Header lookup; names compare case-insensitively.
  fn header(&self, name: &str) -> Option<&str>;
}

/// Owned request snapshot that adapters fill from their framework's request type.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
  params: HashMap<String, String>,
  cookie_header: Option<String>,
  headers: Vec<(String, String)>,
}

impl RequestParts {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(name.into(), value.into());
    self
  }

  pub fn with_params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
    self.params.extend(params);
    self
  }

  /// Raw `Cookie` header value (`a=1; b=2`).
  pub fn with_cookie_header(mut self, header: impl Into<String>) -> Self {
    self.cookie_header = Some(header.into());
    self
  }

  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    let name = name.into();
    if name.eq_ignore_ascii_case("cookie") {
      self.cookie_header = Some(value.into());
    } else {
      self.headers.push((name, value.into()));
    }
    self
  }
}

impl RequestContext for RequestParts {
  fn param(&self, name: &str) -> Option<&str> {
    self.params.get(name).map(String::as_str)
  }

  fn cookie(&self, name: &str) -> Option<String> {
    self.cookie_header.as_deref().and_then(|h| parse_cookie(h, name))
  }

  fn header(&self, name: &str) -> Option<&str> {
    self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
  }
}

/// Extract one cookie value from a `Cookie` header. Surrounding quotes are
/// stripped and the value is percent-decoded; undecodable values are kept raw.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
  for pair in header.split(';') {
    let pair = pair.trim();
    if let Some((k, v)) = pair.split_once('=') {
      if k.trim() == name {
        let v = v.trim();
        let v = v.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(v);
        let decoded = urlencoding::decode(v).map_or_else(|_| v.to_string(), |d| d.into_owned());
        return Some(decoded);
      }
    }
  }
  None
}
