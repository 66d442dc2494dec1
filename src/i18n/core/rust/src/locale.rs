/* src/i18n/core/rust/src/locale.rs */

/// One entry of an `Accept-Language` style list, e.g. `zh-Hant-TW;q=0.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
  pub tag: String,
  pub code: String,
  pub script: Option<String>,
  pub region: Option<String>,
  pub quality: f64,
}

/// Split a tag into (code, script, region). Three subtags mean code-script-region,
/// two mean code-region. Anything longer, empty or non-alphanumeric is rejected.
pub(crate) fn split_tag(tag: &str) -> Option<(String, Option<String>, Option<String>)> {
  let bits: Vec<&str> = tag.split('-').collect();
  if bits.len() > 3 {
    return None;
  }
  let code = bits[0];
  if code.is_empty() || code.len() > 8 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
    return None;
  }
  for sub in &bits[1..] {
    if sub.is_empty() || sub.len() > 8 || !sub.chars().all(|c| c.is_ascii_alphanumeric()) {
      return None;
    }
  }
  let (script, region) = match bits.len() {
    3 => (Some(bits[1].to_string()), Some(bits[2].to_string())),
    2 => (None, Some(bits[1].to_string())),
    _ => (None, None),
  };
  Some((code.to_string(), script, region))
}

/// Parse a weighted language list, highest quality first. Ties keep header order.
/// Wildcards, `q=0` entries and malformed tags are dropped.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
  let mut entries: Vec<LanguageRange> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let tag = segments.next().unwrap_or("").trim();
    if tag == "*" {
      continue;
    }
    let mut quality = 1.0_f64;
    for s in segments {
      let Some((name, val)) = s.split_once('=') else {
        continue;
      };
      if name.trim().eq_ignore_ascii_case("q") {
        match val.trim().parse::<f64>() {
          Ok(v) if (0.0..=1.0).contains(&v) => quality = v,
          _ => quality = 0.0,
        }
      }
    }
    if quality <= 0.0 {
      continue;
    }
    let Some((code, script, region)) = split_tag(tag) else {
      continue;
    };
    entries.push(LanguageRange { tag: tag.to_string(), code, script, region, quality });
  }

  // sort_by is stable, so equal weights stay in header order
  entries.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(std::cmp::Ordering::Equal));
  entries
}

fn eq_opt(requested: Option<&String>, supported: Option<&String>) -> bool {
  match (requested, supported) {
    (None, _) => true,
    (Some(r), Some(s)) => r.eq_ignore_ascii_case(s),
    (Some(_), None) => false,
  }
}

/// Pick the best supported locale for a candidate list.
///
/// Strict mode requires the primary code to match and, when the candidate
/// carries a script or region, that those match too. Loose mode compares the
/// primary code only. Candidates are tried in priority order; within one
/// candidate the supported list is scanned in its own order. The supported
/// locale's spelling is returned.
pub fn pick<'a>(supported: &'a [String], candidates: &str, loose: bool) -> Option<&'a str> {
  let ranges = parse_accept_language(candidates);
  let parsed: Vec<(&'a str, (String, Option<String>, Option<String>))> =
    supported.iter().filter_map(|s| split_tag(s).map(|parts| (s.as_str(), parts))).collect();

  for range in &ranges {
    for (original, (code, script, region)) in &parsed {
      if !range.code.eq_ignore_ascii_case(code) {
        continue;
      }
      if loose
        || (eq_opt(range.script.as_ref(), script.as_ref())
          && eq_opt(range.region.as_ref(), region.as_ref()))
      {
        return Some(*original);
      }
    }
  }
  None
}

/// Two-phase match: strict first, then loose.
pub fn best_match<'a>(supported: &'a [String], candidates: &str) -> Option<&'a str> {
  pick(supported, candidates, false).or_else(|| pick(supported, candidates, true))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn langs(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
  }

  fn tags(header: &str) -> Vec<String> {
    parse_accept_language(header).into_iter().map(|r| r.tag).collect()
  }

  #[test]
  fn parse_orders_by_quality() {
    assert_eq!(tags("en;q=0.5,zh;q=0.9,fr"), vec!["fr", "zh", "en"]);
  }

  #[test]
  fn parse_quality_name_is_case_insensitive() {
    assert_eq!(tags("en;Q=0.1, es;q=0.9"), vec!["es", "en"]);
    assert_eq!(tags("en;Q=0, de; q = 0.3"), vec!["de"]);
  }

  #[test]
  fn parse_keeps_header_order_for_ties() {
    assert_eq!(tags("es-CO, en-US, de"), vec!["es-CO", "en-US", "de"]);
  }

  #[test]
  fn parse_drops_wildcard_and_zero_quality() {
    assert_eq!(tags("*, de;q=0, fr;q=0.3"), vec!["fr"]);
  }

  #[test]
  fn parse_drops_malformed() {
    assert_eq!(tags("en_US, 12, e$, a-b-c-d, ok-GO, ;q=1, it;q=abc"), vec!["ok-GO"]);
  }

  #[test]
  fn parse_splits_script_and_region() {
    let ranges = parse_accept_language("zh-Hant-TW");
    assert_eq!(ranges[0].code, "zh");
    assert_eq!(ranges[0].script.as_deref(), Some("Hant"));
    assert_eq!(ranges[0].region.as_deref(), Some("TW"));
  }

  #[test]
  fn parse_empty() {
    assert!(parse_accept_language("").is_empty());
  }

  #[test]
  fn strict_requires_region() {
    let supported = langs(&["en", "es"]);
    assert_eq!(pick(&supported, "es-CO", false), None);
    assert_eq!(pick(&supported, "es-CO", true), Some("es"));
  }

  #[test]
  fn strict_bare_code_matches_regional_supported() {
    let supported = langs(&["en-US", "es-MX"]);
    assert_eq!(pick(&supported, "es", false), Some("es-MX"));
  }

  #[test]
  fn strict_is_case_insensitive() {
    let supported = langs(&["en-US"]);
    assert_eq!(pick(&supported, "EN-us", false), Some("en-US"));
  }

  #[test]
  fn best_match_prefers_exact_over_earlier_loose() {
    let supported = langs(&["en", "fr-CA"]);
    // en-GB only matches loosely, fr-CA matches exactly
    assert_eq!(best_match(&supported, "en-GB, fr-CA"), Some("fr-CA"));
  }

  #[test]
  fn best_match_walks_candidates_in_priority() {
    let supported = langs(&["en", "es"]);
    assert_eq!(best_match(&supported, "fr, en-US"), Some("en"));
    assert_eq!(best_match(&supported, "es-CO, en-US"), Some("es"));
    assert_eq!(best_match(&supported, "fr, zh"), None);
  }

  #[test]
  fn best_match_empty_candidate() {
    assert_eq!(best_match(&langs(&["en"]), ""), None);
  }
}
