/* src/i18n/core/rust/src/namespace.rs */

use std::collections::{HashMap, HashSet};

use futures_util::future::{self, BoxFuture, FutureExt};
use serde::Deserialize;

use crate::config::Namespaces;

const PAGE_FILES: [&str; 2] = ["+page", "+page.server"];
const LAYOUT_FILES: [&str; 2] = ["+layout", "+layout.server"];

/// Metadata a route file may declare. Only `ns` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteMetadata {
  #[serde(default)]
  pub ns: Option<Namespaces>,
}

impl RouteMetadata {
  pub fn ns<I, S>(namespaces: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { ns: Some(Namespaces::Many(namespaces.into_iter().map(Into::into).collect())) }
  }
}

/// Resolves a route file path (`<root>/a/b/+page`) to its metadata.
/// `None` means the file does not exist or declares nothing.
pub trait RouteLookup: Send + Sync {
  fn lookup<'a>(&'a self, file_path: &'a str) -> BoxFuture<'a, Option<RouteMetadata>>;
}

/// Synchronous strategy: any plain function or closure.
impl<F> RouteLookup for F
where
  F: Fn(&str) -> Option<RouteMetadata> + Send + Sync,
{
  fn lookup<'a>(&'a self, file_path: &'a str) -> BoxFuture<'a, Option<RouteMetadata>> {
    future::ready(self(file_path)).boxed()
  }
}

/// Static route table keyed by full file path, usually generated at build time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RouteManifest {
  entries: HashMap<String, RouteMetadata>,
}

impl RouteManifest {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  pub fn insert(mut self, file_path: impl Into<String>, metadata: RouteMetadata) -> Self {
    self.entries.insert(file_path.into(), metadata);
    self
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl RouteLookup for RouteManifest {
  fn lookup<'a>(&'a self, file_path: &'a str) -> BoxFuture<'a, Option<RouteMetadata>> {
    future::ready(self.entries.get(file_path).cloned()).boxed()
  }
}

/// Join path segments with `/`. Empty segments and repeated or trailing
/// separators are dropped; a leading slash survives only on the first
/// non-empty segment.
pub fn join_path<I, S>(segments: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut leading = None;
  let mut parts: Vec<String> = Vec::new();
  for segment in segments {
    let segment = segment.as_ref();
    if segment.is_empty() {
      continue;
    }
    if leading.is_none() {
      leading = Some(segment.starts_with('/'));
    }
    parts.extend(segment.split('/').filter(|p| !p.is_empty()).map(str::to_string));
  }
  let joined = parts.join("/");
  if leading == Some(true) { format!("/{joined}") } else { joined }
}

/// Walks a route id from leaf to root collecting declared namespaces.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
  defaults: Vec<String>,
  routes_root: String,
}

impl NamespaceResolver {
  pub fn new(defaults: Vec<String>, routes_root: impl Into<String>) -> Self {
    Self { defaults, routes_root: routes_root.into() }
  }

  pub fn defaults(&self) -> &[String] {
    &self.defaults
  }

  /// Order: page, page.server of the full route, then layout, layout.server
  /// of each level from the full route up to the root. Defaults always lead;
  /// the first occurrence of a namespace keeps its position.
  pub async fn resolve(&self, route_id: &str, lookup: &dyn RouteLookup) -> Vec<String> {
    let mut acc = self.defaults.clone();
    if route_id.is_empty() {
      return dedup(acc);
    }

    let segments: Vec<&str> = route_id.split('/').filter(|s| !s.is_empty()).collect();

    for file in PAGE_FILES {
      self.probe(&segments, file, lookup, &mut acc).await;
    }
    for depth in (0..=segments.len()).rev() {
      for file in LAYOUT_FILES {
        self.probe(&segments[..depth], file, lookup, &mut acc).await;
      }
    }

    let namespaces = dedup(acc);
    tracing::debug!(route_id, ?namespaces, "namespaces resolved");
    namespaces
  }

  async fn probe(
    &self,
    segments: &[&str],
    file: &str,
    lookup: &dyn RouteLookup,
    acc: &mut Vec<String>,
  ) {
    let path = join_path(
      std::iter::once(self.routes_root.as_str()).chain(segments.iter().copied()).chain([file]),
    );
    if let Some(RouteMetadata { ns: Some(ns) }) = lookup.lookup(&path).await {
      acc.extend(ns.iter().map(str::to_string));
    }
  }
}

fn dedup(namespaces: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::new();
  namespaces.into_iter().filter(|ns| !ns.is_empty() && seen.insert(ns.clone())).collect()
}
