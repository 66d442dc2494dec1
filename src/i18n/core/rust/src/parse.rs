/* src/i18n/core/rust/src/parse.rs */

use std::collections::BTreeMap;

use serde::Serialize;

pub type Props = serde_json::Map<String, serde_json::Value>;

pub const LOG_PREFIX: &str = "seam-i18n:: ";

/// Reference to a view component, resolved by name in the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl ComponentRef {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode<C = ComponentRef> {
  Text { content: String },
  Markup { tag: String, properties: Props, children: Vec<ContentNode<C>> },
  Embed { component: C, properties: Props, children: Vec<ContentNode<C>> },
}

impl<C> ContentNode<C> {
  pub fn text(content: impl Into<String>) -> Self {
    Self::Text { content: content.into() }
  }

  pub fn children(&self) -> &[ContentNode<C>] {
    match self {
      Self::Text { .. } => &[],
      Self::Markup { children, .. } | Self::Embed { children, .. } => children,
    }
  }

  /// Concatenated text of this node and its descendants.
  pub fn text_content(&self) -> String {
    match self {
      Self::Text { content } => content.clone(),
      _ => self.children().iter().map(Self::text_content).collect(),
    }
  }
}

/// What a placeholder turns into: a plain element or an embedded component.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<C = ComponentRef> {
  Tag(String),
  Component(C),
}

/// A target plus the fixed properties it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<C = ComponentRef> {
  pub target: Target<C>,
  pub properties: Props,
}

impl<C> Binding<C> {
  pub fn tag(tag: impl Into<String>) -> Self {
    Self { target: Target::Tag(tag.into()), properties: Props::new() }
  }

  pub fn component(component: C) -> Self {
    Self { target: Target::Component(component), properties: Props::new() }
  }

  pub fn with_properties(mut self, properties: Props) -> Self {
    self.properties = properties;
    self
  }

  pub fn with_property(
    mut self,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    self.properties.insert(key.into(), value.into());
    self
  }
}

impl<C> From<&str> for Binding<C> {
  fn from(tag: &str) -> Self {
    Self::tag(tag)
  }
}

/// Numeric placeholders index a list; named placeholders look up a map.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentMap<C = ComponentRef> {
  List(Vec<Binding<C>>),
  Named(BTreeMap<String, Binding<C>>),
}

impl<C> Default for ComponentMap<C> {
  fn default() -> Self {
    Self::List(Vec::new())
  }
}

impl<C> ComponentMap<C> {
  pub fn list<I, B>(bindings: I) -> Self
  where
    I: IntoIterator<Item = B>,
    B: Into<Binding<C>>,
  {
    Self::List(bindings.into_iter().map(Into::into).collect())
  }

  pub fn named<I, K, B>(bindings: I) -> Self
  where
    I: IntoIterator<Item = (K, B)>,
    K: Into<String>,
    B: Into<Binding<C>>,
  {
    Self::Named(bindings.into_iter().map(|(k, b)| (k.into(), b.into())).collect())
  }

  fn resolve(&self, tag: &str) -> Result<&Binding<C>, DiagnosticKind> {
    match self {
      Self::List(list) => {
        let index = tag.parse::<usize>().map_err(|_| DiagnosticKind::NonNumericTag)?;
        list.get(index).ok_or(DiagnosticKind::IndexOutOfRange)
      }
      Self::Named(map) => map.get(tag).ok_or(DiagnosticKind::UnknownName),
    }
  }
}

/// Emitted for a well-formed placeholder that the component map cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// List map, tag is not a decimal index
  NonNumericTag,
  /// List map, index past the end
  IndexOutOfRange,
  /// Named map, no entry for the tag
  UnknownName,
}

impl ParseDiagnostic {
  pub fn message(&self) -> String {
    format!("No component found for tag <{}>.", self.tag)
  }
}

struct Placeholder<'s> {
  start: usize,
  end: usize,
  tag: &'s str,
  inner: &'s str,
}

fn is_word(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'_'
}

/// Find the next `<TAG>...</TAG>` at or after `from`. The close tag must repeat
/// the token exactly and the first such close ends the span. An opener
/// without a close is skipped and scanning resumes right after its `<`.
fn next_placeholder(source: &str, from: usize) -> Option<Placeholder<'_>> {
  let bytes = source.as_bytes();
  let mut pos = from;
  while let Some(offset) = source[pos..].find('<') {
    let open = pos + offset;
    let tag_start = open + 1;
    let tag_len = bytes[tag_start..].iter().take_while(|b| is_word(**b)).count();
    let tag_end = tag_start + tag_len;
    if tag_len > 0 && bytes.get(tag_end) == Some(&b'>') {
      let tag = &source[tag_start..tag_end];
      let content_start = tag_end + 1;
      let close = format!("</{tag}>");
      if let Some(rel) = source[content_start..].find(&close) {
        let content_end = content_start + rel;
        return Some(Placeholder {
          start: open,
          end: content_end + close.len(),
          tag,
          inner: &source[content_start..content_end],
        });
      }
    }
    pos = tag_start;
  }
  None
}

/// Parse a translation string into content nodes, logging unresolved placeholders.
pub fn parse<C: Clone>(source: &str, components: &ComponentMap<C>) -> Vec<ContentNode<C>> {
  let mut diagnostics = Vec::new();
  let nodes = parse_with_diagnostics(source, components, &mut diagnostics);
  for diag in &diagnostics {
    tracing::warn!(tag = %diag.tag, kind = ?diag.kind, "{LOG_PREFIX}{}", diag.message());
  }
  nodes
}

pub fn parse_with_diagnostics<C: Clone>(
  source: &str,
  components: &ComponentMap<C>,
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<ContentNode<C>> {
  let mut nodes = Vec::new();
  let mut last = 0;

  while let Some(ph) = next_placeholder(source, last) {
    if ph.start > last {
      nodes.push(ContentNode::text(&source[last..ph.start]));
    }

    match components.resolve(ph.tag) {
      Ok(binding) => {
        let properties = binding.properties.clone();
        let children = parse_with_diagnostics(ph.inner, components, diagnostics);
        nodes.push(match &binding.target {
          Target::Tag(tag) => ContentNode::Markup { tag: tag.clone(), properties, children },
          Target::Component(component) => {
            ContentNode::Embed { component: component.clone(), properties, children }
          }
        });
      }
      Err(kind) => {
        diagnostics.push(ParseDiagnostic { kind, tag: ph.tag.to_string() });
        // Inner content is kept verbatim, not re-parsed
        nodes.push(ContentNode::text(ph.inner));
      }
    }
    last = ph.end;
  }

  if last < source.len() {
    nodes.push(ContentNode::text(&source[last..]));
  }
  nodes
}
