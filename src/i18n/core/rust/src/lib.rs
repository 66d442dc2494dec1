/* src/i18n/core/rust/src/lib.rs */

pub mod config;
pub mod detector;
pub mod errors;
pub mod i18n;
pub mod instance;
pub mod locale;
pub mod namespace;
pub mod parse;
pub mod request;
pub mod store;

// Re-exports for ergonomic use
pub use config::{DetectionConfig, DetectionSource, I18nOptions, Namespaces};
pub use detector::LocaleDetector;
pub use errors::I18nError;
pub use i18n::I18n;
pub use instance::{I18nInstance, InitOptions, set_html_lang};
pub use namespace::{NamespaceResolver, RouteLookup, RouteManifest, RouteMetadata, join_path};
pub use parse::{
  Binding, ComponentMap, ComponentRef, ContentNode, ParseDiagnostic, Props, Target, parse,
  parse_with_diagnostics,
};
pub use request::{RequestContext, RequestParts};
pub use store::{I18nEvent, I18nStore};
