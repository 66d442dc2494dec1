/* src/i18n/core/rust/src/store.rs */

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::instance::I18nInstance;

/// Dependency key hosts invalidate when the language changes.
pub const LANGUAGE_DEPENDENCY: &str = "i18n:lng";

const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nEvent {
  Initialized,
  Loaded { namespaces: Vec<String> },
  Added { namespace: String },
  LanguageChanged { language: String },
}

impl I18nEvent {
  /// Load dependency that must be re-run after this event, if any.
  pub fn invalidates(&self) -> Option<&'static str> {
    match self {
      Self::LanguageChanged { .. } => Some(LANGUAGE_DEPENDENCY),
      _ => None,
    }
  }
}

/// Publish point mirroring an instance: every event refreshes the snapshot
/// seen by `subscribe()` receivers and is forwarded to `events()` receivers.
pub struct I18nStore {
  snapshot: watch::Sender<Arc<I18nInstance>>,
  events: broadcast::Sender<I18nEvent>,
}

impl I18nStore {
  pub fn new(instance: I18nInstance) -> Self {
    let (snapshot, _) = watch::channel(Arc::new(instance));
    let (events, _) = broadcast::channel(EVENT_CAPACITY);
    Self { snapshot, events }
  }

  pub fn current(&self) -> Arc<I18nInstance> {
    self.snapshot.borrow().clone()
  }

  pub fn subscribe(&self) -> watch::Receiver<Arc<I18nInstance>> {
    self.snapshot.subscribe()
  }

  pub fn events(&self) -> broadcast::Receiver<I18nEvent> {
    self.events.subscribe()
  }

  pub fn publish(&self, event: I18nEvent) {
    self.snapshot.send_modify(|instance| match &event {
      I18nEvent::Initialized => {}
      I18nEvent::Loaded { namespaces } => {
        let inst = Arc::make_mut(instance);
        for ns in namespaces {
          if !inst.has_namespace(ns) {
            inst.namespaces.push(ns.clone());
          }
        }
      }
      I18nEvent::Added { namespace } => {
        if !instance.has_namespace(namespace) {
          Arc::make_mut(instance).namespaces.push(namespace.clone());
        }
      }
      I18nEvent::LanguageChanged { language } => {
        Arc::make_mut(instance).language = language.clone();
      }
    });
    tracing::debug!(?event, "i18n event published");
    // No event receivers is fine; snapshot subscribers were already notified
    let _ = self.events.send(event);
  }
}
