//! Same-process and cross-process change notification.
//!
//! Browser local storage fires `storage` events only in *other* tabs, so the
//! browser build paired it with a custom DOM event for the writing tab. The
//! bus keeps that split: `notify_local`/`on_local` is the in-process
//! publish/subscribe channel, while `on_remote_change`/`notify_remote`
//! carries key-filtered notifications pushed in from outside (another
//! process, or a test double invoking the handler directly). Delivery is
//! best-effort, last-writer-wins; there is no consistency protocol.

use std::collections::HashMap;

type Handler = Box<dyn FnMut()>;

/// In-process pub/sub plus a subscription point for external change events.
#[derive(Default)]
pub struct ChangeBus {
    local: HashMap<String, Vec<Handler>>,
    remote: HashMap<String, Vec<Handler>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a named in-process event.
    pub fn on_local(&mut self, event: &str, handler: impl FnMut() + 'static) {
        self.local
            .entry(event.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Fire a named in-process event to every subscriber.
    pub fn notify_local(&mut self, event: &str) {
        if let Some(handlers) = self.local.get_mut(event) {
            for handler in handlers.iter_mut() {
                handler();
            }
        }
    }

    /// Subscribe to changes of a persisted key made outside this process.
    pub fn on_remote_change(&mut self, key: &str, handler: impl FnMut() + 'static) {
        self.remote
            .entry(key.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Deliver an external change notification for `key`.
    ///
    /// Called by whatever transport observes the shared store; handlers for
    /// other keys are not invoked.
    pub fn notify_remote(&mut self, key: &str) {
        if let Some(handlers) = self.remote.get_mut(key) {
            for handler in handlers.iter_mut() {
                handler();
            }
        }
    }
}
