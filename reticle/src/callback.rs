//! Callback registry for tracker events.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Why a pending search was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The motion sensor stopped delivering during the re-aim wait.
    MotionDataLost,
}

/// Events emitted by the target tracker for external presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// A candidate was chosen; the operator should aim the device at it
    /// during the re-aim window.
    SearchStarted { target: String },
    /// The pending search was cancelled by a toggle.
    SearchCancelled,
    /// The pending search could not complete.
    SearchAborted { reason: AbortReason },
    /// Offsets committed; the target is now centered.
    Locked { target: String },
    /// A manual toggle cleared the lock.
    LockCleared,
}

/// Callback ID for registration/deregistration.
pub type CallbackId = u64;

/// Callback function type.
pub type TrackerCallback = Arc<dyn Fn(&TrackerEvent) + Send + Sync>;

/// Shared registry of tracker callbacks.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Arc<Mutex<HashMap<CallbackId, TrackerCallback>>>,
    next_id: Arc<Mutex<CallbackId>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&TrackerEvent) + Send + Sync + 'static,
    {
        let mut callbacks = self.callbacks.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let callback_id = *next_id;
        *next_id += 1;

        callbacks.insert(callback_id, Arc::new(callback));
        callback_id
    }

    pub fn deregister(&self, callback_id: CallbackId) -> bool {
        self.callbacks.lock().unwrap().remove(&callback_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn emit(&self, event: &TrackerEvent) {
        let callbacks = self.callbacks.lock().unwrap();
        for callback in callbacks.values() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn register_emit_deregister() {
        let registry = CallbackRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_for_callback = hits.clone();
        let id = registry.register(move |_event| {
            hits_for_callback.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.len(), 1);

        registry.emit(&TrackerEvent::LockCleared);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert!(registry.deregister(id));
        assert!(!registry.deregister(id));
        registry.emit(&TrackerEvent::LockCleared);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }
}
