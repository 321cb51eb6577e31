use std::sync::Arc;

/// Type of change for targeted UI updates.
/// Lets views re-render only the section that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum NewTabPageChange {
    /// The intro message visibility decision changed
    IntroMessageVisibility { visible: bool },
    /// Favorites were reordered, removed or added
    Favorites,
    /// The favorites section was collapsed or expanded
    Collapse { collapsed: bool },
    /// The favorites section tooltip was shown or hidden
    Tooltip { visible: bool },
}

/// Receives model changes. Replaces view-level reactive bindings.
pub trait ChangeObserver: Send + Sync {
    fn on_change(&self, change: NewTabPageChange);
}

/// Subscriber list owned by a model.
#[derive(Default, Clone)]
pub struct Observers {
    inner: Vec<Arc<dyn ChangeObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ChangeObserver>) {
        self.inner.push(observer);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn notify(&self, change: NewTabPageChange) {
        tracing::trace!(?change, observers = self.inner.len(), "notifying observers");
        for observer in &self.inner {
            observer.on_change(change);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.inner.len())
            .finish()
    }
}

/// Observer that records every change it sees. Used by tests and the CLI.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    changes: parking_lot::Mutex<Vec<NewTabPageChange>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<NewTabPageChange> {
        self.changes.lock().clone()
    }
}

impl ChangeObserver for RecordingObserver {
    fn on_change(&self, change: NewTabPageChange) {
        self.changes.lock().push(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let first = Arc::new(RecordingObserver::new());
        let second = Arc::new(RecordingObserver::new());
        let mut observers = Observers::new();
        assert!(observers.is_empty());

        observers.subscribe(first.clone());
        observers.subscribe(second.clone());
        observers.notify(NewTabPageChange::Favorites);

        assert_eq!(observers.len(), 2);
        assert_eq!(first.changes(), vec![NewTabPageChange::Favorites]);
        assert_eq!(second.changes(), vec![NewTabPageChange::Favorites]);
    }
}
