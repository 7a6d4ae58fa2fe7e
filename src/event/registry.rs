//! Listener registry for the emitter.
//!
//! Maps event names to their ordered listener sequences. An event is present
//! in the map only while it has at least one listener.

use crate::common::types::EmitterConfig;
use crate::event::emitter::Emitter;
use crate::event::listener::Listener;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Per-emitter mapping of event names to listeners.
pub struct Registry<H: Emitter> {
    /// Event names in order of first registration
    events: IndexMap<H::Event, Vec<Listener<H>>>,
    config: EmitterConfig,
}

impl<H: Emitter> Registry<H> {
    /// Create an empty registry with the default config
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Create an empty registry with the given config
    pub fn with_config(config: EmitterConfig) -> Self {
        Registry {
            events: IndexMap::new(),
            config,
        }
    }

    /// Get the config this registry was created with
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Append a listener to the sequence for `event`.
    ///
    /// A fire-once adapter gets a fresh fired flag, so every registration of
    /// it runs once on its own.
    pub fn add(&mut self, event: H::Event, mut listener: Listener<H>) {
        if listener.is_once() {
            listener.rearm();
        }

        let label = self.config.label();
        let max = self.config.max_listeners;

        match self.events.entry(event) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().push(listener);
                let count = entry.get().len();
                log::trace!("{}: listener added for {:?} ({} total)", label, entry.key(), count);
                if max > 0 && count == max + 1 {
                    log::warn!(
                        "{}: {} listeners registered for {:?}, more than the configured maximum of {}",
                        label,
                        count,
                        entry.key(),
                        max
                    );
                }
            }
            Entry::Vacant(entry) => {
                log::trace!("{}: first listener added for {:?}", label, entry.key());
                entry.insert(vec![listener]);
            }
        }
    }

    /// Remove the first entry matching `listener` (directly or as the wrapped
    /// original of a fire-once adapter). Returns whether anything was removed.
    pub fn remove<Q>(&mut self, event: &Q, listener: &Listener<H>) -> bool
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        let Some(listeners) = self.events.get_mut(event) else {
            return false;
        };
        let Some(position) = listeners.iter().position(|entry| entry.matches(listener)) else {
            return false;
        };

        listeners.remove(position);
        if listeners.is_empty() {
            if let Some((key, _)) = self.events.shift_remove_entry(event) {
                log::trace!("{}: last listener removed for {:?}", self.config.label(), key);
            }
        }
        true
    }

    /// Remove every listener for `event`. Returns how many were removed.
    pub fn remove_event<Q>(&mut self, event: &Q) -> usize
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        match self.events.shift_remove_entry(event) {
            Some((key, listeners)) => {
                log::debug!(
                    "{}: removed {} listener(s) for {:?}",
                    self.config.label(),
                    listeners.len(),
                    key
                );
                listeners.len()
            }
            None => 0,
        }
    }

    /// Remove every listener of every event
    pub fn clear(&mut self) {
        log::debug!(
            "{}: clearing {} event(s)",
            self.config.label(),
            self.events.len()
        );
        self.events.clear();
    }

    /// Copy of the current sequence for `event`, or `None` if nobody listens.
    pub fn snapshot<Q>(&self, event: &Q) -> Option<Vec<Listener<H>>>
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        self.events.get(event).cloned()
    }

    /// Listeners for `event` in registration order. Always a copy.
    pub fn listeners<Q>(&self, event: &Q) -> Vec<Listener<H>>
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        self.snapshot(event).unwrap_or_default()
    }

    /// Every listener of every event, flattened in event order.
    pub fn flatten(&self) -> Vec<Listener<H>> {
        self.events.values().flatten().cloned().collect()
    }

    /// Get the event names that have listeners, in registration order
    pub fn event_names(&self) -> Vec<H::Event> {
        self.events.keys().cloned().collect()
    }

    /// Check if any listener is registered for `event`
    pub fn contains<Q>(&self, event: &Q) -> bool
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        self.events.contains_key(event)
    }

    /// Get the number of listeners for `event`
    pub fn listener_count<Q>(&self, event: &Q) -> usize
    where
        Q: ?Sized + Hash + Eq,
        H::Event: Borrow<Q>,
    {
        self.events.get(event).map_or(0, |v| v.len())
    }

    /// Get the total number of listeners across all events
    pub fn total_listener_count(&self) -> usize {
        self.events.values().map(|v| v.len()).sum()
    }

    /// Check if no event has listeners
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<H: Emitter> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Emitter> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.config.name)
            .field("events", &self.events)
            .finish()
    }
}
