//! Listener definitions for the emitter.
//!
//! A listener is a shared callback with a stable identity. Cloning a listener
//! keeps its identity, so a clone kept by the caller can later be used to
//! remove the registration.

use crate::event::emitter::Emitter;
use crate::utils::error::ListenerResult;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Type alias for listener callback functions.
///
/// The first parameter is the emitter the event was dispatched on.
pub type ListenerCallback<H> = Rc<dyn Fn(&mut H, &<H as Emitter>::Args) -> ListenerResult>;

/// A registered (or registrable) event listener.
pub struct Listener<H: Emitter> {
    id: Uuid,
    callback: ListenerCallback<H>,
    /// Set only on fire-once adapters: the listener they were created from
    original: Option<Box<Listener<H>>>,
    /// Shared by the clones of one registration of a fire-once adapter
    consumed: Rc<Cell<bool>>,
}

impl<H: Emitter> Listener<H> {
    /// Create a new listener with a fresh identity
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut H, &H::Args) -> ListenerResult + 'static,
    {
        Listener {
            id: Uuid::new_v4(),
            callback: Rc::new(callback),
            original: None,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Wrap `original` in a fire-once adapter with its own identity.
    pub(crate) fn once(original: Listener<H>) -> Self {
        Listener {
            id: Uuid::new_v4(),
            callback: Rc::clone(&original.callback),
            original: Some(Box::new(original)),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Mark a fire-once adapter as fired. Returns `false` if it already was.
    pub(crate) fn take_once(&self) -> bool {
        !self.consumed.replace(true)
    }

    /// Give this copy its own fired flag, detached from other clones.
    pub(crate) fn rearm(&mut self) {
        self.consumed = Rc::new(Cell::new(false));
    }

    /// Get the identity used for removal
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The wrapped listener, if this is a fire-once adapter.
    pub fn original(&self) -> Option<&Listener<H>> {
        self.original.as_deref()
    }

    /// Check if this is a fire-once adapter
    pub fn is_once(&self) -> bool {
        self.original.is_some()
    }

    /// Check whether removing `other` should remove this entry: either the
    /// entry itself or the listener it wraps.
    pub fn matches(&self, other: &Listener<H>) -> bool {
        self.id == other.id || self.original.as_ref().is_some_and(|o| o.id == other.id)
    }

    /// Invoke the callback with `host` as context.
    pub fn call(&self, host: &mut H, args: &H::Args) -> ListenerResult {
        (self.callback)(host, args)
    }
}

impl<H: Emitter> Clone for Listener<H> {
    fn clone(&self) -> Self {
        Listener {
            id: self.id,
            callback: Rc::clone(&self.callback),
            original: self.original.clone(),
            consumed: Rc::clone(&self.consumed),
        }
    }
}

impl<H: Emitter> PartialEq for Listener<H> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<H: Emitter> Eq for Listener<H> {}

impl<H: Emitter> fmt::Debug for Listener<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("original", &self.original.as_ref().map(|o| o.id))
            .finish()
    }
}
