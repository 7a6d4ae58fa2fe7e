//! The emitter capability and the standalone emitter.
//!
//! Anything that owns a [`Registry`] can implement [`Emitter`] by exposing it;
//! every operation is a provided method. Use [`impl_emitter!`](crate::impl_emitter)
//! to grant the capability to an existing type.

use crate::common::types::EmitterConfig;
use crate::event::event::{Args, EventName};
use crate::event::listener::Listener;
use crate::event::registry::Registry;
use crate::utils::error::{EmitterError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

pub trait Emitter: Sized {
    /// Token identifying an event
    type Event: EventName;
    /// Arguments passed to listeners on dispatch
    type Args: ?Sized;

    fn registry(&self) -> &Registry<Self>;

    fn registry_mut(&mut self) -> &mut Registry<Self>;

    /// Add a listener for the given event. The same listener may be added
    /// more than once and then runs once per registration.
    fn on(&mut self, event: impl Into<Self::Event>, listener: Listener<Self>) -> &mut Self {
        self.registry_mut().add(event.into(), listener);
        self
    }

    fn add_listener(&mut self, event: impl Into<Self::Event>, listener: Listener<Self>) -> &mut Self {
        self.on(event, listener)
    }

    fn add_event_listener(
        &mut self,
        event: impl Into<Self::Event>,
        listener: Listener<Self>,
    ) -> &mut Self {
        self.on(event, listener)
    }

    /// Add a listener that runs at most once, then is removed.
    ///
    /// The registration can be removed early with [`Emitter::off`] using the
    /// same `listener`.
    fn once(&mut self, event: impl Into<Self::Event>, listener: Listener<Self>) -> &mut Self {
        self.on(event, Listener::once(listener))
    }

    fn one(&mut self, event: impl Into<Self::Event>, listener: Listener<Self>) -> &mut Self {
        self.once(event, listener)
    }

    fn add_once_listener(
        &mut self,
        event: impl Into<Self::Event>,
        listener: Listener<Self>,
    ) -> &mut Self {
        self.once(event, listener)
    }

    /// Remove the first registration of `listener` for `event`.
    fn off<Q>(&mut self, event: &Q, listener: &Listener<Self>) -> &mut Self
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.registry_mut().remove(event, listener);
        self
    }

    fn remove_listener<Q>(&mut self, event: &Q, listener: &Listener<Self>) -> &mut Self
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.off(event, listener)
    }

    fn remove_event_listener<Q>(&mut self, event: &Q, listener: &Listener<Self>) -> &mut Self
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.off(event, listener)
    }

    /// Remove all listeners of the given event.
    fn off_event<Q>(&mut self, event: &Q) -> &mut Self
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.registry_mut().remove_event(event);
        self
    }

    fn remove_event_listeners<Q>(&mut self, event: &Q) -> &mut Self
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.off_event(event)
    }

    /// Remove all listeners of all events.
    fn off_all(&mut self) -> &mut Self {
        self.registry_mut().clear();
        self
    }

    fn remove_all_listeners(&mut self) -> &mut Self {
        self.off_all()
    }

    /// Dispatch `event` to its listeners, in registration order.
    ///
    /// Returns `Ok(false)` if nothing listens. The pass runs over the
    /// listeners registered when it started: listeners added meanwhile wait
    /// for the next dispatch, listeners removed meanwhile still run. A
    /// fire-once listener runs at most once even across nested dispatches.
    /// The first listener error ends the pass and is returned.
    fn emit<Q>(&mut self, event: &Q, args: &Self::Args) -> Result<bool>
    where
        Q: ?Sized + Hash + Eq + fmt::Debug,
        Self::Event: Borrow<Q>,
    {
        let Some(snapshot) = self.registry().snapshot(event) else {
            log::trace!("{}: no listeners for {:?}", self.registry().config().label(), event);
            return Ok(false);
        };

        for listener in snapshot {
            // A nested dispatch may already have fired this adapter.
            if listener.is_once() {
                if !listener.take_once() {
                    continue;
                }
                self.registry_mut().remove(event, &listener);
                log::debug!(
                    "{}: once listener consumed for {:?}",
                    self.registry().config().label(),
                    event
                );
            }

            if let Err(e) = listener.call(self, args) {
                log::debug!(
                    "{}: listener failed for {:?}: {}",
                    self.registry().config().label(),
                    event,
                    e
                );
                return Err(EmitterError::Listener(e));
            }
        }

        Ok(true)
    }

    fn trigger<Q>(&mut self, event: &Q, args: &Self::Args) -> Result<bool>
    where
        Q: ?Sized + Hash + Eq + fmt::Debug,
        Self::Event: Borrow<Q>,
    {
        self.emit(event, args)
    }

    /// Listeners of the given event, empty if there are none.
    fn listeners<Q>(&self, event: &Q) -> Vec<Listener<Self>>
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.registry().listeners(event)
    }

    fn get_listeners<Q>(&self, event: &Q) -> Vec<Listener<Self>>
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.listeners(event)
    }

    /// Listeners of every event.
    fn all_listeners(&self) -> Vec<Listener<Self>> {
        self.registry().flatten()
    }

    fn get_all_listeners(&self) -> Vec<Listener<Self>> {
        self.all_listeners()
    }

    fn has_listeners<Q>(&self, event: &Q) -> bool
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.registry().contains(event)
    }

    fn listener_count<Q>(&self, event: &Q) -> usize
    where
        Q: ?Sized + Hash + Eq,
        Self::Event: Borrow<Q>,
    {
        self.registry().listener_count(event)
    }

    fn total_listener_count(&self) -> usize {
        self.registry().total_listener_count()
    }

    fn event_names(&self) -> Vec<Self::Event> {
        self.registry().event_names()
    }
}

/// An emitter that owns nothing but its registry.
pub struct EventEmitter<E = String, A: ?Sized = Args>
where
    E: EventName,
{
    registry: Registry<EventEmitter<E, A>>,
    _marker: PhantomData<fn(&A)>,
}

impl<E: EventName, A: ?Sized> EventEmitter<E, A> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        EventEmitter {
            registry: Registry::with_config(config),
            _marker: PhantomData,
        }
    }
}

impl<E: EventName, A: ?Sized> Emitter for EventEmitter<E, A> {
    type Event = E;
    type Args = A;

    fn registry(&self) -> &Registry<Self> {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut Registry<Self> {
        &mut self.registry
    }
}

impl<E: EventName, A: ?Sized> Default for EventEmitter<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventName, A: ?Sized> fmt::Debug for EventEmitter<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Grant the [`Emitter`] capability set to a type holding a [`Registry`] field.
///
/// ```
/// use little_emitter::{impl_emitter, Emitter, Listener, Registry};
///
/// struct Button {
///     label: String,
///     events: Registry<Button>,
/// }
///
/// impl_emitter!(Button, events);
///
/// let mut button = Button { label: "ok".into(), events: Registry::new() };
/// button.on("click", Listener::new(|b: &mut Button, _: &[little_emitter::Value]| {
///     b.label.push('!');
///     Ok(())
/// }));
/// assert!(button.emit("click", &[]).unwrap());
/// assert_eq!(button.label, "ok!");
/// ```
#[macro_export]
macro_rules! impl_emitter {
    ($host:ty, $field:ident) => {
        $crate::impl_emitter!($host, $field, ::std::string::String, $crate::Args);
    };
    ($host:ty, $field:ident, $event:ty, $args:ty) => {
        impl $crate::Emitter for $host {
            type Event = $event;
            type Args = $args;

            fn registry(&self) -> &$crate::Registry<Self> {
                &self.$field
            }

            fn registry_mut(&mut self) -> &mut $crate::Registry<Self> {
                &mut self.$field
            }
        }
    };
}
