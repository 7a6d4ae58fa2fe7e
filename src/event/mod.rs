//! Event module for little-emitter.
//!
//! This module provides the synchronous in-memory publish-subscribe core:
//! listeners, the per-emitter registry, and the emitter capability.

pub mod emitter;
pub mod event;
pub mod listener;
pub mod registry;

pub use emitter::Emitter;
pub use emitter::EventEmitter;
pub use event::Args;
pub use event::EventName;
pub use listener::Listener;
pub use listener::ListenerCallback;
pub use registry::Registry;
