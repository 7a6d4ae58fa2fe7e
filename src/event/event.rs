//! Event name definitions for the emitter.
//!
//! Any identity-comparable token can name an event: strings are the common
//! case, but enums work just as well.

use std::fmt::Debug;
use std::hash::Hash;

/// Types usable as registry keys.
pub trait EventName: Eq + Hash + Clone + Debug {}

impl<T> EventName for T where T: Eq + Hash + Clone + Debug {}

/// Default argument pack handed to listeners: an ordered list of opaque values.
pub type Args = [serde_json::Value];
