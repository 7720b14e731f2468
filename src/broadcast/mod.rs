// src/broadcast/mod.rs

//! Fire-and-forget change notifications for external listeners.
//!
//! Delivery is synchronous and in-process, in registration order. There is no
//! acknowledgement, retry or persistence: with no listeners registered a
//! notification is simply dropped.

use crate::core::{GlitchError, ParameterName, ParameterSet, ParameterValue};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use web_time::SystemTime;

/// Payload emitted for every accepted parameter mutation.
///
/// Serializes with the field names a web bridge expects:
/// `{"parameter", "value", "timestamp", "fullState"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterUpdate {
    pub parameter: ParameterName,
    pub value: ParameterValue,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "timestamp")]
    pub timestamp_ms: u64,
    /// The full parameter set after the mutation.
    #[serde(rename = "fullState")]
    pub snapshot: ParameterSet,
}

impl ParameterUpdate {
    /// Builds an update stamped with the current wall-clock time.
    pub fn now(parameter: ParameterName, value: ParameterValue, snapshot: ParameterSet) -> Self {
        Self {
            parameter,
            value,
            timestamp_ms: unix_millis(),
            snapshot,
        }
    }

    /// JSON rendering for a serial or socket bridge.
    pub fn to_json(&self) -> Result<String, GlitchError> {
        serde_json::to_string(self).map_err(|e| GlitchError::Serialization { message: e.to_string() })
    }
}

impl fmt::Display for ParameterUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.parameter, self.value)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Handle returned by `Broadcaster::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Listener = Box<dyn FnMut(&ParameterUpdate)>;

/// Registry of change listeners.
#[derive(Default)]
pub struct Broadcaster {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it receives every update emitted from now on.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ParameterUpdate) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(listener = id.0, "listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    /// Delivers `update` to every listener and returns how many received it.
    pub fn emit(&mut self, update: &ParameterUpdate) -> usize {
        debug!(
            parameter = update.parameter.as_str(),
            value = %update.value,
            listeners = self.listeners.len(),
            "parameter broadcast"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(update);
        }
        self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
