//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the fan-out hub between the ingestion pipeline and the
//! WebSocket broadcast task. It is shared via `Arc<EventBus>` across the
//! application.

use serde::Serialize;
use tokio::sync::broadcast;
use vigil_core::types::DbId;

use crate::snapshot::ReadingSnapshot;

// ---------------------------------------------------------------------------
// SensorUpdate
// ---------------------------------------------------------------------------

/// A freshly enriched reading, ready for fan-out to live observers.
///
/// Published by the ingestion pipeline after the reading has been persisted,
/// so a subscriber never sees data the database does not have.
#[derive(Debug, Clone, Serialize)]
pub struct SensorUpdate {
    pub patient_id: DbId,
    pub patient_name: String,
    pub reading: ReadingSnapshot,
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`SensorUpdate`].
///
/// # Usage
///
/// ```rust
/// use vigil_events::EventBus;
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
/// ```
pub struct EventBus {
    sender: broadcast::Sender<SensorUpdate>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed updates are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an update to all current subscribers.
    ///
    /// If there are no active subscribers the update is silently dropped;
    /// the reading is already persisted by the time it reaches the bus.
    pub fn publish(&self, update: SensorUpdate) {
        // Ignore the SendError; it only means there are zero receivers.
        let _ = self.sender.send(update);
    }

    /// Subscribe to all updates published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<SensorUpdate> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
