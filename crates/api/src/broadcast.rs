//! Event-to-WebSocket broadcasting.
//!
//! [`SensorBroadcaster`] subscribes to the sensor event bus and fans every
//! update out to all connected dashboard clients as a `sensor_update` frame.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;
use vigil_events::SensorUpdate;

use crate::ws::WsManager;

/// Forwards committed sensor updates to WebSocket observers.
///
/// Observers are anonymous, so there is no per-client routing; every
/// connection receives every update.
pub struct SensorBroadcaster {
    ws_manager: Arc<WsManager>,
}

impl SensorBroadcaster {
    /// Create a new broadcaster pushing through the given WebSocket manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main broadcast loop.
    ///
    /// Consumes updates from `receiver` until the channel closes (i.e. the
    /// [`EventBus`](vigil_events::EventBus) is dropped). Lagging skips the
    /// missed updates; dashboards resynchronize on the next reading.
    pub async fn run(self, mut receiver: broadcast::Receiver<SensorUpdate>) {
        loop {
            match receiver.recv().await {
                Ok(update) => self.fan_out(&update).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Sensor broadcaster lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, sensor broadcaster shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one update as a `sensor_update` frame and push it to every
    /// connected client.
    async fn fan_out(&self, update: &SensorUpdate) {
        let frame = serde_json::json!({
            "type": "sensor_update",
            "patient_id": update.patient_id,
            "patient_name": update.patient_name,
            "reading": update.reading,
        });
        self.ws_manager
            .broadcast(Message::Text(frame.to_string().into()))
            .await;
    }
}
