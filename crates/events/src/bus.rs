//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`PortfolioEvent`]s and is
//! shared via `Arc<EventBus>`.

use chrono::{DateTime, Utc};
use folio_core::engagement::EngagementTarget;
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event names
// ---------------------------------------------------------------------------

pub const EVENT_LIKED: &str = "engagement.liked";
pub const EVENT_UNLIKED: &str = "engagement.unliked";
pub const EVENT_COMMENTED: &str = "engagement.commented";

// ---------------------------------------------------------------------------
// PortfolioEvent
// ---------------------------------------------------------------------------

/// Something a visitor did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioEvent {
    /// Dot-separated event name, e.g. `"engagement.liked"`.
    pub event_type: String,

    /// The project or achievement acted upon.
    pub target: Option<EngagementTarget>,

    /// Id of the user that triggered the event.
    pub actor_user_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

impl PortfolioEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            target: None,
            actor_user_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_target(mut self, target: EngagementTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// ```rust
/// use folio_events::bus::{EventBus, PortfolioEvent, EVENT_LIKED};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(PortfolioEvent::new(EVENT_LIKED));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<PortfolioEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unconsumed events are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Dropped when nobody is
    /// subscribed.
    pub fn publish(&self, event: PortfolioEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PortfolioEvent> {
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
