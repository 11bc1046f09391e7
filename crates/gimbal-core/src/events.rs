//! Event dispatcher.
//!
//! Drains the gateway's queue once per frame and fans the batch out to
//! registered sinks. The drain is bounded at the gateway level
//! ([`gimbal_vr::MAX_EVENTS_PER_POLL`]); overflow stays queued for the next
//! frame rather than being dropped.

use tracing::trace;

use gimbal_vr::{RuntimeEvent, RuntimeGateway};

/// Receiver of re-published runtime events.
pub trait EventSink {
    fn on_event(&mut self, event: &RuntimeEvent);
}

/// Publish/subscribe fan-out for runtime events.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn publish(&mut self, event: &RuntimeEvent) {
        for sink in &mut self.sinks {
            sink.on_event(event);
        }
    }
}

/// Drain one bounded batch from the gateway and republish it. Returns the
/// number of events delivered this frame.
pub fn drain(gateway: &mut dyn RuntimeGateway, bus: &mut EventBus) -> usize {
    let events = gateway.poll_events();
    for event in &events {
        trace!(?event, "runtime event");
        bus.publish(event);
    }
    events.len()
}
