// Copyright 2025 the sheen authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::SurfaceEvent;

/// Carries [`SurfaceEvent`]s from the windowing subsystem to subscribers.
///
/// Wraps an unbounded flume channel. Receivers returned by
/// [`SurfaceEventBus::subscribe`] share the queue: each published event is
/// delivered to exactly one subscriber, which is the intended shape here —
/// the shader-effect manager is the single consumer of surface events.
#[derive(Debug)]
pub struct SurfaceEventBus {
    sender: flume::Sender<SurfaceEvent>,
    receiver: flume::Receiver<SurfaceEvent>,
}

impl SurfaceEventBus {
    /// Creates a new bus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Surface event bus initialized.");
        Self { sender, receiver }
    }

    /// Publishes an event, logging an error if every receiver is gone.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: SurfaceEvent) {
        log::trace!("Publishing surface event: {event:?}");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send surface event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel, for producers that
    /// outlive their borrow of the bus (e.g. a window callback).
    pub fn sender(&self) -> flume::Sender<SurfaceEvent> {
        self.sender.clone()
    }

    /// Returns a receiver on the channel for a consumer to drain.
    pub fn subscribe(&self) -> flume::Receiver<SurfaceEvent> {
        self.receiver.clone()
    }
}

impl Default for SurfaceEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;
    use std::time::Duration;

    #[test]
    fn bus_creation() {
        let bus = SurfaceEventBus::new();
        let _sender = bus.sender();
        assert!(bus.subscribe().is_empty());
    }

    #[test]
    fn publish_reaches_subscriber() {
        let bus = SurfaceEventBus::new();
        let receiver = bus.subscribe();

        bus.publish(SurfaceEvent::Resized {
            width: 1280,
            height: 720,
        });

        match receiver.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => assert_eq!(
                event,
                SurfaceEvent::Resized {
                    width: 1280,
                    height: 720
                }
            ),
            Err(e) => panic!("Failed to receive event: {e:?}"),
        }
    }

    #[test]
    fn subscriber_sees_events_published_before_subscribing() {
        let bus = SurfaceEventBus::new();
        bus.publish(SurfaceEvent::Resized {
            width: 800,
            height: 600,
        });

        let receiver = bus.subscribe();
        assert_eq!(
            receiver.try_recv(),
            Ok(SurfaceEvent::Resized {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn try_receive_empty() {
        let bus = SurfaceEventBus::new();
        let receiver = bus.subscribe();

        match receiver.try_recv() {
            Err(TryRecvError::Empty) => { /* This is the expected outcome */ }
            Ok(event) => panic!("Received unexpected event: {event:?}"),
            Err(e) => panic!("Received unexpected error: {e:?}"),
        }
    }

    #[test]
    fn detached_sender_keeps_publishing() {
        let bus = SurfaceEventBus::new();
        let sender = bus.sender();
        let receiver = bus.subscribe();

        sender
            .send(SurfaceEvent::Resized {
                width: 1,
                height: 1,
            })
            .expect("Send should succeed");

        assert_eq!(
            receiver.recv_timeout(Duration::from_millis(100)),
            Ok(SurfaceEvent::Resized {
                width: 1,
                height: 1
            })
        );
    }
}
