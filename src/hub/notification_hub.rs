//! Synchronous fan-out of readings to an ordered subscriber list.

use super::{Reading, Subscriber};
use crate::error::{HubError, Result};
use chrono::{DateTime, Utc};
use log::{debug, trace};
use parking_lot::RwLock;
use std::sync::Arc;

struct HubState {
    subscribers: Vec<Arc<dyn Subscriber>>,
    latest: Option<Reading>,
    published_at: Option<DateTime<Utc>>,
    version: u64,
}

/// Holds subscribers and the latest reading, and notifies on publish.
///
/// The subscriber list is guarded by a lock so the hub can be shared across
/// threads, but the lock is never held while subscriber callbacks run.
/// `publish` works on a copy of the list taken when it is called: a callback
/// that subscribes or unsubscribes affects the next round, not the current one.
pub struct NotificationHub {
    state: RwLock<HubState>,
}

impl NotificationHub {
    /// Create an empty hub with no subscribers and no reading.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HubState {
                subscribers: Vec::new(),
                latest: None,
                published_at: None,
                version: 0,
            }),
        }
    }

    /// Append a subscriber. Subscribing the same handle twice means it is
    /// notified twice per publish.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) {
        let mut state = self.state.write();
        state.subscribers.push(subscriber);
        debug!("Subscriber added ({} registered)", state.subscribers.len());
    }

    /// Remove the first registration of `subscriber`, compared by address.
    ///
    /// Returns `false` (and changes nothing) if it was not registered.
    pub fn unsubscribe<S>(&self, subscriber: &Arc<S>) -> bool
    where
        S: Subscriber + ?Sized,
    {
        let target = Arc::as_ptr(subscriber).cast::<()>();
        let mut state = self.state.write();
        let position = state
            .subscribers
            .iter()
            .position(|existing| Arc::as_ptr(existing).cast::<()>() == target);

        match position {
            Some(index) => {
                state.subscribers.remove(index);
                debug!(
                    "Subscriber #{} removed ({} registered)",
                    index,
                    state.subscribers.len()
                );
                true
            }
            None => false,
        }
    }

    /// Store `reading` as the latest snapshot and notify every subscriber in
    /// subscription order.
    ///
    /// The first subscriber failure ends the round and is returned; later
    /// subscribers are not notified. The snapshot is stored either way.
    pub fn publish(&self, reading: Reading) -> Result<()> {
        let subscribers = {
            let mut state = self.state.write();
            state.latest = Some(reading);
            state.published_at = Some(Utc::now());
            state.version += 1;
            state.subscribers.clone()
        };

        trace!(
            "Publishing {:?} to {} subscriber(s)",
            reading,
            subscribers.len()
        );

        for (index, subscriber) in subscribers.iter().enumerate() {
            subscriber
                .on_update(&reading)
                .map_err(|source| HubError::SubscriberFailed { index, source })?;
        }

        Ok(())
    }

    /// Last published reading, if any.
    pub fn latest(&self) -> Option<Reading> {
        self.state.read().latest
    }

    /// When the last reading was published.
    pub fn last_published_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().published_at
    }

    /// Number of publishes so far. Incremented on every publish, including
    /// repeats of the same reading.
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    /// Number of registrations (duplicates counted).
    pub fn len(&self) -> usize {
        self.state.read().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().subscribers.is_empty()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
