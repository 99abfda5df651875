//! Climate sensor payload handling.
//!
//! Parses zigbee2mqtt-style JSON state messages from a temperature/humidity
//! sensor and turns them into [`Reading`]s. Messages may carry only one of
//! the two values; the missing one is taken from the last known state.

use crate::error::Result;
use crate::hub::{NotificationHub, Reading};
use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Climate sensor state as published by zigbee2mqtt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimatePayload {
    /// Current temperature reading (°C)
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Current humidity reading (%)
    #[serde(default)]
    pub humidity: Option<f32>,

    /// Zigbee link quality (0-255)
    #[serde(default)]
    pub linkquality: Option<u8>,
}

/// Tracks the last known climate state of one sensor.
pub struct ClimateTracker {
    /// Device friendly name in zigbee2mqtt
    friendly_name: String,
    state: RwLock<ClimatePayload>,
}

impl ClimateTracker {
    /// Create a tracker for the sensor with the given friendly name
    /// (e.g. "Living-Room-Thermometer").
    pub fn new(friendly_name: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            state: RwLock::new(ClimatePayload::default()),
        }
    }

    /// Topic carrying this sensor's state messages.
    pub fn state_topic(&self) -> String {
        format!("zigbee2mqtt/{}", self.friendly_name)
    }

    /// Merge a JSON state payload into the known state.
    ///
    /// Returns the resulting reading once both temperature and humidity are
    /// known, `None` before that. Malformed JSON is an error and leaves the
    /// state untouched.
    pub fn process_payload(&self, payload: &str) -> Result<Option<Reading>> {
        let update: ClimatePayload = serde_json::from_str(payload)?;

        let mut state = self.state.write();
        if let Some(t) = update.temperature {
            state.temperature = Some(t);
        }
        if let Some(h) = update.humidity {
            state.humidity = Some(h);
        }
        if let Some(lq) = update.linkquality {
            state.linkquality = Some(lq);
        }

        debug!(
            "{} state updated: temp={:?}°C, humidity={:?}%, linkquality={:?}",
            self.friendly_name, state.temperature, state.humidity, state.linkquality
        );

        Ok(match (state.temperature, state.humidity) {
            (Some(t), Some(h)) => Some(Reading::new(t, h)),
            _ => None,
        })
    }

    /// Process a message if it belongs to this sensor.
    ///
    /// Messages on other topics yield `Ok(None)`.
    pub fn process_message(&self, topic: &str, payload: &str) -> Result<Option<Reading>> {
        if topic == self.state_topic() {
            self.process_payload(payload)
        } else {
            Ok(None)
        }
    }

    /// Process a message and publish the resulting reading, if any.
    ///
    /// Returns whether a reading was published.
    pub fn forward(&self, hub: &NotificationHub, topic: &str, payload: &str) -> Result<bool> {
        match self.process_message(topic, payload) {
            Ok(Some(reading)) => {
                hub.publish(reading)?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => {
                warn!("Failed to parse {} state: {}", self.friendly_name, e);
                Err(e)
            }
        }
    }

    /// Current known state.
    pub fn state(&self) -> ClimatePayload {
        self.state.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;

    #[test]
    fn test_partial_updates_merge() {
        let tracker = ClimateTracker::new("Thermo");
        assert_eq!(tracker.process_payload(r#"{"temperature": 21.5}"#).unwrap(), None);

        let reading = tracker
            .process_payload(r#"{"humidity": 48.0, "linkquality": 120}"#)
            .unwrap();
        assert_eq!(reading, Some(Reading::new(21.5, 48.0)));

        let reading = tracker.process_payload(r#"{"temperature": 22.0}"#).unwrap();
        assert_eq!(reading, Some(Reading::new(22.0, 48.0)));
        assert_eq!(tracker.state().linkquality, Some(120));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let tracker = ClimateTracker::new("Thermo");
        let reading = tracker
            .process_payload(r#"{"temperature": 19.0, "humidity": 55.0, "battery": 90, "action": "single_plus"}"#)
            .unwrap();
        assert_eq!(reading, Some(Reading::new(19.0, 55.0)));
    }

    #[test]
    fn test_malformed_payload_is_error() {
        let tracker = ClimateTracker::new("Thermo");
        tracker.process_payload(r#"{"temperature": 20.0}"#).unwrap();
        assert!(matches!(
            tracker.process_payload("not json"),
            Err(HubError::SerdeJsonError(_))
        ));
        assert_eq!(tracker.state().temperature, Some(20.0));
    }

    #[test]
    fn test_forward_publishes_only_own_topic() {
        let hub = NotificationHub::new();
        let tracker = ClimateTracker::new("Thermo");
        let payload = r#"{"temperature": 23.0, "humidity": 44.0}"#;

        assert!(!tracker.forward(&hub, "zigbee2mqtt/Other", payload).unwrap());
        assert_eq!(hub.latest(), None);

        assert!(tracker.forward(&hub, "zigbee2mqtt/Thermo", payload).unwrap());
        assert_eq!(hub.latest(), Some(Reading::new(23.0, 44.0)));
    }
}
