//! Publish/notify dispatch for weather readings.
//!
//! A [`NotificationHub`] keeps an ordered list of [`Subscriber`] handles and
//! the last published [`Reading`]. Publishing fans the reading out to every
//! subscriber synchronously, in subscription order.

pub mod notification_hub;
pub mod reading;

pub use notification_hub::NotificationHub;
pub use reading::Reading;

use crate::error::SubscriberError;

/// Anything that wants to be told about new readings.
///
/// The hub only holds shared references to subscribers; it never controls
/// their lifetime. Identity (for unsubscribing) is the address of the
/// subscriber behind its `Arc`.
///
/// Closures of the form `Fn(&Reading) -> Result<(), SubscriberError>` are
/// subscribers too:
///
/// ```
/// use std::sync::Arc;
/// use weather_hub::hub::{NotificationHub, Reading, Subscriber};
/// use weather_hub::error::SubscriberError;
///
/// let hub = NotificationHub::new();
/// let logger: Arc<dyn Subscriber> = Arc::new(|reading: &Reading| {
///     println!("{reading}");
///     Ok::<(), SubscriberError>(())
/// });
/// hub.subscribe(logger.clone());
/// hub.publish(Reading::new(21.0, 40.0)).unwrap();
/// ```
pub trait Subscriber: Send + Sync {
    /// Handle a freshly published reading.
    ///
    /// An error aborts the current publish round and is returned to the
    /// publisher.
    fn on_update(&self, reading: &Reading) -> Result<(), SubscriberError>;
}

impl<F> Subscriber for F
where
    F: Fn(&Reading) -> Result<(), SubscriberError> + Send + Sync,
{
    fn on_update(&self, reading: &Reading) -> Result<(), SubscriberError> {
        self(reading)
    }
}
