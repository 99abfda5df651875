//! Named display that renders every reading it is sent.
//!
//! Displays are the stock subscriber for the weather station: the phone,
//! TV and web dashboard all render the same line format.

use crate::error::SubscriberError;
use crate::hub::{Reading, Subscriber};
use log::info;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe display state.
///
/// Keeps the last rendered line and a count of updates received, so the
/// display can be inspected after a publish round.
pub struct DisplayDevice {
    name: String,
    last_rendered: RwLock<Option<String>>,
    updates: AtomicU32,
}

impl DisplayDevice {
    /// Create a display with the given name (e.g. "Phone Display").
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_rendered: RwLock::new(None),
            updates: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line produced by the most recent update.
    pub fn last_rendered(&self) -> Option<String> {
        self.last_rendered.read().clone()
    }

    /// Number of updates received so far.
    pub fn updates(&self) -> u32 {
        self.updates.load(Ordering::SeqCst)
    }

    fn render(&self, reading: &Reading) -> String {
        format!("{} received Update: {}", self.name, reading)
    }
}

impl Subscriber for DisplayDevice {
    fn on_update(&self, reading: &Reading) -> Result<(), SubscriberError> {
        let line = self.render(reading);
        info!("{}", line);
        *self.last_rendered.write() = Some(line);
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
