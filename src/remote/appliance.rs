//! Switchable household appliances driven by remote commands.
//!
//! Uses atomics so an appliance can be shared between commands and read
//! from anywhere.

use log::info;
use std::sync::atomic::{AtomicBool, Ordering};

/// An appliance with an on/off power state (light, fan).
pub struct Appliance {
    name: String,
    on: AtomicBool,
}

impl Appliance {
    /// Create an appliance that starts switched off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: AtomicBool::new(false),
        }
    }

    pub fn light() -> Self {
        Self::new("Light")
    }

    pub fn fan() -> Self {
        Self::new("Fan")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }

    pub fn turn_on(&self) {
        self.set_power(true);
    }

    pub fn turn_off(&self) {
        self.set_power(false);
    }

    fn set_power(&self, on: bool) {
        self.on.store(on, Ordering::SeqCst);
        info!("{} is {}", self.name, if on { "ON" } else { "OFF" });
    }
}
