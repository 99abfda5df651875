//! Weather reading snapshot distributed to subscribers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable temperature/humidity pair.
///
/// Temperature is in °C, humidity in percent relative humidity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    temperature: f32,
    humidity: f32,
}

impl Reading {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.humidity
    }
}

impl From<(f32, f32)> for Reading {
    fn from((temperature, humidity): (f32, f32)) -> Self {
        Self::new(temperature, humidity)
    }
}

/// Round half up to a whole number (`-2.5` becomes `-2`, never `-0`).
fn whole(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}

/// Renders both values rounded to whole units.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature = {}°C || Humidity = {}%",
            whole(self.temperature),
            whole(self.humidity)
        )
    }
}
