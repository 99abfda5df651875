//! Input sources that feed readings into a [`NotificationHub`].
//!
//! Current input sources:
//! - `simulation`: random readings on a timer
//! - `climate`: zigbee2mqtt-style JSON state payloads
//!
//! [`NotificationHub`]: crate::hub::NotificationHub

pub mod climate;
pub mod simulation;

pub use climate::{ClimatePayload, ClimateTracker};
pub use simulation::{WeatherSimulator, run_station_simulation};
