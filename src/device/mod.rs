//! Devices that consume readings.

pub mod display;

pub use display::DisplayDevice;
