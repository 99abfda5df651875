//! Weather hub library.
//!
//! Provides an in-process notification hub that fans weather readings out to
//! subscribed displays, input sources that feed it, and two small companion
//! modules: an undoable remote control and a shopping cart with pluggable
//! payment methods.

pub mod checkout;
pub mod config;
pub mod device;
pub mod error;
pub mod hub;
pub mod input;
pub mod remote;

/// Initialise `env_logger` with an `info` default, overridable via `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
