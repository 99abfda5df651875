//! Weather simulation for testing.
//!
//! Produces random readings and publishes them into a hub at a fixed
//! interval, standing in for a real sensor during development.

use crate::config::StationConfig;
use crate::error::{HubError, Result};
use crate::hub::{NotificationHub, Reading};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Shortest tick period; `interval` rejects a zero period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Random reading generator bounded by temperature and humidity ranges.
pub struct WeatherSimulator {
    temperature: Range<f32>,
    humidity: Range<f32>,
    rng: StdRng,
}

impl WeatherSimulator {
    /// Create a simulator drawing from the given half-open ranges.
    ///
    /// Fails with [`HubError::InvalidRange`] if either range is empty.
    pub fn new(temperature: Range<f32>, humidity: Range<f32>) -> Result<Self> {
        check_range("temperature", &temperature)?;
        check_range("humidity", &humidity)?;
        Ok(Self {
            temperature,
            humidity,
            rng: StdRng::from_entropy(),
        })
    }

    pub fn from_config(config: &StationConfig) -> Result<Self> {
        Self::new(
            config.temperature_min..config.temperature_max,
            config.humidity_min..config.humidity_max,
        )
    }

    /// Use a fixed seed so the sequence of readings is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn next_reading(&mut self) -> Reading {
        let temperature = self.rng.gen_range(self.temperature.clone());
        let humidity = self.rng.gen_range(self.humidity.clone());
        Reading::new(temperature, humidity)
    }
}

fn check_range(label: &str, range: &Range<f32>) -> Result<()> {
    // Also rejects NaN bounds and widths that overflow f32.
    if range.start < range.end
        && range.start.is_finite()
        && range.end.is_finite()
        && (range.end - range.start).is_finite()
    {
        Ok(())
    } else {
        Err(HubError::InvalidRange(format!(
            "{} {}..{}",
            label, range.start, range.end
        )))
    }
}

/// Spawn a task that publishes a simulated reading on every tick.
///
/// Publishes `rounds` readings, or keeps going forever when `rounds` is
/// `None`. The first tick fires immediately. Periods shorter than one
/// millisecond (including zero) are raised to one millisecond. A publish
/// error ends the task and is returned through the handle.
///
/// # Returns
///
/// A `JoinHandle` that can be used to abort the simulation task.
pub fn run_station_simulation(
    hub: Arc<NotificationHub>,
    mut simulator: WeatherSimulator,
    period: Duration,
    rounds: Option<u32>,
) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        let mut interval = interval(period.max(MIN_PERIOD));
        let mut published = 0u32;
        while rounds.is_none_or(|limit| published < limit) {
            interval.tick().await;
            let reading = simulator.next_reading();
            info!(
                "[Sim] Temperature = {:.1}°C | Humidity = {:.1}%",
                reading.temperature(),
                reading.humidity()
            );
            hub.publish(reading)?;
            published += 1;
        }
        info!("[Sim] Finished after {} reading(s)", published);
        Ok(())
    })
}
