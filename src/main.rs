use log::{error, info, warn};
use std::sync::Arc;
use tokio::signal;
use tokio::time::Duration;
use weather_hub::config::Config;
use weather_hub::device::DisplayDevice;
use weather_hub::hub::{NotificationHub, Reading};
use weather_hub::input::{WeatherSimulator, run_station_simulation};

/// First reading published before the simulation starts.
const INITIAL_READING: Reading = Reading::new(30.5, 65.0);

fn main() {
    // Load .env file before anything else, while still single-threaded
    weather_hub::config::load_dotenv();
    weather_hub::init_logger();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    runtime.block_on(run());
}

async fn run() {
    let config = Config::from_env();
    info!("Starting {}", config.station.name);
    info!("  Displays: {}", config.station.displays.join(", "));
    info!("  Interval: {}s", config.station.interval_secs);
    match config.station.rounds {
        Some(rounds) => info!("  Rounds: {}", rounds),
        None => info!("  Rounds: until Ctrl+C"),
    }

    let hub = Arc::new(NotificationHub::new());
    for name in &config.station.displays {
        hub.subscribe(Arc::new(DisplayDevice::new(name.as_str())));
    }

    info!("{}: {}", config.station.name, INITIAL_READING);
    if let Err(e) = hub.publish(INITIAL_READING) {
        error!("Initial publish failed: {}", e);
        std::process::exit(1);
    }

    let simulator = match WeatherSimulator::from_config(&config.station) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid simulation settings: {}", e);
            std::process::exit(1);
        }
    };

    let mut simulation = run_station_simulation(
        hub.clone(),
        simulator,
        Duration::from_secs(config.station.interval_secs.max(1)),
        config.station.rounds,
    );

    tokio::select! {
        result = &mut simulation => {
            match result {
                Ok(Ok(())) => info!("Simulation complete"),
                Ok(Err(e)) => error!("Simulation stopped: {}", e),
                Err(e) => error!("Simulation task failed: {}", e),
            }
        }
        res = signal::ctrl_c() => {
            if let Err(e) = res {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Received shutdown signal");
            simulation.abort();
        }
    }

    if let Some(latest) = hub.latest() {
        info!("Last reading: {} ({} published)", latest, hub.version());
    }
    info!("{} stopped", config.station.name);
}
