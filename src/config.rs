use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
///
/// Must be called before any other thread is spawned (in particular before
/// the tokio runtime is built), since it mutates the process environment.
pub fn load_dotenv() {
    let env_path = Path::new(".env");
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (key, value) in parse_dotenv(&content) {
        // Only set if not already set (env vars take precedence)
        if std::env::var(key).is_err() {
            // SAFETY: callers invoke this before spawning threads or building a runtime
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Split `.env` content into key/value pairs, skipping blanks and comments.
fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Find the first '=' and split there
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            let mut value = line[eq_pos + 1..].trim();

            // Remove surrounding quotes if present
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }

            if !key.is_empty() {
                pairs.push((key, value));
            }
        }
    }

    pairs
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub station: StationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub name: String,
    /// Names of the displays subscribed at startup, in subscription order.
    pub displays: Vec<String>,
    pub interval_secs: u64,
    /// Number of simulated readings to publish; `None` runs until Ctrl+C.
    pub rounds: Option<u32>,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub humidity_min: f32,
    pub humidity_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            station: StationConfig {
                name: "Weather Station".to_string(),
                displays: vec![
                    "Phone Display".to_string(),
                    "TV Display".to_string(),
                    "Web Dashboard".to_string(),
                ],
                interval_secs: 3,
                rounds: Some(3),
                temperature_min: 25.0,
                temperature_max: 35.0,
                humidity_min: 35.0,
                humidity_max: 45.0,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults overridden by whatever `lookup` returns.
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("STATION_NAME") {
            config.station.name = name;
        }
        if let Some(displays) = lookup("STATION_DISPLAYS") {
            config.station.displays = displays
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(interval) = lookup("STATION_INTERVAL_SECS")
            && let Ok(i) = interval.parse()
        {
            config.station.interval_secs = i;
        }
        if let Some(rounds) = lookup("STATION_ROUNDS") {
            match rounds.trim() {
                "forever" => config.station.rounds = None,
                other => {
                    if let Ok(r) = other.parse() {
                        config.station.rounds = Some(r);
                    }
                }
            }
        }
        if let Some(range) = lookup("STATION_TEMPERATURE_RANGE")
            && let Some((min, max)) = parse_range(&range)
        {
            config.station.temperature_min = min;
            config.station.temperature_max = max;
        }
        if let Some(range) = lookup("STATION_HUMIDITY_RANGE")
            && let Some((min, max)) = parse_range(&range)
        {
            config.station.humidity_min = min;
            config.station.humidity_max = max;
        }

        config
    }
}

/// Parse `"min..max"`.
fn parse_range(value: &str) -> Option<(f32, f32)> {
    let (min, max) = value.split_once("..")?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.station.displays.len(), 3);
        assert_eq!(config.station.interval_secs, 3);
        assert_eq!(config.station.rounds, Some(3));
        assert_eq!(config.station.temperature_min, 25.0);
        assert_eq!(config.station.humidity_max, 45.0);
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("STATION_NAME", "Rooftop"),
            ("STATION_DISPLAYS", "Kitchen, ,Hallway"),
            ("STATION_INTERVAL_SECS", "10"),
            ("STATION_ROUNDS", "forever"),
            ("STATION_TEMPERATURE_RANGE", "-5.5..12"),
            ("STATION_HUMIDITY_RANGE", "60 .. 90"),
        ]));

        assert_eq!(config.station.name, "Rooftop");
        assert_eq!(config.station.displays, vec!["Kitchen", "Hallway"]);
        assert_eq!(config.station.interval_secs, 10);
        assert_eq!(config.station.rounds, None);
        assert_eq!(config.station.temperature_min, -5.5);
        assert_eq!(config.station.temperature_max, 12.0);
        assert_eq!(config.station.humidity_min, 60.0);
        assert_eq!(config.station.humidity_max, 90.0);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("STATION_INTERVAL_SECS", "soon"),
            ("STATION_ROUNDS", "many"),
            ("STATION_TEMPERATURE_RANGE", "hot"),
        ]));

        assert_eq!(config.station.interval_secs, 3);
        assert_eq!(config.station.rounds, Some(3));
        assert_eq!(config.station.temperature_min, 25.0);
        assert_eq!(config.station.temperature_max, 35.0);
    }

    #[test]
    fn test_parse_dotenv() {
        let content = "# comment\n\nSTATION_NAME = Back Garden\nSTATION_ROUNDS=\"5\"\nBROKEN\n";
        assert_eq!(
            parse_dotenv(content),
            vec![("STATION_NAME", "Back Garden"), ("STATION_ROUNDS", "5")]
        );
    }
}
