//! Runtime settings, read from environment variables with in-code defaults.

use dioxus_logger::tracing::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_ROTATION_SECS: u64 = 8;
const DEFAULT_MOCK_LATENCY_MS: u64 = 300;
const DEFAULT_SEED_DEMO: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the banner shows each alert.
    pub rotation_period: Duration,
    /// Artificial delay of every mock account call.
    pub mock_latency: Duration,
    /// Install the demo alerts when the alert store is created.
    pub seed_demo_alerts: bool,
    /// Where native builds keep the profile file. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `BRONX_SAFE_ROTATION_SECS`: banner rotation period, whole seconds > 0.
    /// - `BRONX_SAFE_MOCK_LATENCY_MS`: mock account API delay in milliseconds.
    /// - `BRONX_SAFE_SEED_DEMO`: "true"/"1" or "false"/"0".
    /// - `BRONX_SAFE_DATA_DIR`: directory for the native profile file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`], with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rotation_secs = parse_or(
            &lookup,
            "BRONX_SAFE_ROTATION_SECS",
            DEFAULT_ROTATION_SECS,
            |secs: &u64| *secs > 0,
        );
        let latency_ms = parse_or(
            &lookup,
            "BRONX_SAFE_MOCK_LATENCY_MS",
            DEFAULT_MOCK_LATENCY_MS,
            |_| true,
        );
        let seed_demo_alerts = match lookup("BRONX_SAFE_SEED_DEMO") {
            Some(val) => match parse_flag(&val) {
                Some(flag) => flag,
                None => {
                    log_invalid("BRONX_SAFE_SEED_DEMO", val);
                    DEFAULT_SEED_DEMO
                }
            },
            None => DEFAULT_SEED_DEMO,
        };
        let data_dir = lookup("BRONX_SAFE_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Self {
            rotation_period: Duration::from_secs(rotation_secs),
            mock_latency: Duration::from_millis(latency_ms),
            seed_demo_alerts,
            data_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log_invalid(key, raw);
            default
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    let val = val.trim();
    if val.eq_ignore_ascii_case("true") || val == "1" {
        Some(true)
    } else if val.eq_ignore_ascii_case("false") || val == "0" {
        Some(false)
    } else {
        None
    }
}

fn log_invalid(key: &'static str, value: String) {
    warn!("{}; using default", ConfigError { key, value });
}
