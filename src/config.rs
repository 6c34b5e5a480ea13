use std::env;

use crate::monitor::DetectionConfig;

/// Distinguishes runtime behavior for different stages of the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an application embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub detection: DetectionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut detection = DetectionConfig::default();
        if let Some(months) = read_threshold("PULSE_RUNWAY_WARNING_MONTHS")? {
            detection.runway_warning_months = months;
        }
        if let Some(months) = read_threshold("PULSE_RUNWAY_CRITICAL_MONTHS")? {
            detection.runway_critical_months = months;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            detection,
        })
    }
}

fn read_threshold(key: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidThreshold { key }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a numeric threshold")]
    InvalidThreshold { key: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PULSE_RUNWAY_WARNING_MONTHS");
        env::remove_var("PULSE_RUNWAY_CRITICAL_MONTHS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.detection, DetectionConfig::default());
    }

    #[test]
    fn runway_thresholds_can_be_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PULSE_RUNWAY_WARNING_MONTHS", "9");
        env::set_var("PULSE_RUNWAY_CRITICAL_MONTHS", "4.5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.detection.runway_warning_months, 9.0);
        assert_eq!(config.detection.runway_critical_months, 4.5);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PULSE_RUNWAY_WARNING_MONTHS", "plenty");
        let err = AppConfig::load().expect_err("non-numeric threshold rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold {
                key: "PULSE_RUNWAY_WARNING_MONTHS"
            }
        ));
        reset_env();
    }

    #[test]
    fn production_environment_is_recognized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }
}
