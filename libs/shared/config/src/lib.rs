use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How booking submissions are admitted into the appointment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingPolicy {
    /// Re-validate the request and reject slot conflicts atomically.
    #[default]
    Strict,
    /// Append every submission unconditionally.
    Permissive,
}

impl fmt::Display for BookingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingPolicy::Strict => write!(f, "strict"),
            BookingPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

impl FromStr for BookingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(BookingPolicy::Strict),
            "permissive" => Ok(BookingPolicy::Permissive),
            other => Err(format!("Unknown booking policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub booking_policy: BookingPolicy,
    pub seed_mock_doctors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            booking_policy: BookingPolicy::Strict,
            seed_mock_doctors: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("CLINIC_HOST") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
            Ok(_) => {
                warn!("CLINIC_HOST is blank, using {}", defaults.host);
                defaults.host.clone()
            }
            Err(_) => defaults.host.clone(),
        };

        let port = match env::var("CLINIC_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("CLINIC_PORT '{}' is not a valid port, using {}", raw, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let booking_policy = match env::var("BOOKING_POLICY") {
            Ok(raw) => raw.parse::<BookingPolicy>().unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.booking_policy);
                defaults.booking_policy
            }),
            Err(_) => defaults.booking_policy,
        };

        let seed_mock_doctors = match env::var("SEED_MOCK_DOCTORS") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("SEED_MOCK_DOCTORS '{}' is not a boolean, using default", raw);
                defaults.seed_mock_doctors
            }),
            Err(_) => defaults.seed_mock_doctors,
        };

        let config = Self {
            host,
            port,
            booking_policy,
            seed_mock_doctors,
        };

        if !config.is_strict_booking() {
            warn!("Permissive booking policy enabled - double bookings will not be rejected");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_strict_booking(&self) -> bool {
        self.booking_policy == BookingPolicy::Strict
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
