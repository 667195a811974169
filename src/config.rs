use std::env;

use chrono_tz::Tz;

use crate::errors::AppError;
use crate::models::BookingStatus;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub webhook_url: String,
    pub api_token: String,
    pub timezone: Tz,
    pub booking_status: BookingStatus,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so the defaults and the
    /// validation do not depend on the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let timezone_name = lookup("SHOP_TIMEZONE").unwrap_or_else(|| "Europe/Paris".to_string());
        let timezone: Tz = timezone_name.parse().map_err(|_| {
            AppError::Config(format!("unknown SHOP_TIMEZONE: {timezone_name}"))
        })?;

        let booking_status = match lookup("BOOKING_STATUS") {
            Some(raw) => BookingStatus::parse(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "BOOKING_STATUS must be 'confirmed' or 'pending', got '{raw}'"
                ))
            })?,
            None => BookingStatus::Confirmed,
        };

        Ok(Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            webhook_url: lookup("WEBHOOK_URL").unwrap_or_default(),
            api_token: lookup("API_TOKEN").unwrap_or_default(),
            timezone,
            booking_status,
        })
    }
}
