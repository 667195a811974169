use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Status attached to a freshly booked slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Some(BookingStatus::Confirmed),
            "pending" => Some(BookingStatus::Pending),
            _ => None,
        }
    }
}

/// Services offered by the shop. The set is shared with the price table and
/// the booking webhook, so the wire names must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    StandardCut,
    SkinFade,
    BeardTrim,
    Shave,
    ComboCutAndBeard,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::StandardCut,
        ServiceCategory::SkinFade,
        ServiceCategory::BeardTrim,
        ServiceCategory::Shave,
        ServiceCategory::ComboCutAndBeard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::StandardCut => "standard_cut",
            ServiceCategory::SkinFade => "skin_fade",
            ServiceCategory::BeardTrim => "beard_trim",
            ServiceCategory::Shave => "shave",
            ServiceCategory::ComboCutAndBeard => "combo_cut_and_beard",
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl FromStr for ServiceCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of the `book_appointment` webhook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub call_time: String,
    pub phone_number: Option<String>,
    pub name: String,
    pub category: ServiceCategory,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
}
