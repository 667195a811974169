use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

const UNKNOWN: &str = "unknown";

/// Per-call state. Created when the call starts, dropped when it ends.
#[derive(Debug, Clone)]
pub struct CallSession {
    pub customer_name: Option<String>,
    phone_number: Option<String>,
    call_time: DateTime<Tz>,
    bookings: Vec<Value>,
}

#[derive(Serialize)]
struct SessionSummary<'a> {
    customer_name: &'a str,
    customer_phone: &'a str,
    bookings: &'a [Value],
}

impl CallSession {
    pub fn new(phone_number: Option<String>, call_time: DateTime<Tz>) -> Self {
        Self {
            customer_name: None,
            phone_number: phone_number.filter(|p| !p.trim().is_empty()),
            call_time,
            bookings: Vec::new(),
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Call start time as sent to the webhook, e.g. `2025-10-20T09:15:02.123+02:00`.
    pub fn call_time_iso(&self) -> String {
        self.call_time.to_rfc3339_opts(SecondsFormat::Millis, false)
    }

    pub fn bookings(&self) -> &[Value] {
        &self.bookings
    }

    /// Appends every element of a list lookup response, in order. Anything
    /// other than a non-empty array leaves the bookings untouched.
    pub fn record_bookings(&mut self, response: &Value) -> usize {
        match response.as_array() {
            Some(found) => {
                self.bookings.extend(found.iter().cloned());
                found.len()
            }
            None => 0,
        }
    }

    /// Readable snapshot handed back to the conversational model. Unset
    /// fields render as `"unknown"`, which the prompt relies on.
    pub fn summarize(&self) -> String {
        let summary = SessionSummary {
            customer_name: self.customer_name.as_deref().unwrap_or(UNKNOWN),
            customer_phone: self.phone_number.as_deref().unwrap_or(UNKNOWN),
            bookings: &self.bookings,
        };
        serde_json::to_string(&summary).unwrap_or_default()
    }
}
