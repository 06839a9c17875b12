// src/services/mod.rs
pub mod client_directory;
pub mod provider;
pub mod quiz;
pub mod reply;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod tone;

use chrono::{SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
