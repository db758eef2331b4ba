use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/channel`.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ChannelSettings {
    channel_id: String,
    interval: String,
    weekday: String,
    hour: u8,
    next_round: DateTime<Utc>,
    connection_mode: String,
}

impl ChannelSettings {
    pub fn new(
        channel_id: String,
        interval: String,
        weekday: String,
        hour: u8,
        next_round: DateTime<Utc>,
        connection_mode: String,
    ) -> Self {
        Self {
            channel_id,
            interval,
            weekday,
            hour,
            next_round,
            connection_mode,
        }
    }
}
