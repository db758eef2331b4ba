use serde::{Deserialize, Serialize};

/// Body of `GET /v1/timezones/{country}`.
///
/// The API encodes an empty list as `null`.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Timezones {
    #[serde(rename = "Zones", default)]
    zones: Option<Vec<String>>,
}

impl Timezones {
    pub fn new(zones: Vec<String>) -> Self {
        Self { zones: Some(zones) }
    }

    /// Zones in server order.
    pub fn zones(&self) -> &[String] {
        self.zones.as_deref().unwrap_or_default()
    }
}
