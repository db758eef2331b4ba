use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned by the API when a request is rejected.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ApiError {
    error: String,
}

impl ApiError {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}
