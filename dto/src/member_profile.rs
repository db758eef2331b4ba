use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/member`.
///
/// Text fields the form does not carry are sent as `null`.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct MemberProfile {
    channel_id: String,
    user_id: String,
    country: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
    profile_type: Option<String>,
    profile_link: Option<String>,
    calendly_link: Option<String>,
    is_active: bool,
    has_gender_preference: bool,
}

impl MemberProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        channel_id: String,
        user_id: String,
        country: Option<String>,
        city: Option<String>,
        timezone: Option<String>,
        profile_type: Option<String>,
        profile_link: Option<String>,
        calendly_link: Option<String>,
        is_active: bool,
        has_gender_preference: bool,
    ) -> Self {
        Self {
            channel_id,
            user_id,
            country,
            city,
            timezone,
            profile_type,
            profile_link,
            calendly_link,
            is_active,
            has_gender_preference,
        }
    }
}
