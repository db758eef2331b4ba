pub mod api_error;
pub mod channel_settings;
pub mod member_profile;
pub mod timezones;
