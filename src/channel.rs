use crate::Result;
use crate::config::UiConfig;
use crate::error::Error;
use crate::form::{FormFields, required_value};
use crate::location::{current_url, last_path_segment};
use crate::submit::listen_to_submissions;
use crate::utils::find_element_by_id_dyn;
use chrono::{DateTime, NaiveDate, Utc};
use dto::channel_settings::ChannelSettings;
use web_sys::{Document, HtmlFormElement};

pub const CHANNEL_SETTINGS_FORM_ID: &str = "channel-settings-form";

const NEXT_ROUND_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn init_channel_settings_form(document: &Document, config: &UiConfig) -> Result<()> {
    let Some(form) = find_element_by_id_dyn::<HtmlFormElement>(document, CHANNEL_SETTINGS_FORM_ID)?
    else {
        return Ok(());
    };

    listen_to_submissions(document, form, config, |data| {
        build_channel_settings(data, &current_url()?)
    })
}

/// Build the body of `POST /v1/channel` from the settings form of the channel page.
pub fn build_channel_settings(fields: &impl FormFields, page_url: &str) -> Result<ChannelSettings> {
    let channel_id = channel_id(page_url)?;
    let hour = parse_hour(&required_value(fields, "hour")?)?;
    let next_round = next_round(&required_value(fields, "next-round")?, hour)?;

    Ok(ChannelSettings::new(
        channel_id,
        required_value(fields, "interval")?,
        required_value(fields, "weekday")?,
        hour,
        next_round,
        required_value(fields, "connection-mode")?,
    ))
}

pub(crate) fn channel_id(page_url: &str) -> Result<String> {
    last_path_segment(page_url)
        .map(str::to_owned)
        .ok_or_else(|| {
            Error::new(
                "Can't find the channel this page is about. Please refresh the page.",
                &format!("No channel ID in URL [url: {page_url}]"),
            )
        })
}

pub fn parse_hour(value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|hour| *hour < 24)
        .ok_or_else(|| {
            Error::new(
                "The hour must be a number between 0 and 23.",
                &format!("Invalid hour [value: {value}]"),
            )
        })
}

/// The next round happens on `date` at `hour` UTC, whatever the timezone of the user.
pub fn next_round(date: &str, hour: u8) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(date.trim(), NEXT_ROUND_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(u32::from(hour), 0, 0))
        .map(|next_round| next_round.and_utc())
        .ok_or_else(|| {
            Error::new(
                "The date of the next round is invalid.",
                &format!("Invalid next round [date: {date}, hour: {hour}]"),
            )
        })
}
