use crate::Result;
use crate::channel::channel_id;
use crate::config::UiConfig;
use crate::error::Error;
use crate::form::{FormFields, flag_value};
use crate::location::current_url;
use crate::submit::listen_to_submissions;
use crate::utils::{find_element_by_id_dyn, get_element_by_id};
use dto::member_profile::MemberProfile;
use web_sys::{Document, HtmlFormElement};

pub const MEMBER_PROFILE_FORM_ID: &str = "member-profile-form";
pub const SLACK_USER_ID_ELEMENT_ID: &str = "slack-user-id";
pub const SLACK_USER_ID_ATTRIBUTE: &str = "data-slack-user-id";

pub fn init_member_profile_form(document: &Document, config: &UiConfig) -> Result<()> {
    let Some(form) = find_element_by_id_dyn::<HtmlFormElement>(document, MEMBER_PROFILE_FORM_ID)?
    else {
        return Ok(());
    };

    let page = document.clone();
    listen_to_submissions(document, form, config, move |data| {
        let user_id = slack_user_id(&page)?;
        build_member_profile(data, &current_url()?, user_id)
    })
}

/// The member being edited is carried by a data attribute of the page,
/// not by the form itself.
pub fn slack_user_id(document: &Document) -> Result<String> {
    get_element_by_id(document, SLACK_USER_ID_ELEMENT_ID)?
        .get_attribute(SLACK_USER_ID_ATTRIBUTE)
        .filter(|user_id| !user_id.is_empty())
        .ok_or_else(|| {
            Error::new(
                "Can't find the member this page is about. Please refresh the page.",
                &format!("No `{SLACK_USER_ID_ATTRIBUTE}` on `#{SLACK_USER_ID_ELEMENT_ID}`"),
            )
        })
}

/// Build the body of `POST /v1/member` from the profile form of the member page.
pub fn build_member_profile(
    fields: &impl FormFields,
    page_url: &str,
    user_id: String,
) -> Result<MemberProfile> {
    Ok(MemberProfile::new(
        channel_id(page_url)?,
        user_id,
        fields.value("location-country"),
        fields.value("location-city"),
        fields.value("location-timezone"),
        fields.value("profile-type"),
        fields.value("profile-link"),
        fields.value("calendly"),
        flag_value(fields, "is-active"),
        flag_value(fields, "has-gender-preference"),
    ))
}
