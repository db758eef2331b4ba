use std::time::Duration;
use web_sys::Element;

pub const DEFAULT_API_BASE_PATH: &str = "/v1";
pub const DEFAULT_SUCCESS_REDIRECT: &str = "/profile";
pub const DEFAULT_ERROR_ALERT_DURATION: Duration = Duration::from_secs(5);
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Attribute a form may carry to redirect somewhere else than the profile page.
pub const SUCCESS_REDIRECT_ATTRIBUTE: &str = "data-success-redirect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    api_base_path: String,
    success_redirect: String,
    error_alert_duration: Duration,
    redirect_delay: Duration,
}

impl UiConfig {
    pub fn new(
        api_base_path: String,
        success_redirect: String,
        error_alert_duration: Duration,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            api_base_path,
            success_redirect,
            error_alert_duration,
            redirect_delay,
        }
    }

    pub fn api_base_path(&self) -> &str {
        &self.api_base_path
    }

    pub fn success_redirect(&self) -> &str {
        &self.success_redirect
    }

    pub fn error_alert_duration(&self) -> Duration {
        self.error_alert_duration
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }

    pub fn with_success_redirect(mut self, success_redirect: String) -> Self {
        self.success_redirect = success_redirect;
        self
    }

    /// Configuration for a given form, honouring its `data-success-redirect` attribute.
    pub fn for_form(&self, form: &Element) -> Self {
        match form.get_attribute(SUCCESS_REDIRECT_ATTRIBUTE) {
            Some(redirect) if !redirect.trim().is_empty() => {
                self.clone().with_success_redirect(redirect.trim().to_owned())
            }
            _ => self.clone(),
        }
    }

    pub fn timezones_url(&self, country: &str) -> String {
        format!(
            "{}/timezones/{country}",
            self.api_base_path.trim_end_matches('/')
        )
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_API_BASE_PATH.to_owned(),
            DEFAULT_SUCCESS_REDIRECT.to_owned(),
            DEFAULT_ERROR_ALERT_DURATION,
            DEFAULT_REDIRECT_DELAY,
        )
    }
}
