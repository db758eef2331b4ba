use crate::Result;
use crate::utils::{HIDDEN_CLASS, add_class, get_element_by_id, remove_class};
use web_sys::{Document, Element};

pub const ERROR_ALERT_ID: &str = "error-alert";
pub const ERROR_ALERT_TEXT_ID: &str = "error-alert-text";
pub const SUCCESS_ALERT_ID: &str = "success-alert";

/// The two alert regions of a page. Both are part of the markup and start hidden.
pub trait AlertRegions {
    fn show_error(&self, message: &str) -> Result<()>;

    fn hide_error(&self) -> Result<()>;

    fn show_success(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct DocumentAlerts {
    error_alert: Element,
    error_text: Element,
    success_alert: Element,
}

impl DocumentAlerts {
    pub fn new(error_alert: Element, error_text: Element, success_alert: Element) -> Self {
        Self {
            error_alert,
            error_text,
            success_alert,
        }
    }

    pub fn from_document(document: &Document) -> Result<Self> {
        Ok(Self::new(
            get_element_by_id(document, ERROR_ALERT_ID)?,
            get_element_by_id(document, ERROR_ALERT_TEXT_ID)?,
            get_element_by_id(document, SUCCESS_ALERT_ID)?,
        ))
    }
}

impl AlertRegions for DocumentAlerts {
    fn show_error(&self, message: &str) -> Result<()> {
        self.error_text.set_text_content(Some(message));
        remove_class(&self.error_alert, HIDDEN_CLASS)
    }

    fn hide_error(&self) -> Result<()> {
        add_class(&self.error_alert, HIDDEN_CLASS)
    }

    fn show_success(&self) -> Result<()> {
        remove_class(&self.success_alert, HIDDEN_CLASS)
    }
}
