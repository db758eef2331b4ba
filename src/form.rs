use crate::Result;
use crate::error::Error;
use web_sys::FormData;

/// Read access to the values of a submitted form.
pub trait FormFields {
    /// Text value of the field, `None` when the form doesn't carry it.
    fn value(&self, name: &str) -> Option<String>;
}

impl FormFields for FormData {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).as_string()
    }
}

pub fn required_value(fields: &impl FormFields, name: &str) -> Result<String> {
    fields.value(name).ok_or_else(|| {
        Error::new(
            &format!("The `{name}` field is missing. Please refresh the page."),
            &format!("Missing form field [name: {name}]"),
        )
    })
}

/// Checkboxes and radio buttons post the literal `"true"` when set.
pub fn flag_value(fields: &impl FormFields, name: &str) -> bool {
    fields.value(name).as_deref() == Some("true")
}
