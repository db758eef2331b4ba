use crate::Result;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Option list of a `<select>` control.
pub trait SelectOptions {
    fn clear(&self);

    fn append(&self, value: &str, label: &str) -> Result<()>;
}

impl SelectOptions for HtmlSelectElement {
    fn clear(&self) {
        self.set_length(0);
    }

    fn append(&self, value: &str, label: &str) -> Result<()> {
        let option = HtmlOptionElement::new_with_text_and_value(label, value)?;
        self.add_with_html_option_element(&option)?;
        Ok(())
    }
}
