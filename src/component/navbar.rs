use crate::Result;
use crate::utils::{
    HIDDEN_CLASS, add_class, add_event_listener, find_element_by_id_dyn, log_error,
    query_selector_all, remove_class, toggle_class,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

pub const FOCUS_CLASS: &str = "focus";
const INPUT_SELECTOR: &str = ".input";

/// Wire the menus of the navigation bar and the decoration of the input fields.
/// Elements absent from the current page are skipped.
pub fn init_navbar(document: &Document) -> Result<()> {
    toggle_on_click(document, "user-icon", "dropdown")?;
    toggle_on_click(document, "mobile-user-icon", "mobile-dropdown")?;
    init_mobile_sidebar(document)?;
    init_inputs_focus(document)
}

fn toggle_on_click(document: &Document, button_id: &str, menu_id: &str) -> Result<()> {
    let button = find_element_by_id_dyn::<Element>(document, button_id)?;
    let menu = find_element_by_id_dyn::<Element>(document, menu_id)?;
    if let (Some(button), Some(menu)) = (button, menu) {
        add_event_listener(&button, "click", move |_| {
            log_error(toggle_class(&menu, HIDDEN_CLASS))
        })?;
    }

    Ok(())
}

fn init_mobile_sidebar(document: &Document) -> Result<()> {
    let Some(sidebar) = find_element_by_id_dyn::<Element>(document, "mobile-sidebar")? else {
        return Ok(());
    };

    if let Some(open_button) = find_element_by_id_dyn::<Element>(document, "hamburger-menu")? {
        let sidebar = sidebar.clone();
        add_event_listener(&open_button, "click", move |_| {
            log_error(remove_class(&sidebar, HIDDEN_CLASS))
        })?;
    }
    if let Some(close_button) = find_element_by_id_dyn::<Element>(document, "close-btn")? {
        add_event_listener(&close_button, "click", move |_| {
            log_error(add_class(&sidebar, HIDDEN_CLASS))
        })?;
    }

    Ok(())
}

fn init_inputs_focus(document: &Document) -> Result<()> {
    for input in query_selector_all(document, INPUT_SELECTOR)? {
        let Some(container) = input
            .parent_element()
            .and_then(|parent| parent.parent_element())
        else {
            continue;
        };

        {
            let container = container.clone();
            add_event_listener(&input, "focus", move |_| {
                log_error(add_class(&container, FOCUS_CLASS))
            })?;
        }

        let target = input.clone();
        add_event_listener(&input, "blur", move |_| {
            if input_value(&target).is_empty() {
                log_error(remove_class(&container, FOCUS_CLASS))
            }
        })?;
    }

    Ok(())
}

fn input_value(element: &Element) -> String {
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => element.get_attribute("value").unwrap_or_default(),
    }
}
