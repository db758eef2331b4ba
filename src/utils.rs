use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub const HIDDEN_CLASS: &str = "hidden";

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "No global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "Should have a document on window"))
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document.get_element_by_id(id).ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("`{id}` element does not exist"),
        )
    })
}

/// A missing element is not an error: the same bundle is loaded on pages
/// which don't carry every element.
pub fn find_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>> {
    document
        .get_element_by_id(id)
        .map(|element| element.dyn_into::<T>().map_err(Error::from))
        .transpose()
}

pub fn query_selector_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }

    Ok(elements)
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().add_1(class)?)
}

pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().remove_1(class)?)
}

pub fn toggle_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().toggle(class)?;
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Attach a handler for the whole page lifetime.
pub fn add_event_listener<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(_)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Handlers have nowhere to propagate their errors: log them.
pub fn log_error(result: Result<()>) {
    if let Err(error) = result {
        log::error!("{error:?}");
    }
}
