pub mod channel;
pub mod component;
pub mod config;
pub mod error;
pub mod form;
pub mod json;
pub mod location;
pub mod member;
pub mod submit;
pub mod timer;
pub mod timezone;
pub mod utils;
pub mod web;

#[cfg(test)]
mod testing;

use crate::channel::init_channel_settings_form;
use crate::component::navbar::init_navbar;
use crate::config::UiConfig;
use crate::error::Error;
use crate::member::init_member_profile_form;
use crate::timezone::init_timezone_select;
use crate::utils::{get_document, log_error};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    match get_document() {
        Ok(document) => init_page(&document, &UiConfig::default()),
        Err(error) => log::error!("Can't initialize page: {error:?}"),
    }
}

/// Every page loads the same bundle: wire whatever the current page contains.
/// Each part is independent, so one broken part doesn't prevent the others from working.
pub fn init_page(document: &Document, config: &UiConfig) {
    log_error(init_navbar(document));
    log_error(init_channel_settings_form(document, config));
    log_error(init_member_profile_form(document, config));
    log_error(init_timezone_select(document, config));
}
