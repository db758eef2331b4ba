use crate::Result;
use crate::component::select::SelectOptions;
use crate::config::UiConfig;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use crate::json;
use crate::utils::{add_event_listener, find_element_by_id_dyn};
use crate::web::{BrowserClient, HttpClient, JSON_CONTENT_TYPE, Request};
use dto::timezones::Timezones;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlSelectElement};

pub const COUNTRY_SELECT_ID: &str = "select-country";
pub const TIMEZONE_SELECT_ID: &str = "select-timezone";

/// Numbers country changes, so that only the response to the latest one is applied.
#[derive(Debug, Default)]
pub struct LatestChange {
    generation: Cell<u64>,
}

impl LatestChange {
    fn start(&self) -> u64 {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        generation
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

/// Repopulate the timezone select whenever another country is selected.
pub fn init_timezone_select(document: &Document, config: &UiConfig) -> Result<()> {
    let country_select = find_element_by_id_dyn::<HtmlSelectElement>(document, COUNTRY_SELECT_ID)?;
    let timezone_select =
        find_element_by_id_dyn::<HtmlSelectElement>(document, TIMEZONE_SELECT_ID)?;
    let (Some(country_select), Some(timezone_select)) = (country_select, timezone_select) else {
        return Ok(());
    };

    let config = Rc::new(config.clone());
    let timezone_select = Rc::new(timezone_select);
    let latest_change = Rc::new(LatestChange::default());
    let source = country_select.clone();
    add_event_listener(&country_select, "change", move |_| {
        let country = source.value();
        let config = config.clone();
        let timezone_select = timezone_select.clone();
        let latest_change = latest_change.clone();
        spawn_local(async move {
            let result = populate_timezones(
                &BrowserClient,
                &*timezone_select,
                &config,
                &latest_change,
                &country,
            )
            .await;
            if let Err(error) = result {
                log::error!("Can't populate timezones: {error:?}");
            }
        });
    })
}

/// Replace the options of `timezones` by the zones of `country`, in server order.
///
/// The previous options are removed first, even when the zones can't be retrieved.
/// Once another country has been selected, the response is dropped.
pub async fn populate_timezones(
    client: &impl HttpClient,
    timezones: &impl SelectOptions,
    config: &UiConfig,
    latest_change: &LatestChange,
    country: &str,
) -> Result<()> {
    timezones.clear();
    let generation = latest_change.start();

    let url = config.timezones_url(country);
    let request = Request::get(&url).with_accept(JSON_CONTENT_TYPE);
    let response = client.send(&request).await;
    if !latest_change.is_latest(generation) {
        log::debug!("Dropping timezones of `{country}`: another country has been selected");
        return Ok(());
    }

    let response = response.map_err(|error| {
        log::error!("Can't retrieve timezones [url: {url}]: {error:?}");
        Error::from_parent(
            &format!("Failed to retrieve timezones for `{country}`"),
            error,
        )
    })?;

    let status = response.status();
    if !response.is_success() {
        log::error!("Can't retrieve timezones [url: {url}, status: {status}]: {response:?}");
        return Err(Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("Failed to retrieve timezones for `{country}` [status: {status}]"),
        ));
    }

    let body = response
        .body()
        .as_deref()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "No body"))?;
    let zones = json::from_str::<Timezones>(body)?;
    for zone in zones.zones() {
        timezones.append(zone, zone)?;
    }

    Ok(())
}
