use crate::Result;
use crate::component::alert::{AlertRegions, DocumentAlerts};
use crate::config::UiConfig;
use crate::error::{DEFAULT_SERVER_ERROR_MESSAGE, Error};
use crate::json;
use crate::location::{BrowserNavigator, Navigator};
use crate::timer::{BrowserScheduler, Scheduler};
use crate::utils::add_event_listener;
use crate::web::{BrowserClient, HttpClient, Request, Response};
use dto::api_error::ApiError;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlFormElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionState {
    Idle,
    InFlight,
    /// The request succeeded and the user is about to leave the page.
    Redirecting,
}

/// Sends a form payload to the API, then flashes the outcome to the user:
/// the error alert for a few seconds on failure, the success alert followed by
/// a redirection on success.
///
/// The API only queues the update, so the page the user is redirected to may
/// not reflect it yet.
pub struct SubmitAndNotify<C, A, S, N> {
    client: C,
    alerts: A,
    scheduler: S,
    navigator: N,
    config: UiConfig,
    state: Cell<SubmissionState>,
}

pub type BrowserSubmitter =
    SubmitAndNotify<BrowserClient, DocumentAlerts, BrowserScheduler, BrowserNavigator>;

impl<C, A, S, N> SubmitAndNotify<C, A, S, N>
where
    C: HttpClient,
    A: AlertRegions + Clone + 'static,
    S: Scheduler,
    N: Navigator + Clone + 'static,
{
    pub fn new(client: C, alerts: A, scheduler: S, navigator: N, config: UiConfig) -> Self {
        Self {
            client,
            alerts,
            scheduler,
            navigator,
            config,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    /// Build the payload and POST it to `action`.
    ///
    /// Submissions made while another one is in flight, or once the redirection
    /// is scheduled, are ignored.
    pub async fn submit<P, F>(&self, action: &str, build_payload: F) -> Result<()>
    where
        P: Serialize,
        F: FnOnce() -> Result<P>,
    {
        if self.state.get() != SubmissionState::Idle {
            log::warn!("Ignoring submission to `{action}`: a previous one is still pending");
            return Ok(());
        }

        self.state.set(SubmissionState::InFlight);
        let result = self.send(action, build_payload).await;
        self.state.set(if result.is_ok() {
            SubmissionState::Redirecting
        } else {
            SubmissionState::Idle
        });
        result
    }

    async fn send<P, F>(&self, action: &str, build_payload: F) -> Result<()>
    where
        P: Serialize,
        F: FnOnce() -> Result<P>,
    {
        let payload = match build_payload() {
            Ok(payload) => payload,
            Err(error) => {
                self.flash_error(error.message());
                return Err(error);
            }
        };
        let request = Request::post_json(action, json::to_string(&payload)?);

        let response = match self.client.send(&request).await {
            Ok(response) => response,
            Err(error) => {
                self.flash_error(DEFAULT_SERVER_ERROR_MESSAGE);
                return Err(Error::from_parent(
                    &format!("Can't send request to `{action}`"),
                    error,
                ));
            }
        };

        if !response.is_success() {
            let message = rejection_message(&response);
            self.flash_error(&message);
            return Err(Error::new(
                &message,
                &format!(
                    "Request to `{action}` has been rejected [status: {}]",
                    response.status()
                ),
            ));
        }

        self.alerts.show_success()?;
        let navigator = self.navigator.clone();
        let target = self.config.success_redirect().to_owned();
        self.scheduler.schedule(
            self.config.redirect_delay(),
            Box::new(move || {
                if let Err(error) = navigator.replace(&target) {
                    log::error!("Can't redirect user to `{target}`: {error:?}");
                }
            }),
        )
    }

    /// Failing to display the error must not hide the error itself from the caller.
    fn flash_error(&self, message: &str) {
        if let Err(error) = self.alerts.show_error(message) {
            log::error!("Can't display error `{message}`: {error:?}");
            return;
        }

        let alerts = self.alerts.clone();
        let scheduled = self.scheduler.schedule(
            self.config.error_alert_duration(),
            Box::new(move || {
                if let Err(error) = alerts.hide_error() {
                    log::error!("Can't hide error alert: {error:?}");
                }
            }),
        );
        if let Err(error) = scheduled {
            log::error!("Can't schedule hiding of error alert: {error:?}");
        }
    }
}

/// The API explains rejections with an `{"error": "..."}` body, but not always.
fn rejection_message(response: &Response) -> String {
    response
        .body()
        .as_deref()
        .and_then(|body| json::from_str::<ApiError>(body).ok())
        .map(|api_error| api_error.error().to_owned())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| Error::from_server_status_error(response.status()).to_string())
}

/// Intercept the submissions of `form` and hand them over to a [`BrowserSubmitter`].
pub fn listen_to_submissions<B, P>(
    document: &Document,
    form: HtmlFormElement,
    config: &UiConfig,
    build_payload: B,
) -> Result<()>
where
    B: Fn(&FormData) -> Result<P> + 'static,
    P: Serialize + 'static,
{
    let submitter = Rc::new(BrowserSubmitter::new(
        BrowserClient,
        DocumentAlerts::from_document(document)?,
        BrowserScheduler,
        BrowserNavigator,
        config.for_form(&form),
    ));
    let build_payload = Rc::new(build_payload);

    intercept_submissions(&form, move |form| {
        let submitter = submitter.clone();
        let build_payload = build_payload.clone();
        spawn_local(async move {
            let action = form.action();
            let result = submitter
                .submit(&action, || {
                    let data = FormData::new_with_form(&form)?;
                    (*build_payload)(&data)
                })
                .await;
            if let Err(error) = result {
                log::error!("Form submission failed: {error:?}");
            }
        });
    })
}

/// Cancel the browser's own submission of `form` and call `on_submit` instead.
pub fn intercept_submissions<F>(form: &HtmlFormElement, on_submit: F) -> Result<()>
where
    F: Fn(HtmlFormElement) + 'static,
{
    let target = form.clone();
    add_event_listener(form, "submit", move |event| {
        event.prevent_default();
        on_submit(target.clone());
    })
}
