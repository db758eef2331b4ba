//! In-memory stand-ins for the browser, to drive the controllers without a document.

use crate::Result;
use crate::component::alert::AlertRegions;
use crate::component::select::SelectOptions;
use crate::error::Error;
use crate::location::Navigator;
use crate::timer::Scheduler;
use crate::web::{HttpClient, Request, Response};
use futures_util::FutureExt;
use futures_util::task::noop_waker_ref;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{Future, poll_fn};
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

/// Every fake resolves immediately, so a single poll is enough.
pub fn block_on<F: Future>(future: F) -> F::Output {
    future
        .now_or_never()
        .expect("future should complete without waiting")
}

/// Poll a future once, without any executor.
pub fn poll_once<F: Future + Unpin>(future: &mut F) -> Poll<F::Output> {
    future.poll_unpin(&mut Context::from_waker(noop_waker_ref()))
}

#[derive(Clone, Default)]
pub struct FakeClient {
    responses: Rc<RefCell<VecDeque<Option<Response>>>>,
    requests: Rc<RefCell<Vec<Request>>>,
}

impl FakeClient {
    pub fn responding(status: u16, body: Option<&str>) -> Self {
        let client = Self::default();
        client.push_response(status, body);
        client
    }

    /// A client whose first request never reaches the server.
    pub fn failing() -> Self {
        let client = Self::default();
        client.responses.borrow_mut().push_back(None);
        client
    }

    pub fn push_response(&self, status: u16, body: Option<&str>) {
        self.responses
            .borrow_mut()
            .push_back(Some(Response::new(status, body.map(str::to_owned))));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for FakeClient {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .flatten()
            .ok_or_else(|| Error::new("Network error", "Failed to fetch"))
    }
}

type PendingResponse = (Request, Rc<RefCell<Option<Response>>>);

/// A client whose requests stay pending until the test resolves them, in any order.
#[derive(Clone, Default)]
pub struct GatedClient {
    pending: Rc<RefCell<Vec<PendingResponse>>>,
}

impl GatedClient {
    pub fn resolve(&self, url: &str, status: u16, body: &str) {
        let pending = self.pending.borrow();
        let (_, slot) = pending
            .iter()
            .find(|(request, _)| request.url() == url)
            .expect("request should have been sent");
        slot.replace(Some(Response::new(status, Some(body.to_owned()))));
    }
}

impl HttpClient for GatedClient {
    async fn send(&self, request: &Request) -> Result<Response> {
        let slot = Rc::new(RefCell::new(None));
        self.pending
            .borrow_mut()
            .push((request.clone(), slot.clone()));
        poll_fn(|_| match slot.borrow_mut().take() {
            Some(response) => Poll::Ready(Ok(response)),
            None => Poll::Pending,
        })
        .await
    }
}

#[derive(Default)]
struct AlertsState {
    broken: bool,
    error_visible: bool,
    error_text: String,
    success_visible: bool,
}

#[derive(Clone, Default)]
pub struct FakeAlerts {
    state: Rc<RefCell<AlertsState>>,
}

impl FakeAlerts {
    /// Alert regions missing from the page: every call fails.
    pub fn broken() -> Self {
        let alerts = Self::default();
        alerts.state.borrow_mut().broken = true;
        alerts
    }

    pub fn is_error_visible(&self) -> bool {
        self.state.borrow().error_visible
    }

    pub fn error_text(&self) -> String {
        self.state.borrow().error_text.clone()
    }

    pub fn is_success_visible(&self) -> bool {
        self.state.borrow().success_visible
    }
}

impl AlertRegions for FakeAlerts {
    fn show_error(&self, message: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.broken {
            return Err(Error::new("Alert missing", "`error-alert` element does not exist"));
        }
        state.error_text = message.to_owned();
        state.error_visible = true;
        Ok(())
    }

    fn hide_error(&self) -> Result<()> {
        self.state.borrow_mut().error_visible = false;
        Ok(())
    }

    fn show_success(&self) -> Result<()> {
        self.state.borrow_mut().success_visible = true;
        Ok(())
    }
}

type Task = (Duration, Box<dyn FnOnce()>);

/// Keeps scheduled tasks until the test runs them.
#[derive(Clone, Default)]
pub struct FakeScheduler {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl FakeScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_all(&self) {
        let tasks = self.tasks.take();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()> {
        self.tasks.borrow_mut().push((delay, task));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl FakeNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn replace(&self, url: &str) -> Result<()> {
        self.visited.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    Cleared,
    Appended { value: String, label: String },
}

/// Records every change made to the option list, in order.
#[derive(Default)]
pub struct FakeSelect {
    options: RefCell<Vec<(String, String)>>,
    events: RefCell<Vec<SelectEvent>>,
}

impl FakeSelect {
    pub fn with_options(options: &[&str]) -> Self {
        let select = Self::default();
        select.options.replace(
            options
                .iter()
                .map(|option| ((*option).to_owned(), (*option).to_owned()))
                .collect(),
        );
        select
    }

    pub fn options(&self) -> Vec<(String, String)> {
        self.options.borrow().clone()
    }

    pub fn events(&self) -> Vec<SelectEvent> {
        self.events.borrow().clone()
    }
}

impl SelectOptions for FakeSelect {
    fn clear(&self) {
        self.options.borrow_mut().clear();
        self.events.borrow_mut().push(SelectEvent::Cleared);
    }

    fn append(&self, value: &str, label: &str) -> Result<()> {
        self.options
            .borrow_mut()
            .push((value.to_owned(), label.to_owned()));
        self.events.borrow_mut().push(SelectEvent::Appended {
            value: value.to_owned(),
            label: label.to_owned(),
        });
        Ok(())
    }
}
