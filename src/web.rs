use crate::Result;
use crate::utils::get_window;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Headers, RequestInit};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    method: Method,
    content_type: Option<String>,
    accept: Option<String>,
    body: Option<String>,
}

impl Request {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            method: Method::Get,
            content_type: None,
            accept: None,
            body: None,
        }
    }

    pub fn post_json(url: &str, body: String) -> Self {
        Self {
            url: url.to_owned(),
            method: Method::Post,
            content_type: Some(JSON_CONTENT_TYPE.to_owned()),
            accept: None,
            body: Some(body),
        }
    }

    pub fn with_accept(mut self, accept: &str) -> Self {
        self.accept = Some(accept.to_owned());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[derive(Debug)]
pub struct Response {
    status: u16,
    body: Option<String>,
}

impl Response {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Option<String> {
        &self.body
    }

    /// Same as `Response.ok` in the browser.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the API.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: &Request) -> Result<Response>;
}

/// [`HttpClient`] backed by `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClient;

impl HttpClient for BrowserClient {
    async fn send(&self, request: &Request) -> Result<Response> {
        fetch(request).await
    }
}

/// A function to make simple AJAX requests.
pub async fn fetch(request: &Request) -> Result<Response> {
    let window = get_window()?;
    let request_init = RequestInit::new();
    if let Some(body) = request.body() {
        request_init.set_body(&JsValue::from_str(body));
    }
    request_init.set_method(request.method().as_str());
    let headers = Headers::new()?;
    if let Some(content_type) = request.content_type() {
        headers.append("Content-Type", content_type)?;
    }
    if let Some(accept) = request.accept() {
        headers.append("Accept", accept)?;
    }
    request_init.set_headers(&JsValue::from(&headers));
    let js_request = web_sys::Request::new_with_str_and_init(request.url(), &request_init)?;

    log::debug!("{} {}", request.method().as_str(), request.url());
    let promise = window.fetch_with_request(&js_request);
    let response = wasm_bindgen_futures::JsFuture::from(promise)
        .await?
        .dyn_into::<web_sys::Response>()?;
    let status = response.status();
    Ok(Response {
        status,
        body: wasm_bindgen_futures::JsFuture::from(response.text()?)
            .await?
            .as_string(),
    })
}
