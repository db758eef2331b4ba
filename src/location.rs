use crate::Result;
use crate::error::Error;
use crate::utils::get_window;

/// Browser navigation.
pub trait Navigator {
    /// Replace the current page, without keeping it in the session history.
    fn replace(&self, url: &str) -> Result<()>;
}

/// [`Navigator`] backed by `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, url: &str) -> Result<()> {
        get_window()?.location().replace(url).map_err(|error| {
            Error::from_parent(
                "Can't redirect. Please refresh the page.",
                Error::from(error),
            )
        })
    }
}

pub fn current_url() -> Result<String> {
    Ok(get_window()?.location().href()?)
}

/// Last segment of the URL path, which identifies the resource a page is about,
/// e.g. `C0123456789` for `https://example.com/channel/C0123456789?tab=1`.
pub fn last_path_segment(url: &str) -> Option<&str> {
    let url = url.split_once('#').map_or(url, |(url, _)| url);
    let url = url.split_once('?').map_or(url, |(url, _)| url);
    url.rsplit('/').next().filter(|segment| !segment.is_empty())
}
