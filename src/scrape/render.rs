// src/scrape/render.rs
//
// Page renderers. The debate pages build their DOM client-side, so the default
// renderer drives a headless Chrome; `HttpRenderer` serves pages that don't.

use reqwest::blocking::Client;

use crate::config::options::{DebateOptions, RendererKind};
use crate::core::net;
use crate::error::Result;

pub trait Renderer {
    /// Final HTML of `url`, after whatever rendering the page needs.
    fn render(&mut self, url: &str) -> Result<String>;
}

pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self { client: net::client()? })
    }
}

impl Renderer for HttpRenderer {
    fn render(&mut self, url: &str) -> Result<String> {
        net::http_get(&self.client, url)
    }
}

#[cfg(feature = "browser")]
mod chrome {
    use std::thread;
    use std::time::Duration;

    use headless_chrome::{Browser, LaunchOptions};
    use tracing::debug;

    use super::Renderer;
    use crate::error::{Error, Result};

    fn browser_err(e: impl std::fmt::Display) -> Error {
        Error::Browser(e.to_string())
    }

    /// One browser process for the whole run; one tab per page.
    pub struct ChromeRenderer {
        browser: Browser,
        settle: Duration,
    }

    impl ChromeRenderer {
        pub fn launch(headless: bool, settle_secs: u64) -> Result<Self> {
            let opts = LaunchOptions::default_builder()
                .headless(headless)
                .build()
                .map_err(browser_err)?;
            let browser = Browser::new(opts).map_err(browser_err)?;
            Ok(Self { browser, settle: Duration::from_secs(settle_secs) })
        }
    }

    impl Renderer for ChromeRenderer {
        fn render(&mut self, url: &str) -> Result<String> {
            let tab = self.browser.new_tab().map_err(browser_err)?;
            tab.navigate_to(url).map_err(browser_err)?;
            tab.wait_until_navigated().map_err(browser_err)?;
            debug!("Render: settling {}s for {url}", self.settle.as_secs());
            thread::sleep(self.settle);
            let html = tab.get_content().map_err(browser_err);
            let _ = tab.close(true);
            html
        }
    }
}

#[cfg(feature = "browser")]
pub use chrome::ChromeRenderer;

/// Renderer selected by `opts.renderer`.
pub fn make_renderer(opts: &DebateOptions) -> Result<Box<dyn Renderer>> {
    match opts.renderer {
        RendererKind::Http => Ok(Box::new(HttpRenderer::new()?)),
        #[cfg(feature = "browser")]
        RendererKind::Browser => Ok(Box::new(ChromeRenderer::launch(opts.headless, opts.settle_secs)?)),
        #[cfg(not(feature = "browser"))]
        RendererKind::Browser => Err(crate::error::Error::Browser(s!(
            "built without the `browser` feature; use the http renderer"
        ))),
    }
}
