//! Browser transport for the startup load.

use gloo_net::http::Request;
use tws_core::loader::{Fetch, FetchedBody};
use tws_core::{LoadError, Result};
use web_sys::AbortSignal;

/// `fetch()`-backed loader transport. Each request is aborted after `timeout_ms`.
#[derive(Debug, Clone, Copy)]
pub struct GlooFetch {
    timeout_ms: u32,
}

impl GlooFetch {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    fn request_error(&self, url: &str, signal: &AbortSignal, e: gloo_net::Error) -> LoadError {
        if signal.aborted() {
            LoadError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            LoadError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl Fetch for GlooFetch {
    async fn get(&self, url: &str) -> Result<FetchedBody> {
        let signal = AbortSignal::timeout_with_u32(self.timeout_ms);

        let response = Request::get(url)
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| self.request_error(url, &signal, e))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(url, &signal, e))?;

        log::info!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(FetchedBody {
            url: url.to_string(),
            status,
            status_text,
            body,
        })
    }
}
