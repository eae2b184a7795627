//! Startup data load: both resources are requested together and the load
//! succeeds only if both come back with a 2xx status and parse.
//!
//! The HTTP transport is abstracted behind [`Fetch`] so the browser build can
//! plug in `gloo-net` while tests use an in-memory fake.

use crate::boundary::BoundaryCollection;
use crate::config::Endpoints;
use crate::dataset::TwsDataset;
use crate::error::{LoadError, Result};
use crate::series::WaterSeries;
use std::rc::Rc;

/// A completed HTTP response, status included.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedBody {
    pub url: String,
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchedBody {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `LoadError::Status`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(LoadError::Status {
                url: self.url,
                status: self.status,
                status_text: self.status_text,
            })
        }
    }
}

/// Issues a single GET request. Transport failures and timeouts are errors;
/// any HTTP status is a successful fetch.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<FetchedBody>;
}

/// Both loaded resources. Read-only for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub tws: TwsDataset,
    pub boundaries: Rc<BoundaryCollection>,
}

impl DashboardData {
    /// Series for the selected district, if any.
    pub fn series_for(&self, district: Option<&str>) -> Option<&WaterSeries> {
        district.and_then(|name| self.tws.lookup(name))
    }
}

/// Observable state of the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    /// Terminal for the session; holds the message shown to the user
    Failed(String),
    Ready(Rc<DashboardData>),
}

impl LoadState {
    pub fn from_result(result: Result<DashboardData>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(Rc::new(data)),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            LoadState::Ready(data) => Some(&**data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

async fn fetch_success<F: Fetch>(fetcher: &F, url: &str) -> Result<FetchedBody> {
    fetcher.get(url).await?.error_for_status()
}

/// Fetch and parse both resources. The first failing request aborts the load.
pub async fn load_dashboard<F: Fetch>(fetcher: &F, endpoints: &Endpoints) -> Result<DashboardData> {
    log::info!(
        "Loading TWS data from {} and boundaries from {}",
        endpoints.tws,
        endpoints.boundaries
    );

    let (tws, boundaries) = futures::try_join!(
        fetch_success(fetcher, &endpoints.tws),
        fetch_success(fetcher, &endpoints.boundaries),
    )?;

    let tws = TwsDataset::from_json(&tws.body)?;
    let boundaries = BoundaryCollection::from_json(&boundaries.body)?;

    log::info!(
        "Loaded TWS series for {} districts and {} boundary features",
        tws.len(),
        boundaries.len()
    );

    Ok(DashboardData {
        tws,
        boundaries: Rc::new(boundaries),
    })
}

/// Run the load and fold the outcome into a `LoadState`.
pub async fn load_state<F: Fetch>(fetcher: &F, endpoints: &Endpoints) -> LoadState {
    let result = load_dashboard(fetcher, endpoints).await;
    if let Err(e) = &result {
        log::error!("Failed to load dashboard data: {}", e);
    }
    LoadState::from_result(result)
}
