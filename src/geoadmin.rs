//! Identify lookups against the Swiss federal geoportal
//!
//! The wizard's third step shows whatever the api3.geo.admin.ch identify
//! endpoint returns for a category/coordinate pair. URL assembly is pure and
//! separate from the blocking call so it can be tested without a network.

use std::time::Duration;

use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::catalog::Asset;
use crate::error::{GeopeekError, Result};

/// Identify endpoint of the geoportal MapServer
pub const IDENTIFY_ENDPOINT: &str =
    "https://api3.geo.admin.ch/rest/services/api/MapServer/identify";

/// Spatial reference of the dataset coordinates (WGS84)
const SPATIAL_REFERENCE: &str = "4326";

/// Timeout for a single identify call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Information category offered on the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
pub enum InfoCategory {
    #[strum(serialize = "Population density")]
    PopulationDensity,
    #[strum(serialize = "Drone restrictions")]
    DroneRestriction,
}

impl InfoCategory {
    /// Geoportal layer behind this category, without the `ch.` prefix.
    ///
    /// The match is exhaustive: a new category without a layer mapping does
    /// not compile.
    pub const fn layer_id(self) -> &'static str {
        match self {
            Self::PopulationDensity => "bfs.volkszaehlung-bevoelkerungsstatistik_einwohner",
            Self::DroneRestriction => "bazl.einschraenkungen-drohnen",
        }
    }

    /// Short explanation shown next to the category in the selection list
    pub const fn description(self) -> &'static str {
        match self {
            Self::PopulationDensity => "Resident counts around the asset (BFS census statistics)",
            Self::DroneRestriction => "Drone flight restrictions in force at the asset (BAZL)",
        }
    }
}

/// A fully-specified identify call: which layer to query at which point
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyRequest {
    pub category: InfoCategory,
    pub longitude: f64,
    pub latitude: f64,
}

impl IdentifyRequest {
    /// Build a request for `category` at the asset's coordinates
    pub fn for_asset(category: InfoCategory, asset: &Asset) -> Self {
        Self {
            category,
            longitude: asset.longitude,
            latitude: asset.latitude,
        }
    }

    /// Point geometry in the esriGeometryPoint JSON form the API expects
    pub fn geometry(&self) -> String {
        format!("{{\"x\": {}, \"y\": {}}}", self.longitude, self.latitude)
    }

    /// Assemble the identify URL with the full query parameter set
    pub fn url(&self) -> Result<reqwest::Url> {
        let layers = format!("all:ch.{}", self.category.layer_id());
        let geometry = self.geometry();
        reqwest::Url::parse_with_params(
            IDENTIFY_ENDPOINT,
            [
                ("layers", layers.as_str()),
                ("geometryType", "esriGeometryPoint"),
                ("sr", SPATIAL_REFERENCE),
                ("lang", "en"),
                ("returnGeometry", "false"),
                ("tolerance", "0"),
                ("geometry", geometry.as_str()),
            ],
        )
        .map_err(|e| GeopeekError::url(e.to_string()))
    }
}

/// Blocking HTTP client for identify calls, cloned into lookup threads
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::blocking::Client,
}

impl LookupClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("geopeek/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Execute the identify call and return the response document untouched.
    ///
    /// Non-2xx statuses and malformed bodies are errors; the payload is never
    /// inspected beyond being valid JSON.
    pub fn identify(&self, request: &IdentifyRequest) -> Result<Value> {
        let url = request.url()?;
        tracing::debug!("GET {url}");
        let document = self
            .http
            .get(url)
            .send()?
            .error_for_status()?
            .json::<Value>()?;
        Ok(document)
    }
}
