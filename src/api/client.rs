//! HTTP client for the tourism and mobility APIs.
//!
//! One pooled `reqwest::Client` per widget. Every operation logs
//! failures and propagates them to the caller; there is no retry or
//! backoff, a failed page load leaves the surface as it was.

use crate::{
    api::{
        types::{ActivityPage, CounterSnapshot, GeoShape},
        ActivitySource,
    },
    core::{config::WidgetConfig, geo::LatLng},
    geometry, Result,
};
use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpClient {
    client: reqwest::Client,
    tourism_base_url: String,
    mobility_base_url: String,
    origin: String,
}

impl HttpClient {
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            tourism_base_url: config.tourism_base_url.clone(),
            mobility_base_url: config.mobility_base_url.clone(),
            origin: config.origin.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!("GET {url} failed: {e}");
                e
            })?;

        response.json::<T>().await.map_err(|e| {
            error!("GET {url} returned malformed body: {e}");
            e.into()
        })
    }

    /// Fetches one page of activity records from `/ODHActivityPoi`
    pub async fn fetch_activities(
        &self,
        language: &str,
        source: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<ActivityPage> {
        let url = format!("{}/ODHActivityPoi", self.tourism_base_url);
        let fields = format!(
            "Id,Shortname,GpsInfo,Tags,GpsTrack,Detail.{language}.Title,Detail.{language}.BaseText,Source,SyncSourceInterface"
        );
        let query = [
            ("pagesize", page_size.to_string()),
            ("fields", fields),
            ("active", "true".to_string()),
            ("language", language.to_string()),
            ("source", source.to_string()),
            ("pagenumber", page_number.to_string()),
            ("origin", self.origin.clone()),
        ];
        self.get_json(&url, &query).await
    }

    /// Fetches a single geometry shape by identifier
    pub async fn fetch_geo_shape(&self, id: &str) -> Result<GeoShape> {
        let url = format!("{}/GeoShape/{id}", self.tourism_base_url);
        let query = [("origin", self.origin.clone())];
        self.get_json(&url, &query).await
    }

    /// Fetches the latest counter/sensor snapshot from the mobility
    /// API. Not consumed by the drawing path.
    pub async fn fetch_latest_counters(&self) -> Result<CounterSnapshot> {
        let url = format!("{}/flat,node/PeopleCounter/*/latest", self.mobility_base_url);
        let query = [("origin", self.origin.clone())];
        self.get_json(&url, &query).await
    }

    async fn fetch_geometry_payload(&self, url: &str) -> Result<Vec<Vec<LatLng>>> {
        let body: serde_json::Value = self.get_json(url, &[]).await?;
        // The shape endpoints wrap the geometry in a `Geometry` member;
        // a bare GeoJSON geometry body is accepted too.
        let raw = body.get("Geometry").cloned().unwrap_or(body);
        let geometry: geojson::Geometry = serde_json::from_value(raw).map_err(|e| {
            error!("GET {url} returned no usable geometry: {e}");
            e
        })?;
        geometry::line_strings(&geometry)
    }
}

#[async_trait]
impl ActivitySource for HttpClient {
    async fn fetch_activities(
        &self,
        language: &str,
        source: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<ActivityPage> {
        HttpClient::fetch_activities(self, language, source, page_number, page_size).await
    }

    async fn fetch_track_geometry(&self, url: &str) -> Result<Vec<Vec<LatLng>>> {
        self.fetch_geometry_payload(url).await
    }
}
