//! Widget configuration.
//!
//! Everything the widget consumes once at first render lives here: API
//! endpoints and the deploy-time origin tag, paging and batching knobs,
//! and the initial map view. Base URLs can be overridden through the
//! same environment variables the deployed widget uses.

use crate::{core::geo::LatLng, layers::cluster::ClusterOptions, MapWidgetError, Result};
use std::time::Duration;

/// Environment variable overriding the tourism API base URL
pub const TOURISM_BASE_PATH_VAR: &str = "TOURISM_BASE_PATH";
/// Environment variable overriding the mobility API base URL
pub const MOBILITY_BASE_PATH_VAR: &str = "MOBILITY_BASE_PATH";

const DEFAULT_TOURISM_BASE_URL: &str = "https://tourism.api.opendatahub.com/v1";
const DEFAULT_MOBILITY_BASE_URL: &str = "https://mobility.api.opendatahub.com/v2";
const DEFAULT_ORIGIN: &str = "webcomp-tourism-digiway";

const DEFAULT_TILE_LAYER_URL: &str =
    "https://cartodb-basemaps-{s}.global.ssl.fastly.net/rastertiles/voyager/{z}/{x}/{y}.png";
const DEFAULT_ATTRIBUTION: &str = "<a target=\"_blank\" href=\"https://opendatahub.com\">OpenDataHub.com</a> | &copy; <a target=\"_blank\" href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>, &copy; <a target=\"_blank\" href=\"https://carto.com/attribution\">CARTO</a>";

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Language code used for localized fields and the API projection
    pub language: String,
    /// Source identifier filter passed to the activities endpoint
    pub source: String,
    /// Items requested per page
    pub page_size: u32,
    /// Records rendered per batch before the throttling pause
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub batch_delay: Duration,
    /// Base URL of the tourism API
    pub tourism_base_url: String,
    /// Base URL of the mobility API
    pub mobility_base_url: String,
    /// Origin tag sent with every request
    pub origin: String,
    /// Initial map center
    pub center: LatLng,
    /// Initial map zoom
    pub zoom: f64,
    /// Tile layer URL template for the embedding front end
    pub tile_layer_url: String,
    /// Attribution line for the tile layer
    pub attribution: String,
    /// Marker clustering options
    pub cluster: ClusterOptions,
    /// Keep earlier pages' elements on the surface instead of clearing
    /// them on each page draw
    pub accumulate_pages: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            source: String::new(),
            page_size: 100,
            batch_size: 50,
            batch_delay: Duration::from_millis(500),
            tourism_base_url: DEFAULT_TOURISM_BASE_URL.to_string(),
            mobility_base_url: DEFAULT_MOBILITY_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            center: LatLng::new(46.479, 11.331),
            zoom: 9.0,
            tile_layer_url: DEFAULT_TILE_LAYER_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            cluster: ClusterOptions::default(),
            accumulate_pages: false,
        }
    }
}

impl WidgetConfig {
    /// Default configuration with base URLs taken from the environment
    /// when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(TOURISM_BASE_PATH_VAR) {
            config.tourism_base_url = url;
        }
        if let Ok(url) = std::env::var(MOBILITY_BASE_PATH_VAR) {
            config.mobility_base_url = url;
        }
        config
    }

    /// Applies a `"lat,lng,zoom"` center attribute as accepted by the
    /// embedding element
    pub fn apply_center_attribute(&mut self, attribute: &str) -> Result<()> {
        let (center, zoom) = parse_center_attribute(attribute)?;
        self.center = center;
        self.zoom = zoom;
        Ok(())
    }
}

/// Parses a `"lat,lng,zoom"` string into a center point and zoom level
pub fn parse_center_attribute(attribute: &str) -> Result<(LatLng, f64)> {
    let parts: Vec<&str> = attribute.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(MapWidgetError::Config(format!(
            "expected \"lat,lng,zoom\", got {attribute:?}"
        )));
    }

    let lat: f64 = parts[0]
        .parse()
        .map_err(|_| MapWidgetError::InvalidCoordinates(format!("bad latitude {:?}", parts[0])))?;
    let lng: f64 = parts[1]
        .parse()
        .map_err(|_| MapWidgetError::InvalidCoordinates(format!("bad longitude {:?}", parts[1])))?;
    let zoom: f64 = parts[2]
        .parse()
        .map_err(|_| MapWidgetError::Config(format!("bad zoom {:?}", parts[2])))?;

    let center = LatLng::new(lat, lng);
    if !center.is_valid() {
        return Err(MapWidgetError::InvalidCoordinates(format!(
            "out of range: {lat},{lng}"
        )));
    }

    Ok((center, zoom))
}
