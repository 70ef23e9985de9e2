//! # trailmap
//!
//! A headless map-widget engine for tourism open-data POIs and trails.
//!
//! The crate fetches activity records page by page from the Open Data
//! Hub tourism API, classifies them by source system, and renders them
//! in throttled batches as markers and track overlays on an in-process
//! map surface. The actual pixel/tile rendering is left to whatever
//! front end embeds the surface.

pub mod api;
pub mod classify;
pub mod core;
pub mod geometry;
pub mod layers;
pub mod pager;
pub mod render;
pub mod ui;
pub mod widget;

// Re-export public API
pub use crate::core::{
    config::WidgetConfig,
    geo::{LatLng, LatLngBounds},
    map::MapSurface,
};

pub use api::{
    client::HttpClient,
    types::{ActivityPage, ActivityRecord, GpsPoint, GpsTrackRef},
    ActivitySource,
};

pub use classify::{classify, Classification};

pub use layers::{
    cluster::{ClusterGroup, ClusterOptions},
    manager::{Layer, LayerManager},
    marker::Marker,
    track::TrackOverlay,
};

pub use pager::{PageState, Pager};
pub use render::batch::BatchRenderer;
pub use widget::MapWidget;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapWidgetError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapWidgetError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapWidgetError;
