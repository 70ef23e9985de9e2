pub mod client;
pub mod types;

use crate::{core::geo::LatLng, Result};
use async_trait::async_trait;

use self::types::ActivityPage;

/// Data source behind the fetch+render pipeline.
///
/// The HTTP client implements this against the live API; tests swap in
/// an in-memory source.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetches one page of activity records
    async fn fetch_activities(
        &self,
        language: &str,
        source: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<ActivityPage>;

    /// Fetches the geometry behind a track reference URL, decoded into
    /// line strings
    async fn fetch_track_geometry(&self, url: &str) -> Result<Vec<Vec<LatLng>>>;
}
