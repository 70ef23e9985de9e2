//! Typed views of the tourism and mobility API responses.
//!
//! Field names follow the API's PascalCase wire format. Localized
//! detail fields arrive under runtime-assembled keys
//! (`Detail.<lang>.Title`), so they are captured into a flattened side
//! map and exposed through [`ActivityRecord::localized_field`].

use crate::core::geo::LatLng;
use serde::Deserialize;
use std::collections::HashMap;

/// One page of activity records as returned by `/ODHActivityPoi`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPage {
    #[serde(rename = "TotalResults", default)]
    pub total_results: u32,
    #[serde(rename = "TotalPages", default)]
    pub total_pages: u32,
    #[serde(rename = "CurrentPage", default)]
    pub current_page: u32,
    #[serde(rename = "Items", default)]
    pub items: Vec<ActivityRecord>,
}

/// One point-of-interest or trail entity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "GpsInfo", default)]
    pub gps_info: HashMap<String, GpsPoint>,
    #[serde(rename = "GpsTrack", default)]
    pub gps_track: HashMap<String, GpsTrackRef>,
    #[serde(rename = "SyncSourceInterface", default)]
    pub sync_source_interface: String,
    /// Remaining fields, including the localized `Detail.*` keys
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ActivityRecord {
    /// Typed accessor for the localized detail fields, replacing
    /// dynamic key construction at call sites
    pub fn localized_field(&self, language: &str, field: &str) -> Option<&str> {
        self.extra
            .get(&format!("Detail.{language}.{field}"))
            .and_then(|value| value.as_str())
    }

    pub fn title(&self, language: &str) -> Option<&str> {
        self.localized_field(language, "Title")
    }

    pub fn base_text(&self, language: &str) -> Option<&str> {
        self.localized_field(language, "BaseText")
    }
}

/// A GPS position attached to a record
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GpsPoint {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl GpsPoint {
    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// A reference to downloadable track geometry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpsTrackRef {
    #[serde(rename = "GpxTrackUrl", default)]
    pub gpx_track_url: String,
}

/// A single geometry shape as returned by `/GeoShape/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct GeoShape {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(rename = "Geometry")]
    pub geometry: geojson::Geometry,
}

/// Latest counter/sensor snapshot from the mobility API. Stored on the
/// widget but not consumed by the drawing path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CounterSnapshot {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ActivityRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_localized_field_lookup() {
        let record = record(json!({
            "Id": "abc",
            "Detail.de.Title": "Wanderweg",
            "Detail.de.BaseText": "Ein schöner Weg",
            "Detail.it.Title": "Sentiero",
            "SyncSourceInterface": "civis.geoserver.hikingtrails"
        }));

        assert_eq!(record.title("de"), Some("Wanderweg"));
        assert_eq!(record.base_text("de"), Some("Ein schöner Weg"));
        assert_eq!(record.title("it"), Some("Sentiero"));
        assert_eq!(record.title("en"), None);
        assert_eq!(record.base_text("it"), None);
    }

    #[test]
    fn test_page_deserializes_wire_shape() {
        let page: ActivityPage = serde_json::from_value(json!({
            "TotalResults": 120,
            "TotalPages": 2,
            "CurrentPage": 1,
            "Items": [{
                "Id": "poi-1",
                "GpsInfo": { "position": { "Latitude": 46.5, "Longitude": 11.3 } },
                "GpsTrack": { "track": { "GpxTrackUrl": "https://example.test/shape/1" } },
                "SyncSourceInterface": "civis.geoserver.hikingtrails"
            }]
        }))
        .unwrap();

        assert_eq!(page.total_results, 120);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 1);

        let record = &page.items[0];
        assert_eq!(record.id, "poi-1");
        assert_eq!(
            record.gps_info["position"].lat_lng(),
            LatLng::new(46.5, 11.3)
        );
        assert_eq!(
            record.gps_track["track"].gpx_track_url,
            "https://example.test/shape/1"
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let page: ActivityPage = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.total_results, 0);
        assert!(page.items.is_empty());

        let record = record(json!({ "Id": "bare" }));
        assert!(record.gps_info.is_empty());
        assert!(record.gps_track.is_empty());
        assert_eq!(record.sync_source_interface, "");
    }
}
