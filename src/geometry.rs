//! GeoJSON geometry decoding.
//!
//! The GeoShape endpoint delivers its shape as a GeoJSON `Geometry`
//! member; the widget only draws line work, so every supported variant
//! is flattened into a list of line strings.

use crate::{core::geo::LatLng, MapWidgetError, Result};
use geo_types::Geometry;

/// Decodes a GeoJSON geometry into line strings of `LatLng` points
pub fn line_strings(geometry: &geojson::Geometry) -> Result<Vec<Vec<LatLng>>> {
    let geometry: Geometry<f64> = geometry
        .try_into()
        .map_err(|e: geojson::Error| MapWidgetError::Layer(format!("bad geometry: {e}")))?;
    let mut lines = Vec::new();
    collect(&geometry, &mut lines)?;
    Ok(lines)
}

fn collect(geometry: &Geometry<f64>, lines: &mut Vec<Vec<LatLng>>) -> Result<()> {
    match geometry {
        Geometry::LineString(line) => lines.push(convert(line.coords())),
        Geometry::MultiLineString(multi) => {
            for line in &multi.0 {
                lines.push(convert(line.coords()));
            }
        }
        // Closed shapes are drawn as their rings
        Geometry::Polygon(polygon) => {
            lines.push(convert(polygon.exterior().coords()));
            for ring in polygon.interiors() {
                lines.push(convert(ring.coords()));
            }
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                collect(&Geometry::Polygon(polygon.clone()), lines)?;
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in &collection.0 {
                collect(inner, lines)?;
            }
        }
        other => {
            return Err(MapWidgetError::Layer(format!(
                "unsupported track geometry: {other:?}"
            )))
        }
    }
    Ok(())
}

fn convert<'a>(coords: impl Iterator<Item = &'a geo_types::Coord<f64>>) -> Vec<LatLng> {
    // GeoJSON positions are [lng, lat]
    coords.map(|c| LatLng::new(c.y, c.x)).collect()
}
