//! Marker cluster groups.
//!
//! Mirrors the Leaflet markercluster configuration the widget ships
//! with: coverage-on-hover off, chunked loading, clustering disabled
//! above a zoom threshold, and a badge that shows the child count on a
//! grey background.

use crate::layers::marker::Marker;
use serde::{Deserialize, Serialize};

/// Configuration for a cluster group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    /// Show the covered area when hovering a cluster badge
    pub show_coverage_on_hover: bool,
    /// Insert markers in chunks to keep the surface responsive
    pub chunked_loading: bool,
    /// Zoom level at and above which markers are shown unclustered
    pub disable_clustering_at_zoom: f64,
    /// Badge background as a CSS hex string
    pub badge_background: String,
    /// Badge size in pixels
    pub badge_size: u32,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            show_coverage_on_hover: false,
            chunked_loading: true,
            disable_clustering_at_zoom: 13.0,
            badge_background: "#9e9e9e".to_string(),
            badge_size: 32,
        }
    }
}

/// Badge rendered for a cluster of markers
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterBadge {
    /// Child count shown in the badge
    pub label: String,
    pub background: String,
    pub size: u32,
}

/// A group of markers clustered under one badge below the zoom
/// threshold
#[derive(Debug, Clone)]
pub struct ClusterGroup {
    id: String,
    markers: Vec<Marker>,
    options: ClusterOptions,
}

impl ClusterGroup {
    pub fn new(id: String, markers: Vec<Marker>, options: ClusterOptions) -> Self {
        Self {
            id,
            markers,
            options,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn child_count(&self) -> usize {
        self.markers.len()
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    /// Badge for the whole group at the current child count
    pub fn badge(&self) -> ClusterBadge {
        ClusterBadge {
            label: self.child_count().to_string(),
            background: self.options.badge_background.clone(),
            size: self.options.badge_size,
        }
    }

    /// Whether markers should be shown unclustered at the given zoom
    pub fn unclustered_at(&self, zoom: f64) -> bool {
        zoom >= self.options.disable_clustering_at_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn group_of(n: usize) -> ClusterGroup {
        let markers = (0..n)
            .map(|i| Marker::new(format!("m{i}"), LatLng::new(46.0 + i as f64 * 0.01, 11.0)))
            .collect();
        ClusterGroup::new("g1".to_string(), markers, ClusterOptions::default())
    }

    #[test]
    fn test_badge_shows_child_count_on_grey() {
        let group = group_of(7);
        let badge = group.badge();
        assert_eq!(badge.label, "7");
        assert_eq!(badge.background, "#9e9e9e");
        assert_eq!(badge.size, 32);
    }

    #[test]
    fn test_clustering_disabled_above_threshold() {
        let group = group_of(2);
        assert!(!group.unclustered_at(12.0));
        assert!(group.unclustered_at(13.0));
        assert!(group.unclustered_at(15.5));
    }

    #[test]
    fn test_default_options_match_widget() {
        let options = ClusterOptions::default();
        assert!(!options.show_coverage_on_hover);
        assert!(options.chunked_loading);
        assert_eq!(options.disable_clustering_at_zoom, 13.0);
    }
}
