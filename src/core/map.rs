//! The headless map surface.
//!
//! Holds the view state and the layer set that a front end would hand
//! to its renderer. Inserts are generation-checked: a task spawned for
//! an earlier page load cannot mutate the surface once a newer load has
//! begun, which keeps late geometry fetches from leaking stale overlays
//! onto the map.

use crate::{
    core::{config::WidgetConfig, geo::LatLng},
    layers::{cluster::ClusterGroup, manager::LayerManager, manager::Layer, track::TrackOverlay},
};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

/// Locks a shared surface, recovering the inner value from a poisoned
/// lock
pub fn lock_surface(surface: &Arc<Mutex<MapSurface>>) -> MutexGuard<'_, MapSurface> {
    surface.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct MapSurface {
    center: LatLng,
    zoom: f64,
    tile_layer_url: String,
    attribution: String,
    manager: LayerManager,
    current_generation: u64,
    accumulate: bool,
}

impl MapSurface {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            tile_layer_url: config.tile_layer_url.clone(),
            attribution: config.attribution.clone(),
            manager: LayerManager::new(),
            current_generation: 0,
            accumulate: config.accumulate_pages,
        }
    }

    /// Re-centers the view
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn tile_layer_url(&self) -> &str {
        &self.tile_layer_url
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Marks the start of a fresh page draw. Unless the surface is
    /// accumulating pages, every element of earlier generations is
    /// dropped here.
    pub fn begin_generation(&mut self, generation: u64) {
        self.current_generation = generation;
        if !self.accumulate {
            self.manager.clear_generations_before(generation);
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.current_generation
    }

    fn admits(&self, generation: u64) -> bool {
        if self.accumulate {
            generation <= self.current_generation
        } else {
            generation == self.current_generation
        }
    }

    /// Adds a track overlay if its generation is still current. Returns
    /// whether the overlay was admitted.
    pub fn add_track_overlay(&mut self, generation: u64, overlay: TrackOverlay) -> bool {
        if !self.admits(generation) {
            debug!(
                "discarding stale track overlay {} (generation {generation}, current {})",
                overlay.id(),
                self.current_generation
            );
            return false;
        }
        self.manager.add_layer(generation, Layer::Track(overlay));
        true
    }

    /// Attaches a cluster group if its generation is still current.
    /// Returns whether the group was admitted.
    pub fn attach_cluster_group(&mut self, generation: u64, group: ClusterGroup) -> bool {
        if !self.admits(generation) {
            debug!(
                "discarding stale cluster group {} (generation {generation}, current {})",
                group.id(),
                self.current_generation
            );
            return false;
        }
        self.manager.add_layer(generation, Layer::Cluster(group));
        true
    }

    pub fn layers(&self) -> &LayerManager {
        &self.manager
    }

    /// Total markers across all attached cluster groups
    pub fn marker_count(&self) -> usize {
        self.manager
            .iter()
            .map(|(_, layer)| match layer {
                Layer::Cluster(group) => group.child_count(),
                Layer::Track(_) => 0,
            })
            .sum()
    }

    /// Number of attached track overlays
    pub fn track_count(&self) -> usize {
        self.manager
            .iter()
            .filter(|(_, layer)| matches!(layer, Layer::Track(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::cluster::ClusterOptions;
    use crate::layers::marker::Marker;

    fn surface(accumulate: bool) -> MapSurface {
        let config = WidgetConfig {
            accumulate_pages: accumulate,
            ..WidgetConfig::default()
        };
        MapSurface::new(&config)
    }

    fn cluster(id: &str, n: usize) -> ClusterGroup {
        let markers = (0..n)
            .map(|i| Marker::new(format!("{id}-m{i}"), LatLng::new(46.0, 11.0)))
            .collect();
        ClusterGroup::new(id.to_string(), markers, ClusterOptions::default())
    }

    #[test]
    fn test_stale_generation_rejected() {
        let mut surface = surface(false);
        surface.begin_generation(1);
        assert!(surface.add_track_overlay(1, TrackOverlay::new("t1".into(), Vec::new())));

        surface.begin_generation(2);
        // Late arrival from the superseded load
        assert!(!surface.add_track_overlay(1, TrackOverlay::new("t2".into(), Vec::new())));
        assert_eq!(surface.track_count(), 0);
    }

    #[test]
    fn test_new_generation_clears_previous_elements() {
        let mut surface = surface(false);
        surface.begin_generation(1);
        surface.attach_cluster_group(1, cluster("page1", 3));
        assert_eq!(surface.marker_count(), 3);

        surface.begin_generation(2);
        assert_eq!(surface.marker_count(), 0);
        surface.attach_cluster_group(2, cluster("page2", 2));
        assert_eq!(surface.marker_count(), 2);
    }

    #[test]
    fn test_accumulate_mode_keeps_prior_pages() {
        let mut surface = surface(true);
        surface.begin_generation(1);
        surface.attach_cluster_group(1, cluster("page1", 3));
        surface.begin_generation(2);
        surface.attach_cluster_group(2, cluster("page2", 2));

        assert_eq!(surface.marker_count(), 5);
        // Late arrivals from loads the user actually requested stay
        assert!(surface.add_track_overlay(1, TrackOverlay::new("t1".into(), Vec::new())));
    }

    #[test]
    fn test_set_view() {
        let mut surface = surface(false);
        surface.set_view(LatLng::new(47.0, 12.0), 13.0);
        assert_eq!(surface.center(), LatLng::new(47.0, 12.0));
        assert_eq!(surface.zoom(), 13.0);
    }
}
