use crate::layers::{cluster::ClusterGroup, track::TrackOverlay};
use std::collections::HashMap;

/// A visual element owned by the map surface
#[derive(Debug, Clone)]
pub enum Layer {
    Track(TrackOverlay),
    Cluster(ClusterGroup),
}

impl Layer {
    pub fn id(&self) -> &str {
        match self {
            Layer::Track(overlay) => overlay.id(),
            Layer::Cluster(group) => group.id(),
        }
    }
}

struct LayerEntry {
    generation: u64,
    layer: Layer,
}

/// Manages layers for the map surface, keeping insertion order and the
/// page-load generation each layer belongs to
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, LayerEntry>,
    /// Insertion order of layer IDs
    order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a layer tagged with its page-load generation. A layer with
    /// the same ID replaces the previous one in place.
    pub fn add_layer(&mut self, generation: u64, layer: Layer) {
        let layer_id = layer.id().to_string();
        if self
            .layers
            .insert(layer_id.clone(), LayerEntry { generation, layer })
            .is_none()
        {
            self.order.push(layer_id);
        }
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Layer> {
        self.order.retain(|id| id != layer_id);
        self.layers.remove(layer_id).map(|entry| entry.layer)
    }

    /// Drops every layer that belongs to a generation older than the
    /// given one
    pub fn clear_generations_before(&mut self, generation: u64) {
        let layers = &mut self.layers;
        self.order.retain(|id| {
            let stale = layers
                .get(id)
                .map(|entry| entry.generation < generation)
                .unwrap_or(true);
            if stale {
                layers.remove(id);
            }
            !stale
        });
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&Layer> {
        self.layers.get(layer_id).map(|entry| &entry.layer)
    }

    /// All layers with their generations, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Layer)> {
        self.order
            .iter()
            .filter_map(|id| self.layers.get(id))
            .map(|entry| (entry.generation, &entry.layer))
    }

    /// Lists all layer IDs in insertion order
    pub fn list_layers(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::track::TrackOverlay;

    fn track(id: &str) -> Layer {
        Layer::Track(TrackOverlay::new(id.to_string(), Vec::new()))
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut manager = LayerManager::new();
        manager.add_layer(1, track("a"));
        manager.add_layer(1, track("b"));
        manager.add_layer(2, track("c"));

        assert_eq!(manager.list_layers(), vec!["a", "b", "c"]);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_clear_generations_before() {
        let mut manager = LayerManager::new();
        manager.add_layer(1, track("a"));
        manager.add_layer(1, track("b"));
        manager.add_layer(2, track("c"));

        manager.clear_generations_before(2);
        assert_eq!(manager.list_layers(), vec!["c"]);
        assert!(manager.get_layer("a").is_none());
        assert!(manager.get_layer("c").is_some());
    }

    #[test]
    fn test_replace_same_id_keeps_single_entry() {
        let mut manager = LayerManager::new();
        manager.add_layer(1, track("a"));
        manager.add_layer(2, track("a"));

        assert_eq!(manager.len(), 1);
        // Replacing bumps the generation, so the layer survives a clear
        manager.clear_generations_before(2);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = LayerManager::new();
        manager.add_layer(1, track("a"));
        assert!(manager.remove_layer("a").is_some());
        assert!(manager.is_empty());
        assert!(manager.remove_layer("a").is_none());
    }
}
