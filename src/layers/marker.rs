use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Style for a marker icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Icon fill color as a CSS hex string
    pub color: String,
    /// Icon size in pixels
    pub size: u32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "#f48fb1".to_string(),
            size: 17,
            opacity: 1.0,
        }
    }
}

impl MarkerStyle {
    /// Hover-highlight style swapped in on pointer-enter
    pub fn highlight() -> Self {
        Self {
            color: "#fdd835".to_string(),
            size: 21,
            opacity: 0.9,
        }
    }
}

/// A single point-of-interest marker bound to popup content.
///
/// Markers are queued during a page draw and attached to the surface
/// through a cluster group rather than individually.
#[derive(Debug, Clone)]
pub struct Marker {
    id: String,
    position: LatLng,
    style: MarkerStyle,
    hover_style: MarkerStyle,
    popup_html: Option<String>,
    hovered: bool,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            style: MarkerStyle::default(),
            hover_style: MarkerStyle::highlight(),
            popup_html: None,
            hovered: false,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.style.color = color.to_string();
        self
    }

    pub fn with_popup(mut self, html: String) -> Self {
        self.popup_html = Some(html);
        self
    }

    pub fn with_hover_style(mut self, style: MarkerStyle) -> Self {
        self.hover_style = style;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup_html(&self) -> Option<&str> {
        self.popup_html.as_deref()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Style currently in effect, accounting for the hover swap
    pub fn effective_style(&self) -> &MarkerStyle {
        if self.hovered {
            &self.hover_style
        } else {
            &self.style
        }
    }

    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::from_point(self.position)
    }
}
