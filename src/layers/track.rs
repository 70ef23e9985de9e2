use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Stroke style for track overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Stroke color as a CSS hex string
    pub color: String,
    /// Stroke width in pixels
    pub weight: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff".to_string(),
            weight: 3.0,
            opacity: 1.0,
        }
    }
}

impl PathStyle {
    /// Hover-highlight stroke swapped in on pointer-enter
    pub fn highlight() -> Self {
        Self {
            color: "#fdd835".to_string(),
            weight: 5.0,
            opacity: 0.9,
        }
    }
}

/// A track geometry overlay bound to popup content.
///
/// One overlay holds the line strings of a single fetched geometry; it
/// is added directly to the surface as soon as its fetch resolves.
#[derive(Debug, Clone)]
pub struct TrackOverlay {
    id: String,
    lines: Vec<Vec<LatLng>>,
    style: PathStyle,
    hover_style: PathStyle,
    popup_html: Option<String>,
    hovered: bool,
}

impl TrackOverlay {
    pub fn new(id: String, lines: Vec<Vec<LatLng>>) -> Self {
        Self {
            id,
            lines,
            style: PathStyle::default(),
            hover_style: PathStyle::highlight(),
            popup_html: None,
            hovered: false,
        }
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_popup(mut self, html: String) -> Self {
        self.popup_html = Some(html);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lines(&self) -> &[Vec<LatLng>] {
        &self.lines
    }

    pub fn popup_html(&self) -> Option<&str> {
        self.popup_html.as_deref()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Style currently in effect, accounting for the hover swap
    pub fn effective_style(&self) -> &PathStyle {
        if self.hovered {
            &self.hover_style
        } else {
            &self.style
        }
    }

    /// Bounding box over all line strings, `None` for an empty overlay
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for line in &self.lines {
            if let Some(line_bounds) = LatLngBounds::from_points(line) {
                bounds = Some(match bounds {
                    Some(b) => b.union(&line_bounds),
                    None => line_bounds,
                });
            }
        }
        bounds
    }
}
