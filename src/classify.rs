//! Source-system classification.
//!
//! Maps a record's raw source identifier to the display color, activity
//! type label and provider label used for markers and popups. A pure
//! lookup: unknown identifiers fall through to the pink default and are
//! never an error. Callers classify per record, since one page can mix
//! sources.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display attributes derived from a source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Marker color as a CSS hex string
    pub color: &'static str,
    /// Activity type label shown in the popup
    pub activity_type: &'static str,
    /// Provider label shown in the popup
    pub provider: &'static str,
}

/// Fallback for unrecognized source identifiers
pub const DEFAULT_CLASSIFICATION: Classification = Classification {
    color: "#f48fb1",
    activity_type: "",
    provider: "",
};

static SOURCE_TABLE: Lazy<HashMap<&'static str, Classification>> = Lazy::new(|| {
    HashMap::from([
        (
            "civis.geoserver.hikingtrails",
            Classification {
                color: "#e91e63",
                activity_type: "hikingtrail",
                provider: "civis.geoserver",
            },
        ),
        (
            "civis.geoserver.cyclewaystrails",
            Classification {
                color: "#3f51b5",
                activity_type: "cycleway",
                provider: "civis.geoserver",
            },
        ),
        (
            "civis.geoserver.mountainbikeroutes",
            Classification {
                color: "#4caf50",
                activity_type: "mountainbikeroute",
                provider: "civis.geoserver",
            },
        ),
        (
            "civis.geoserver.intermunicipalpaths",
            Classification {
                color: "#ff9800",
                activity_type: "intermunicipalpath",
                provider: "civis.geoserver",
            },
        ),
    ])
});

/// Classifies a source identifier. Total: unknown identifiers yield
/// [`DEFAULT_CLASSIFICATION`].
pub fn classify(source: &str) -> Classification {
    SOURCE_TABLE
        .get(source)
        .copied()
        .unwrap_or(DEFAULT_CLASSIFICATION)
}
