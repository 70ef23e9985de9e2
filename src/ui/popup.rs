//! Popup content for markers and track overlays.
//!
//! The embedding front end gets the popup as an HTML fragment, the same
//! shape the widget has always produced: bold localized title, the base
//! text when present, and the classification's type/provider line.

use crate::{api::types::ActivityRecord, classify::Classification};

/// Builds the popup HTML fragment for one record
pub fn popup_html(
    record: &ActivityRecord,
    language: &str,
    classification: &Classification,
) -> String {
    let title = record.title(language).unwrap_or("");

    let mut html = String::from("<div class=\"popup\"><b>");
    html.push_str(&escape(title));
    html.push_str("</b>");

    if let Some(base_text) = record.base_text(language) {
        html.push_str("<div>");
        html.push_str(&escape(base_text));
        html.push_str("</div>");
    }

    if !classification.activity_type.is_empty() || !classification.provider.is_empty() {
        html.push_str("<div class=\"meta\">");
        html.push_str(&escape(classification.activity_type));
        if !classification.activity_type.is_empty() && !classification.provider.is_empty() {
            html.push_str(" · ");
        }
        html.push_str(&escape(classification.provider));
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// Minimal HTML escaping for text interpolated into the fragment
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
