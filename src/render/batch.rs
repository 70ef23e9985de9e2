//! The batched page-draw pipeline.
//!
//! Records are rendered in fixed-size chunks with a throttling pause in
//! between, which bounds concurrent geometry fetches and surface
//! insertions on large result pages. Chunks run strictly in order;
//! within a chunk the per-record work runs concurrently. Geometry
//! fetches are fire-and-forget: the chunk's completion never waits for
//! them, and the surface's generation check discards whatever resolves
//! after the page has been superseded.

use crate::{
    api::{types::ActivityRecord, ActivitySource},
    classify::classify,
    core::{
        config::WidgetConfig,
        map::{lock_surface, MapSurface},
    },
    layers::{
        cluster::{ClusterGroup, ClusterOptions},
        marker::Marker,
        track::TrackOverlay,
    },
    ui::popup::popup_html,
    Result,
};
use futures::future::join_all;
use log::{debug, warn};
use std::{
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

pub struct BatchRenderer {
    batch_size: usize,
    batch_delay: Duration,
    cluster_options: ClusterOptions,
}

impl BatchRenderer {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            batch_delay: config.batch_delay,
            cluster_options: config.cluster.clone(),
        }
    }

    /// Draws one page worth of records onto the surface.
    ///
    /// The displayed counter accumulates across the chunks of this call;
    /// the caller zeroes it before a fresh page draw.
    pub async fn render_page<S>(
        &self,
        records: &[ActivityRecord],
        language: &str,
        generation: u64,
        source: &Arc<S>,
        surface: &Arc<Mutex<MapSurface>>,
        displayed: &AtomicU32,
    ) -> Result<()>
    where
        S: ActivitySource + 'static,
    {
        if records.is_empty() {
            debug!("generation {generation}: no records, nothing to render");
            return Ok(());
        }

        let total_chunks = records.len().div_ceil(self.batch_size);
        let mut queued: Vec<Marker> = Vec::with_capacity(records.len());

        for (index, chunk) in records.chunks(self.batch_size).enumerate() {
            debug!(
                "generation {generation}: rendering chunk {}/{total_chunks} ({} records)",
                index + 1,
                chunk.len()
            );

            let results = join_all(
                chunk
                    .iter()
                    .map(|record| self.render_record(record, language, generation, source, surface)),
            )
            .await;

            let mut shown = 0u32;
            for (record, markers) in chunk.iter().zip(results) {
                if !record.gps_info.is_empty() || !record.gps_track.is_empty() {
                    shown += 1;
                }
                queued.extend(markers);
            }
            displayed.fetch_add(shown, Ordering::Relaxed);

            if index + 1 < total_chunks {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        let group = ClusterGroup::new(
            format!("activities-{generation}"),
            queued,
            self.cluster_options.clone(),
        );
        let attached = lock_surface(surface).attach_cluster_group(generation, group);
        if !attached {
            debug!("generation {generation}: superseded before attach, cluster group dropped");
        }
        Ok(())
    }

    /// Per-record synchronous work: classify, build the popup, queue
    /// markers, and kick off geometry fetches.
    async fn render_record<S>(
        &self,
        record: &ActivityRecord,
        language: &str,
        generation: u64,
        source: &Arc<S>,
        surface: &Arc<Mutex<MapSurface>>,
    ) -> Vec<Marker>
    where
        S: ActivitySource + 'static,
    {
        let classification = classify(&record.sync_source_interface);
        let popup = popup_html(record, language, &classification);

        for (key, track) in &record.gps_track {
            if track.gpx_track_url.is_empty() {
                continue;
            }
            let overlay_id = format!("{}-{key}", record.id);
            let url = track.gpx_track_url.clone();
            let popup = popup.clone();
            let source = Arc::clone(source);
            let surface = Arc::clone(surface);

            tokio::spawn(async move {
                match source.fetch_track_geometry(&url).await {
                    Ok(lines) => {
                        let overlay =
                            TrackOverlay::new(overlay_id, lines).with_popup(popup);
                        lock_surface(&surface).add_track_overlay(generation, overlay);
                    }
                    Err(e) => warn!("track geometry fetch for {url} failed: {e}"),
                }
            });
        }

        let mut markers = Vec::with_capacity(record.gps_info.len());
        for (key, point) in &record.gps_info {
            markers.push(
                Marker::new(format!("{}-{key}", record.id), point.lat_lng())
                    .with_color(classification.color)
                    .with_popup(popup.clone()),
            );
        }
        markers
    }
}
