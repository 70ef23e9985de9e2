//! The widget shell.
//!
//! Owns the map surface lifecycle and wires the pager to the
//! fetch+render pipeline. Attributes (language, source, page size,
//! center string) are consumed once through [`WidgetConfig`]; the first
//! render draws page 1 and every navigation re-runs the full pipeline
//! for the target page under a fresh page-load generation.

use crate::{
    api::{types::CounterSnapshot, ActivitySource},
    core::{
        config::WidgetConfig,
        map::{lock_surface, MapSurface},
    },
    pager::{PageState, Pager},
    render::batch::BatchRenderer,
    HttpClient, Result,
};
use log::{debug, info};
use std::sync::{Arc, Mutex};

pub struct MapWidget<S: ActivitySource + 'static> {
    config: WidgetConfig,
    source: Arc<S>,
    surface: Arc<Mutex<MapSurface>>,
    renderer: BatchRenderer,
    pager: Pager,
    generation: u64,
    latest_counters: Option<CounterSnapshot>,
}

impl MapWidget<HttpClient> {
    /// Widget backed by the live HTTP APIs
    pub fn from_config(config: WidgetConfig) -> Result<Self> {
        let client = HttpClient::new(&config)?;
        Ok(Self::with_source(config, client))
    }

    /// Refreshes the stored counter snapshot from the mobility API. The
    /// drawing path never reads it.
    pub async fn refresh_latest_counters(&mut self) -> Result<()> {
        let snapshot = self.source.fetch_latest_counters().await?;
        self.latest_counters = Some(snapshot);
        Ok(())
    }
}

impl<S: ActivitySource + 'static> MapWidget<S> {
    /// Widget with an arbitrary data source (tests swap in a stub)
    pub fn with_source(config: WidgetConfig, source: S) -> Self {
        let surface = Arc::new(Mutex::new(MapSurface::new(&config)));
        let renderer = BatchRenderer::new(&config);
        Self {
            config,
            source: Arc::new(source),
            surface,
            renderer,
            pager: Pager::new(),
            generation: 0,
            latest_counters: None,
        }
    }

    /// Initial load: draws page 1
    pub async fn first_render(&mut self) -> Result<()> {
        self.load_page(1).await
    }

    /// Navigates to an explicit page. Returns `false` without fetching
    /// when the target is outside 1..=total.
    pub async fn go_to_page(&mut self, page_number: u32) -> Result<bool> {
        if !self.pager.can_go_to(page_number) {
            debug!(
                "ignoring navigation to page {page_number} of {}",
                self.pager.state().total_pages
            );
            return Ok(false);
        }
        self.load_page(page_number).await?;
        Ok(true)
    }

    /// The Next control. Only acts below the last page.
    pub async fn next_page(&mut self) -> Result<bool> {
        match self.pager.next_target() {
            Some(target) => {
                self.load_page(target).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The Previous control. Only acts above page 1.
    pub async fn previous_page(&mut self) -> Result<bool> {
        match self.pager.previous_target() {
            Some(target) => {
                self.load_page(target).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn load_page(&mut self, page_number: u32) -> Result<()> {
        self.generation += 1;
        let generation = self.generation;
        info!("loading page {page_number} (generation {generation})");

        let page = self
            .source
            .fetch_activities(
                &self.config.language,
                &self.config.source,
                page_number,
                self.config.page_size,
            )
            .await?;

        self.pager.apply_page(&page);
        self.pager.reset_displayed();
        lock_surface(&self.surface).begin_generation(generation);

        let displayed = self.pager.displayed_counter();
        self.renderer
            .render_page(
                &page.items,
                &self.config.language,
                generation,
                &self.source,
                &self.surface,
                &displayed,
            )
            .await?;

        info!("{}", self.pager.status_text());
        Ok(())
    }

    pub fn status_text(&self) -> String {
        self.pager.status_text()
    }

    pub fn page_state(&self) -> PageState {
        self.pager.state()
    }

    pub fn displayed(&self) -> u32 {
        self.pager.displayed()
    }

    /// Shared handle to the surface for the embedding front end
    pub fn surface(&self) -> Arc<Mutex<MapSurface>> {
        Arc::clone(&self.surface)
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn latest_counters(&self) -> Option<&CounterSnapshot> {
        self.latest_counters.as_ref()
    }

    /// Generation of the most recent page load
    pub fn current_generation(&self) -> u64 {
        self.generation
    }
}
