//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState and its cursors)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::AppState;

use crate::catalog;
use crate::components::keybindings::KeybindingContext;
use crate::error::{GeopeekError, Result};
use crate::geoadmin::{IdentifyRequest, InfoCategory, LookupClient};
use crate::theme::{UiConstants, UiText};
use crate::ui::UiRenderer;
use crate::wizard::{Advance, WizardStep};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};

/// Messages sent from worker threads to the main UI thread
#[derive(Debug)]
pub enum WorkerMessage {
    /// The asset catalog finished loading
    CatalogLoaded(Vec<catalog::Asset>),
    /// The asset catalog could not be loaded; the list stays empty
    CatalogFailed(String),
    /// The identify lookup returned a document
    LookupCompleted(serde_json::Value),
    /// The identify lookup failed; this ends the session
    LookupFailed(String),
}

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// HTTP client cloned into lookup threads
    lookup_client: LookupClient,
    /// Channel sender for worker results (cloned to threads)
    worker_tx: Sender<WorkerMessage>,
    /// Channel receiver for worker results (polled in main loop)
    worker_rx: Receiver<WorkerMessage>,
}

impl App {
    /// Create a new application instance and start loading the catalog.
    ///
    /// `assets_path` substitutes a CSV file on disk for the bundled dataset.
    pub fn new(assets_path: Option<PathBuf>) -> Result<Self> {
        info!("Creating new App instance");
        let (worker_tx, worker_rx) = mpsc::channel();
        let lookup_client = LookupClient::new()?;

        spawn_catalog_load(worker_tx.clone(), assets_path);

        Ok(Self {
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            lookup_client,
            worker_tx,
            worker_rx,
        })
    }

    /// Get reference to the current application state
    #[allow(dead_code)] // API method available for future use
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Poll for worker results from background threads
    fn drain_worker_messages(&mut self) -> Result<()> {
        // Process all pending messages without blocking
        while let Ok(msg) = self.worker_rx.try_recv() {
            match msg {
                WorkerMessage::CatalogLoaded(assets) => {
                    info!("Asset catalog ready: {} entries", assets.len());
                    self.state.assets = assets;
                    self.state.catalog_ready = true;
                    self.state.asset_cursor = 0;
                    if self.state.assets.is_empty() {
                        self.state.status_message = "Asset catalog is empty".to_string();
                    }
                }
                WorkerMessage::CatalogFailed(err) => {
                    warn!("Asset catalog unavailable: {}", err);
                    self.state.catalog_ready = true;
                    self.state.status_message =
                        "Asset catalog unavailable, the asset list is empty".to_string();
                }
                WorkerMessage::LookupCompleted(document) => {
                    info!("Lookup completed");
                    self.state.wizard.resolve_lookup(document);
                    self.state.result_scroll = 0;
                    self.state.status_message = "Lookup complete".to_string();
                }
                WorkerMessage::LookupFailed(err) => {
                    error!("Lookup failed: {}", err);
                    return Err(GeopeekError::lookup(err));
                }
            }
        }
        Ok(())
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Poll for worker results
            self.drain_worker_messages()?;

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    // The next draw below picks up the new size
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;
        }

        Ok(())
    }

    /// Handle keyboard input events
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        // Handle help overlay - ? or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.state.help_visible = false;
            }
            return Ok(false);
        }

        // Global help toggle with '?'
        if key_event.code == KeyCode::Char('?') {
            self.state.help_visible = true;
            return Ok(false);
        }

        // Ctrl+C always quits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("Ctrl+C pressed, exiting");
            return Ok(true);
        }

        match self.state.wizard.current_step() {
            WizardStep::SelectCategory => self.handle_category_keys(key_event),
            WizardStep::SelectAsset => self.handle_asset_keys(key_event),
            WizardStep::ShowResult => self.handle_result_keys(key_event),
        }
    }

    /// Keys on the category selection step
    fn handle_category_keys(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                self.state.category_cursor = self.state.category_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = InfoCategory::iter().count().saturating_sub(1);
                if self.state.category_cursor < last {
                    self.state.category_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(category) = InfoCategory::iter().nth(self.state.category_cursor) {
                    self.state.wizard.set_category(category);
                    self.state.status_message = format!("Category: {}", category);
                }
            }
            KeyCode::Right | KeyCode::Char('n') => self.handle_advance(),
            KeyCode::Left | KeyCode::Char('b') => self.handle_retreat(),
            _ => {}
        }
        Ok(false)
    }

    /// Keys on the asset selection step. Plain characters feed the filter.
    fn handle_asset_keys(&mut self, key_event: KeyEvent) -> Result<bool> {
        let visible = self.state.filtered_assets().len();
        match key_event.code {
            KeyCode::Up => {
                self.state.asset_cursor = self.state.asset_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if visible > 0 && self.state.asset_cursor < visible - 1 {
                    self.state.asset_cursor += 1;
                }
            }
            KeyCode::PageUp => {
                self.state.asset_cursor = self
                    .state
                    .asset_cursor
                    .saturating_sub(UiConstants::PAGE_SCROLL_SIZE);
            }
            KeyCode::PageDown => {
                if visible > 0 {
                    self.state.asset_cursor =
                        (self.state.asset_cursor + UiConstants::PAGE_SCROLL_SIZE).min(visible - 1);
                }
            }
            KeyCode::Home => self.state.asset_cursor = 0,
            KeyCode::End => {
                if visible > 0 {
                    self.state.asset_cursor = visible - 1;
                }
            }
            KeyCode::Enter => self.select_highlighted_asset(),
            KeyCode::Right => self.handle_advance(),
            KeyCode::Left => self.handle_retreat(),
            KeyCode::Esc => {
                self.state.filter.clear();
                self.state.asset_cursor = 0;
            }
            KeyCode::Backspace => {
                self.state.filter.pop();
                self.state.clamp_asset_cursor();
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.filter.push(c);
                self.state.asset_cursor = 0;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Keys on the result step
    fn handle_result_keys(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                self.state.result_scroll = self.state.result_scroll.saturating_sub(1);
            }
            KeyCode::Down => self.scroll_result_down(1),
            KeyCode::PageUp => {
                self.state.result_scroll = self
                    .state
                    .result_scroll
                    .saturating_sub(UiConstants::PAGE_SCROLL_SIZE);
            }
            KeyCode::PageDown => self.scroll_result_down(UiConstants::PAGE_SCROLL_SIZE),
            KeyCode::Home => self.state.result_scroll = 0,
            KeyCode::End => self.scroll_result_down(usize::MAX),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => self.handle_advance(),
            KeyCode::Left | KeyCode::Char('b') => self.handle_retreat(),
            _ => {}
        }
        Ok(false)
    }

    /// Copy the highlighted asset into the wizard
    fn select_highlighted_asset(&mut self) {
        let selected = self
            .state
            .filtered_assets()
            .get(self.state.asset_cursor)
            .map(|asset| (*asset).clone());
        if let Some(asset) = selected {
            self.state.status_message = format!("Asset: {}", asset.name);
            self.state.wizard.set_asset(asset);
        }
    }

    /// Drive the wizard forward, spawning the lookup when leaving the asset step
    fn handle_advance(&mut self) {
        match self.state.wizard.advance() {
            Advance::Moved(step) => {
                debug!("Wizard moved to {}", step);
                self.state.status_message =
                    format!("Step {}: {}", step.step_number(), step.title());
            }
            Advance::Lookup(request) => {
                self.state.status_message = format!("Fetching {}...", request.category);
                self.spawn_lookup(request);
            }
            Advance::Restarted => {
                debug!("Wizard restarted");
                self.state.category_cursor = 0;
                self.state.asset_cursor = 0;
                self.state.filter.clear();
                self.state.result_scroll = 0;
                self.state.status_message = "Select an information category".to_string();
            }
            Advance::Blocked => {
                self.state.status_message = if self.state.wizard.is_lookup_pending() {
                    UiText::FETCHING.to_string()
                } else {
                    match self.state.wizard.current_step() {
                        WizardStep::SelectCategory => {
                            "Select a category first (Enter)".to_string()
                        }
                        _ => "Select an asset first (Enter)".to_string(),
                    }
                };
            }
        }
    }

    /// Step the wizard back unless it is pinned
    fn handle_retreat(&mut self) {
        if !self.state.wizard.can_retreat() {
            if self.state.wizard.is_lookup_pending() {
                self.state.status_message = UiText::FETCHING.to_string();
            }
            return;
        }
        self.state.wizard.retreat();
        let step = self.state.wizard.current_step();
        self.state.status_message = format!("Step {}: {}", step.step_number(), step.title());
    }

    /// Run the identify call on a worker thread
    fn spawn_lookup(&self, request: IdentifyRequest) {
        info!(
            "Starting lookup: {} at ({}, {})",
            request.category, request.longitude, request.latitude
        );
        let tx = self.worker_tx.clone();
        let client = self.lookup_client.clone();
        thread::spawn(move || {
            let msg = match client.identify(&request) {
                Ok(document) => WorkerMessage::LookupCompleted(document),
                Err(err) => WorkerMessage::LookupFailed(err.to_string()),
            };
            // the app may already be gone on shutdown
            let _ = tx.send(msg);
        });
    }

    /// Scroll the result view down, clamped to the document length
    fn scroll_result_down(&mut self, amount: usize) {
        let line_count = self
            .state
            .wizard
            .result_pretty()
            .map(|text| text.lines().count())
            .unwrap_or(0);
        self.state.result_scroll = self
            .state
            .result_scroll
            .saturating_add(amount)
            .min(line_count.saturating_sub(1));
    }
}

/// Load the dataset off the UI thread; the result arrives as a message
fn spawn_catalog_load(tx: Sender<WorkerMessage>, path: Option<PathBuf>) {
    thread::spawn(move || {
        let outcome = match &path {
            Some(p) => catalog::load_from_path(p),
            None => catalog::load_embedded(),
        };
        let msg = match outcome {
            Ok(assets) => WorkerMessage::CatalogLoaded(assets),
            Err(err) => WorkerMessage::CatalogFailed(err.to_string()),
        };
        // the app may already be gone on shutdown
        let _ = tx.send(msg);
    });
}
