//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Banner, stepper, and status line rendering
//! - `steps` - The three wizard step screens

mod header;
mod steps;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::components::{help_overlay, nav_bar};
use crate::theme::UiConstants;
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

// Re-export for external use
pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI. Rendering is a pure function of
/// the application state passed in each frame.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybindings: &KeybindingContext) {
        // Main layout with nav bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),                             // Main content area
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        // Content splits into banner, step body, and status line
        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::STATUS_LINE_HEIGHT),
            ])
            .split(content_area);

        let step = state.wizard.current_step();
        self.header.render_header(f, content_chunks[0], step);

        match step {
            WizardStep::SelectCategory => {
                steps::render_category_step(f, content_chunks[1], state);
            }
            WizardStep::SelectAsset => {
                steps::render_asset_step(f, content_chunks[1], state);
            }
            WizardStep::ShowResult => {
                steps::render_result_step(f, content_chunks[1], state);
            }
        }

        header::render_status_line(f, content_chunks[2], state);

        // Render navigation bar
        let nav_items = keybindings.get_nav_items(&state.wizard);
        nav_bar::render_nav_bar(f, nav_bar_area, &nav_items);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            help_overlay::render_help_overlay(f, step, keybindings);
        }
    }
}
