//! Application state definitions
//!
//! Contains the owned state the renderer reads every frame: the wizard, the
//! loaded catalog, and the cursors that drive the step screens.

use crate::catalog::Asset;
use crate::wizard::Wizard;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Wizard state machine
    pub wizard: Wizard,
    /// Loaded asset catalog (empty until the load worker reports in)
    pub assets: Vec<Asset>,
    /// True once the catalog load finished, successfully or not
    pub catalog_ready: bool,
    /// Highlight position in the category list
    pub category_cursor: usize,
    /// Highlight position in the filtered asset list
    pub asset_cursor: usize,
    /// Type-to-filter text for the asset list
    pub filter: String,
    /// Scroll offset in the result view
    pub result_scroll: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            wizard: Wizard::new(),
            assets: Vec::new(),
            catalog_ready: false,
            category_cursor: 0,
            asset_cursor: 0,
            filter: String::new(),
            result_scroll: 0,
            status_message: "Select an information category".to_string(),
            help_visible: false,
        }
    }
}

impl AppState {
    /// Assets that pass the current filter, in catalog order
    pub fn filtered_assets(&self) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|asset| asset.matches_filter(&self.filter))
            .collect()
    }

    /// Keep the asset highlight inside the filtered list
    pub fn clamp_asset_cursor(&mut self) {
        let visible = self.filtered_assets().len();
        if visible == 0 {
            self.asset_cursor = 0;
        } else if self.asset_cursor >= visible {
            self.asset_cursor = visible - 1;
        }
    }
}
