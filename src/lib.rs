//! GeoPeek Library
//!
//! This library provides the core functionality for the GeoPeek terminal
//! wizard: the asset catalog, the geoportal identify client, the wizard
//! state machine, and the TUI shell around them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod geoadmin;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppState, WorkerMessage};
pub use catalog::Asset;
pub use error::{GeopeekError, Result};
pub use geoadmin::{IdentifyRequest, InfoCategory, LookupClient};
pub use wizard::{Advance, Wizard, WizardStep};
