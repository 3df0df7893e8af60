//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application. This makes it easy
//! to maintain visual consistency and enables future theming support.
//!
//! # Usage
//! ```rust
//! use geopeek::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! // Use color constants
//! let style = Style::default().fg(Colors::PRIMARY);
//!
//! // Use pre-built styles
//! let title_style = Styles::title();
//! ```

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (foregrounds)
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Unselected list item
    pub const UNSELECTED: Color = Color::Gray;

    /// Header/title text
    pub const HEADER: Color = Color::Cyan;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Stepper Colors
    // -------------------------------------------------------------------------

    /// Active/current step
    pub const STEP_ACTIVE: Color = Color::Yellow;

    /// Completed step
    pub const STEP_COMPLETE: Color = Color::Green;

    /// Pending step
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
/// Use these instead of constructing styles inline for consistency
pub struct Styles;

impl Styles {
    // -------------------------------------------------------------------------
    // Text Styles
    // -------------------------------------------------------------------------

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Bold text
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Title/Header Styles
    // -------------------------------------------------------------------------

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::HEADER)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Border/Block Styles
    // -------------------------------------------------------------------------

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    // -------------------------------------------------------------------------
    // Selection Styles
    // -------------------------------------------------------------------------

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    /// Focused item (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Status/Feedback Styles
    // -------------------------------------------------------------------------

    /// Success message style
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Warning message style
    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// Error message style
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    // -------------------------------------------------------------------------
    // Menu Item Styles
    // -------------------------------------------------------------------------

    /// Item description text
    pub fn item_desc() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Get style for a stepper entry
    pub fn step_style(completed: bool, active: bool) -> Style {
        if completed {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Header height (banner plus stepper)
    pub const HEADER_HEIGHT: u16 = 8;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Status line height
    pub const STATUS_LINE_HEIGHT: u16 = 1;

    /// Scroll page size (items)
    pub const PAGE_SCROLL_SIZE: usize = 10;

    /// Help overlay width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const HELP_HEIGHT_PCT: u16 = 70;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    // Status messages
    pub const LOADING_ASSETS: &'static str = "Loading assets...";
    pub const NO_ASSETS: &'static str = "No assets available";
    pub const FETCHING: &'static str = "Fetching...";

    // Common prompts
    pub const PRESS_ENTER: &'static str = "Press Enter to select";
}
