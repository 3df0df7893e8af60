//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Asset filtering through the state
//! - Cursor clamping against the filtered list

use geopeek::app::AppState;
use geopeek::catalog::Asset;
use geopeek::wizard::WizardStep;

fn test_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "AST-001".to_string(),
            name: "Zürich Landing Site".to_string(),
            latitude: 47.3769,
            longitude: 8.5417,
            kind: "landing-site".to_string(),
        },
        Asset {
            id: "AST-002".to_string(),
            name: "Bern Depot".to_string(),
            latitude: 46.9480,
            longitude: 7.4474,
            kind: "depot".to_string(),
        },
        Asset {
            id: "AST-003".to_string(),
            name: "Sion Hangar".to_string(),
            latitude: 46.2331,
            longitude: 7.3606,
            kind: "hangar".to_string(),
        },
    ]
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_starts_on_first_step() {
    let state = AppState::default();
    assert_eq!(state.wizard.current_step(), WizardStep::SelectCategory);
}

#[test]
fn test_app_state_default_has_prompt_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("category"));
}

#[test]
fn test_app_state_default_cursors_are_zero() {
    let state = AppState::default();
    assert_eq!(state.category_cursor, 0);
    assert_eq!(state.asset_cursor, 0);
    assert_eq!(state.result_scroll, 0);
}

#[test]
fn test_app_state_default_catalog_not_ready() {
    let state = AppState::default();
    assert!(!state.catalog_ready);
    assert!(state.assets.is_empty());
}

#[test]
fn test_app_state_default_filter_empty() {
    let state = AppState::default();
    assert!(state.filter.is_empty());
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

// =============================================================================
// Asset Filtering Tests
// =============================================================================

#[test]
fn test_empty_filter_shows_all_assets() {
    let mut state = AppState::default();
    state.assets = test_assets();

    assert_eq!(state.filtered_assets().len(), 3);
}

#[test]
fn test_filter_matches_name_case_insensitive() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.filter = "bern".to_string();

    let filtered = state.filtered_assets();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "AST-002");
}

#[test]
fn test_filter_matches_kind() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.filter = "hangar".to_string();

    let filtered = state.filtered_assets();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Sion Hangar");
}

#[test]
fn test_filter_matches_id() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.filter = "ast-001".to_string();

    let filtered = state.filtered_assets();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Zürich Landing Site");
}

#[test]
fn test_filter_without_match_yields_empty_list() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.filter = "geneva".to_string();

    assert!(state.filtered_assets().is_empty());
}

#[test]
fn test_filtered_assets_keep_catalog_order() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.filter = "a".to_string();

    let ids: Vec<&str> = state
        .filtered_assets()
        .iter()
        .map(|asset| asset.id.as_str())
        .collect();
    assert_eq!(ids, vec!["AST-001", "AST-002", "AST-003"]);
}

// =============================================================================
// Cursor Clamping Tests
// =============================================================================

#[test]
fn test_clamp_cursor_on_shrunk_list() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.asset_cursor = 2;
    state.filter = "bern".to_string();

    state.clamp_asset_cursor();
    assert_eq!(state.asset_cursor, 0);
}

#[test]
fn test_clamp_cursor_on_empty_list() {
    let mut state = AppState::default();
    state.asset_cursor = 5;

    state.clamp_asset_cursor();
    assert_eq!(state.asset_cursor, 0);
}

#[test]
fn test_clamp_cursor_leaves_valid_position_alone() {
    let mut state = AppState::default();
    state.assets = test_assets();
    state.asset_cursor = 1;

    state.clamp_asset_cursor();
    assert_eq!(state.asset_cursor, 1);
}
