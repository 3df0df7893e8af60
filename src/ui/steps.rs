//! Wizard step screens
//!
//! One render function per wizard step:
//! - `SelectCategory` - pick the information category
//! - `SelectAsset` - pick the asset, with type-to-filter
//! - `ShowResult` - scroll through the fetched identify document

use crate::app::AppState;
use crate::geoadmin::InfoCategory;
use crate::theme::{Colors, Styles, UiText};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Render the category selection step.
pub fn render_category_step(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Category list
            Constraint::Length(2), // Description of the highlighted entry
        ])
        .split(area);

    let chosen = state.wizard.category();
    let items: Vec<ListItem> = InfoCategory::iter()
        .map(|category| {
            let is_chosen = chosen == Some(category);
            let marker = if is_chosen { " [SELECTED] " } else { "  " };
            let style = if is_chosen {
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD)
            } else {
                Styles::text()
            };
            ListItem::new(format!("{}{}", marker, category)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Step 1: Information category ")
                .title_style(Styles::header())
                .border_style(Styles::border_active()),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(state.category_cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let description = InfoCategory::iter()
        .nth(state.category_cursor)
        .map(|category| category.description())
        .unwrap_or_default();
    let description = Paragraph::new(format!(" {}", description))
        .style(Styles::item_desc())
        .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[1]);
}

/// Render the asset selection step.
///
/// Shows a loading placeholder until the catalog worker reports in, then
/// the filtered asset list with the current filter text above it.
pub fn render_asset_step(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Min(3),    // Asset list
        ])
        .split(area);

    let filter_line = if state.filter.is_empty() {
        Line::from(vec![
            Span::styled(" Filter: ", Styles::text_bold()),
            Span::styled("type to narrow the list", Styles::text_muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Filter: ", Styles::text_bold()),
            Span::styled(state.filter.as_str(), Styles::focused()),
        ])
    };
    f.render_widget(Paragraph::new(filter_line), chunks[0]);

    if !state.catalog_ready {
        let loading = Paragraph::new(format!("  {}", UiText::LOADING_ASSETS))
            .style(Styles::text_secondary());
        f.render_widget(loading, chunks[1]);
        return;
    }

    let filtered = state.filtered_assets();
    if state.assets.is_empty() {
        let empty = Paragraph::new(format!("  {}", UiText::NO_ASSETS)).style(Styles::warning());
        f.render_widget(empty, chunks[1]);
        return;
    }
    if filtered.is_empty() {
        let no_match =
            Paragraph::new("  No assets match the filter").style(Styles::warning());
        f.render_widget(no_match, chunks[1]);
        return;
    }

    let selected_id = state.wizard.selected_asset().map(|asset| asset.id.as_str());
    let items: Vec<ListItem> = filtered
        .iter()
        .map(|asset| {
            let is_chosen = selected_id == Some(asset.id.as_str());
            let marker = if is_chosen { " [SELECTED] " } else { "  " };
            let style = if is_chosen {
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD)
            } else {
                Styles::text()
            };
            ListItem::new(format!("{}{}", marker, asset.display_line())).style(style)
        })
        .collect();

    let title = format!(
        " Step 2: Assets ({} of {}) ",
        filtered.len(),
        state.assets.len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Styles::header())
                .border_style(Styles::border_active()),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(state.asset_cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Render the result step.
pub fn render_result_step(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Lookup context
            Constraint::Min(3),    // Response document
        ])
        .split(area);

    let category = state
        .wizard
        .category()
        .map(|category| category.to_string())
        .unwrap_or_else(|| "-".to_string());
    let asset = state
        .wizard
        .selected_asset()
        .map(|asset| asset.display_line())
        .unwrap_or_else(|| "-".to_string());
    let context = vec![
        Line::from(vec![
            Span::styled(" Category: ", Styles::text_bold()),
            Span::styled(category, Styles::text()),
        ]),
        Line::from(vec![
            Span::styled(" Asset:    ", Styles::text_bold()),
            Span::styled(asset, Styles::text()),
        ]),
    ];
    f.render_widget(Paragraph::new(context), chunks[0]);

    let body = state
        .wizard
        .result_pretty()
        .unwrap_or_else(|| "No result yet".to_string());
    let result = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Step 3: Identify response ")
                .title_style(Styles::header())
                .border_style(Styles::border_active()),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.result_scroll as u16, 0));
    f.render_widget(result, chunks[1]);
}
