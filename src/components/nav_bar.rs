//! Bottom navigation bar
//!
//! One-line hint bar showing the key actions available on the current step.
//! Disabled actions stay visible but dimmed, matching the gating of the
//! wizard itself.

use super::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the navigation bar into `area`
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Styles::nav_hint()));
        }
        let (key_style, label_style) = if item.enabled {
            (
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Colors::FG_SECONDARY),
            )
        } else {
            (Styles::text_muted(), Styles::text_muted())
        };
        spans.push(Span::styled(item.key_display.clone(), key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item.action_label.clone(), label_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
