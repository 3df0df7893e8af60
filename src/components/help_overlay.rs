//! Help overlay component
//!
//! Displays context-sensitive help centered over the current screen.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles, UiConstants};
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the help overlay for the current step
pub fn render_help_overlay(f: &mut Frame, step: WizardStep, keybindings: &KeybindingContext) {
    let area = centered_rect(
        UiConstants::HELP_WIDTH_PCT,
        UiConstants::HELP_HEIGHT_PCT,
        f.area(),
    );

    let sections = keybindings.get_help_content(step);
    let content = build_content(&sections, step);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::border_active());

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Build the help content from sections
fn build_content(sections: &[HelpSection], step: WizardStep) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Header
    lines.push(Line::from(vec![Span::styled(
        "  GeoPeek Help  ",
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )]));
    lines.push(Line::from(""));

    // Current step
    lines.push(Line::from(vec![
        Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
        Span::styled(
            format!("Step {} of {}: {}", step.step_number(), WizardStep::TOTAL_STEPS, step.title()),
            Style::default().fg(Colors::SECONDARY),
        ),
    ]));
    lines.push(Line::from(""));

    // Sections
    for section in sections {
        lines.push(Line::from(vec![Span::styled(
            format!("  {}  ", section.title),
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        for (key, description) in &section.items {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(
                    format!("{:<10}", key),
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
            ]));
        }
        lines.push(Line::from(""));
    }

    // Footer
    lines.push(Line::from(vec![Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Colors::FG_MUTED),
    )]));

    lines
}

/// Center a rect of the given percentage size inside `parent`
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
