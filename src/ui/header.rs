//! Banner, stepper, and status line rendering
//!
//! This module contains the ASCII art banner, the three-step progress
//! header, and the status line shown under the step body.

use crate::app::AppState;
use crate::theme::{Colors, Styles, Theme};
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Header renderer containing the ASCII art banner
pub struct HeaderRenderer {
    /// ASCII art banner lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner and the step progress row
    pub fn render_header(&self, f: &mut Frame, area: Rect, current: WizardStep) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Banner
                Constraint::Length(1), // Spacing
                Constraint::Length(1), // Stepper
            ])
            .split(area);

        let banner = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(banner, chunks[0]);

        render_stepper(f, chunks[2], current);
    }

    /// Create the ASCII art banner
    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                " ██████╗ ███████╗ ██████╗ ██████╗ ███████╗███████╗██╗  ██╗",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██╔════╝ ██╔════╝██╔═══██╗██╔══██╗██╔════╝██╔════╝██║ ██╔╝",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██║  ███╗█████╗  ██║   ██║██████╔╝█████╗  █████╗  █████╔╝ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██║   ██║██╔══╝  ██║   ██║██╔═══╝ ██╔══╝  ██╔══╝  ██╔═██╗ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "╚██████╔╝███████╗╚██████╔╝██║     ███████╗███████╗██║  ██╗",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                " ╚═════╝ ╚══════╝ ╚═════╝ ╚═╝     ╚══════╝╚══════╝╚═╝  ╚═╝",
                Style::default().fg(Colors::PRIMARY),
            )]),
        ]
    }
}

/// Render the three-step progress row
fn render_stepper(f: &mut Frame, area: Rect, current: WizardStep) {
    let titles: Vec<Line> = WizardStep::all_steps()
        .iter()
        .map(|step| {
            let completed = step.index() < current.index();
            let active = *step == current;
            Line::from(Span::styled(
                format!(" {}. {} ", step.step_number(), step.title()),
                Theme::step_style(completed, active),
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .highlight_style(Theme::step_style(false, true))
        .divider(Span::styled(">", Styles::nav_hint()));
    f.render_widget(tabs, area);
}

/// Render the status line under the step body
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.wizard.is_lookup_pending() {
        Styles::warning()
    } else {
        Styles::text_secondary()
    };
    let status = Paragraph::new(format!(" {}", state.status_message)).style(style);
    f.render_widget(status, area);
}
