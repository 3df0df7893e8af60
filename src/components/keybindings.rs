//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current wizard step.

#![allow(dead_code)]

use crate::wizard::{Wizard, WizardStep};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Next,
    Back,
    ScrollUp,
    ScrollDown,
    ClearFilter,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Step-specific keybindings
    step_bindings: HashMap<WizardStep, Vec<Keybinding>>,
    /// Global keybindings (available on all steps)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            step_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all steps
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Category selection
        self.step_bindings.insert(
            WizardStep::SelectCategory,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select category"),
                Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Next step"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Next, "N", "Next step"),
                Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Back"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );

        // Asset selection; letters feed the filter here, so Next/Back and the
        // globals must stay off plain character keys
        self.step_bindings.insert(
            WizardStep::SelectAsset,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select asset"),
                Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Next step"),
                Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Back"),
                Keybinding::new(KeyCode::Esc, KeyAction::ClearFilter, "Esc", "Clear filter"),
            ],
        );

        // Result view
        self.step_bindings.insert(
            WizardStep::ShowResult,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to top"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to bottom"),
                Keybinding::new(KeyCode::Enter, KeyAction::Next, "Enter", "Finish"),
                Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Finish"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Next, "N", "Finish"),
                Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Back"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            ],
        );
    }

    /// Get keybindings for a specific step (includes global bindings)
    pub fn get_bindings(&self, step: WizardStep) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(step_bindings) = self.step_bindings.get(&step) {
            bindings.extend(step_bindings.iter());
        }

        // On the asset step plain `q` belongs to the filter, so only the
        // modified quit binding applies there
        bindings.extend(self.global_bindings.iter().filter(|b| {
            step != WizardStep::SelectAsset
                || b.key != KeyCode::Char('q')
                || b.modifiers != KeyModifiers::NONE
        }));

        bindings
    }

    /// Get navigation bar items for the wizard's current situation
    pub fn get_nav_items(&self, wizard: &Wizard) -> Vec<NavBarItem> {
        let step = wizard.current_step();
        let bindings = self.get_bindings(step);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match step {
            WizardStep::SelectCategory => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Next,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            WizardStep::SelectAsset => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Next,
                KeyAction::ClearFilter,
                KeyAction::Help,
            ],
            WizardStep::ShowResult => vec![
                KeyAction::ScrollUp,
                KeyAction::ScrollDown,
                KeyAction::Back,
                KeyAction::Next,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;
        let mut has_scroll = false;

        for action in priority_actions {
            if (action == KeyAction::NavigateUp || action == KeyAction::NavigateDown) && has_nav {
                continue;
            }
            if (action == KeyAction::ScrollUp || action == KeyAction::ScrollDown) && has_scroll {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::NavigateUp || action == KeyAction::NavigateDown {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                        enabled: true,
                    });
                    has_nav = true;
                } else if action == KeyAction::ScrollUp || action == KeyAction::ScrollDown {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Scroll".to_string(),
                        enabled: true,
                    });
                    has_scroll = true;
                } else if action == KeyAction::Next {
                    items.push(Self::next_item(binding, wizard));
                } else if action == KeyAction::Back {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                        enabled: wizard.can_retreat(),
                    });
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                        enabled: true,
                    });
                }
            }
        }

        items
    }

    /// Nav bar entry for the forward action, reflecting the wizard's gating
    fn next_item(binding: &Keybinding, wizard: &Wizard) -> NavBarItem {
        if wizard.is_lookup_pending() {
            return NavBarItem {
                key_display: binding.display.clone(),
                action_label: "Fetching...".to_string(),
                enabled: false,
            };
        }
        NavBarItem {
            key_display: binding.display.clone(),
            action_label: binding.description.clone(),
            enabled: wizard.can_advance(),
        }
    }

    /// Get full help content for a step (for help overlay)
    pub fn get_help_content(&self, step: WizardStep) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        // Navigation section
        let nav_bindings: Vec<_> = self
            .get_bindings(step)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                )
            })
            .collect();

        if !nav_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: nav_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        // Actions section
        let mut action_items: Vec<(String, String)> = self
            .get_bindings(step)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Select | KeyAction::Next | KeyAction::ClearFilter
                )
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();

        if step == WizardStep::SelectAsset {
            action_items.push(("A-Z".to_string(), "Filter assets".to_string()));
        }

        if !action_items.is_empty() {
            sections.push(HelpSection {
                title: "Actions".to_string(),
                items: action_items,
            });
        }

        // General section
        let general_bindings: Vec<_> = self
            .get_bindings(step)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Back | KeyAction::Help | KeyAction::Quit))
            .collect();

        if !general_bindings.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
    pub enabled: bool,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
