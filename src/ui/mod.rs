pub mod rule_info;
pub mod theme;

use crate::config::Severity;

/// Direction for moving through the rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Wire string handed to the navigation callback.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }
}

/// A user interaction on the rule detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleInfoEvent {
    /// The on/off switch was clicked.
    ToggleSwitcher,
    /// A severity was chosen from the selector.
    SelectSeverity(Severity),
    /// "Previous rule" / "Next rule" footer button.
    Navigate(Direction),
    /// "Reset rule settings" footer button. Wired to nothing.
    ResetSettings,
}

/// Callbacks owned by whoever holds the rule list.
///
/// The panel never mutates a descriptor; it reports what the user did and
/// the handler applies the change before the next render.
pub trait RuleInfoHandler {
    /// The switch was flipped; `is_turned_on` is the requested new state.
    fn on_switcher_click(&mut self, name: &str, is_turned_on: bool);

    /// A severity was picked from the selector.
    fn on_select_change(&mut self, name: &str, value: Severity);

    /// A footer navigation button was pressed.
    fn on_previous_or_next_button_click(&mut self, direction: Direction);
}
