use crate::config::{Rule, Severity};
use crate::ui::{Direction, RuleInfoHandler};

/// Owns the ordered rule list and the current selection.
///
/// The detail panel renders from `selected()` and reports interactions
/// through the `RuleInfoHandler` impl below, so every mutation funnels
/// through one place.
pub struct RuleRegistry {
    rules: Vec<Rule>,
    selected: usize,
}

impl RuleRegistry {
    /// Build a registry over `rules`, selecting the first entry.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules, selected: 0 }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn find(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// The rule the detail panel should show. `None` only for an empty list.
    pub fn selected(&self) -> Option<&Rule> {
        self.rules.get(self.selected)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected().map(|r| r.name.as_str())
    }

    /// Move the selection to the named rule. Returns false if unknown.
    pub fn select(&mut self, name: &str) -> bool {
        match self.rules.iter().position(|r| r.name == name) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Set a rule's switch state. Returns false if the rule is unknown.
    pub fn set_turned_on(&mut self, name: &str, is_turned_on: bool) -> bool {
        match self.rules.iter_mut().find(|r| r.name == name) {
            Some(rule) => {
                rule.is_turned_on = is_turned_on;
                true
            }
            None => false,
        }
    }

    /// Set a rule's severity. Returns false if the rule is unknown.
    pub fn set_severity(&mut self, name: &str, value: Severity) -> bool {
        match self.rules.iter_mut().find(|r| r.name == name) {
            Some(rule) => {
                rule.value = value;
                true
            }
            None => false,
        }
    }

    /// Step the selection, wrapping at both ends of the list.
    pub fn navigate(&mut self, direction: Direction) {
        if self.rules.is_empty() {
            return;
        }
        let len = self.rules.len();
        self.selected = match direction {
            Direction::Next => (self.selected + 1) % len,
            Direction::Previous => (self.selected + len - 1) % len,
        };
    }
}

impl RuleInfoHandler for RuleRegistry {
    fn on_switcher_click(&mut self, name: &str, is_turned_on: bool) {
        self.set_turned_on(name, is_turned_on);
    }

    fn on_select_change(&mut self, name: &str, value: Severity) {
        self.set_severity(name, value);
    }

    fn on_previous_or_next_button_click(&mut self, direction: Direction) {
        self.navigate(direction);
    }
}
