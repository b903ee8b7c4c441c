use crate::config::{Rule, RuleExamples, Severity};
use crate::ui::{RuleInfoEvent, RuleInfoHandler};

/// Render the detail panel for one rule as ANSI text.
///
/// The panel is a pure function of the descriptor: header with badges and
/// switch, long description, severity selector, side-by-side examples,
/// footer controls. Nothing is cached between renders.
pub fn render(rule: &Rule) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\x1b[1m\x1b[4m{}\x1b[0m - {}",
        rule.name, rule.short_description
    ));
    if rule.is_recommended {
        out.push_str("  \x1b[32m✓ Recommended\x1b[0m");
    }
    if rule.is_fixable {
        out.push_str("  \x1b[36m⚙ Fixable\x1b[0m");
    }
    out.push('\n');

    let (switch, hint) = if rule.is_turned_on {
        ("\x1b[32m on\x1b[0m", "Turn off")
    } else {
        ("\x1b[90moff\x1b[0m", "Turn on")
    };
    out.push_str(&format!("[{}] \x1b[90m{}\x1b[0m\n\n", switch, hint));

    out.push_str(&rule.long_description);
    out.push_str("\n\n");

    out.push_str("What ESLint should do when it catches the rule break:\n");
    for option in [Severity::Warn, Severity::Error] {
        let marker = if rule.value == option {
            "\x1b[32m●\x1b[0m"
        } else {
            "\x1b[90m○\x1b[0m"
        };
        out.push_str(&format!(
            "  {} {:<16} \x1b[90m({})\x1b[0m\n",
            marker,
            option.label(),
            option.as_str()
        ));
    }
    out.push('\n');

    out.push_str("Rule examples:\n");
    out.push_str(&render_examples(&rule.examples));
    out.push('\n');

    out.push_str("[ Reset rule settings ]          [ Previous rule ]  [ Next rule ]\n");
    out
}

/// Correct and incorrect samples in two columns. Absent samples leave
/// their column empty.
fn render_examples(examples: &RuleExamples) -> String {
    let left: Vec<&str> = match examples.correct.as_deref() {
        Some(code) => code.lines().collect(),
        None => Vec::new(),
    };
    let right: Vec<&str> = match examples.incorrect.as_deref() {
        Some(code) => code.lines().collect(),
        None => Vec::new(),
    };

    let width = left
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max("✓ correct".chars().count());

    let mut out = String::new();
    out.push_str(&format!(
        "  \x1b[32m{:<width$}\x1b[0m \x1b[90m│\x1b[0m \x1b[31m✗ incorrect\x1b[0m\n",
        "✓ correct",
    ));

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        out.push_str(&format!(
            "  {:<width$} \x1b[90m│\x1b[0m {}\n",
            l,
            r.trim_end()
        ));
    }

    out
}

/// Forward a panel interaction to the handler.
///
/// The switch reports the opposite of the descriptor's current state. The
/// reset control renders but is consumed here without reaching the
/// handler; what resetting a rule means is still an open product question.
pub fn dispatch(rule: &Rule, event: RuleInfoEvent, handler: &mut dyn RuleInfoHandler) {
    match event {
        RuleInfoEvent::ToggleSwitcher => {
            handler.on_switcher_click(&rule.name, !rule.is_turned_on)
        }
        RuleInfoEvent::SelectSeverity(value) => handler.on_select_change(&rule.name, value),
        RuleInfoEvent::Navigate(direction) => {
            handler.on_previous_or_next_button_click(direction)
        }
        RuleInfoEvent::ResetSettings => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Direction;
    use regex::Regex;

    fn make_rule() -> Rule {
        Rule {
            name: "no-var".into(),
            short_description: "Require let or const instead of var".into(),
            long_description: "Variables declared with var are function-scoped.".into(),
            class_name: "rule-no-var".into(),
            is_recommended: false,
            is_fixable: true,
            is_turned_on: true,
            value: Severity::Error,
            examples: RuleExamples {
                correct: Some("let count = 1;".into()),
                incorrect: Some("var count = 1;".into()),
            },
        }
    }

    fn plain(s: &str) -> String {
        Regex::new("\x1b\\[[0-9;]*m").unwrap().replace_all(s, "").into_owned()
    }

    #[test]
    fn renders_header_and_descriptions() {
        let panel = plain(&render(&make_rule()));
        assert!(panel.contains("no-var - Require let or const instead of var"));
        assert!(panel.contains("Variables declared with var are function-scoped."));
    }

    #[test]
    fn badges_follow_flags() {
        let mut rule = make_rule();
        let panel = plain(&render(&rule));
        assert!(!panel.contains("✓ Recommended"));
        assert!(panel.contains("⚙ Fixable"));

        rule.is_recommended = true;
        rule.is_fixable = false;
        let panel = plain(&render(&rule));
        assert!(panel.contains("✓ Recommended"));
        assert!(!panel.contains("⚙ Fixable"));
    }

    #[test]
    fn switch_state_and_hint() {
        let mut rule = make_rule();
        let panel = plain(&render(&rule));
        assert!(panel.contains("[ on] Turn off"));

        rule.is_turned_on = false;
        let panel = plain(&render(&rule));
        assert!(panel.contains("[off] Turn on"));
    }

    #[test]
    fn current_severity_is_marked() {
        let mut rule = make_rule();
        let panel = plain(&render(&rule));
        assert!(panel.contains("○ Show a warning"));
        assert!(panel.contains("● Throw an error"));

        rule.value = Severity::Warn;
        let panel = plain(&render(&rule));
        assert!(panel.contains("● Show a warning"));
        assert!(panel.contains("○ Throw an error"));
    }

    #[test]
    fn examples_render_side_by_side() {
        let panel = plain(&render(&make_rule()));
        let row = panel
            .lines()
            .find(|l| l.contains("let count = 1;"))
            .unwrap();
        assert!(row.contains("│ var count = 1;"));
    }

    #[test]
    fn missing_examples_degrade_to_empty_columns() {
        let mut rule = make_rule();
        rule.examples = RuleExamples::default();
        let panel = plain(&render(&rule));
        assert!(panel.contains("✓ correct"));
        assert!(panel.contains("✗ incorrect"));
        assert!(!panel.contains("let count"));
    }

    #[test]
    fn uneven_example_lengths_pad_the_short_side() {
        let mut rule = make_rule();
        rule.examples.correct = Some("let a = 1;\nlet b = 2;".into());
        rule.examples.incorrect = Some("var a = 1;".into());
        let panel = plain(&render(&rule));
        let row = panel.lines().find(|l| l.contains("let b = 2;")).unwrap();
        assert!(row.trim_end().ends_with('│'));
    }

    #[test]
    fn footer_controls_present() {
        let panel = plain(&render(&make_rule()));
        assert!(panel.contains("[ Reset rule settings ]"));
        assert!(panel.contains("[ Previous rule ]"));
        assert!(panel.contains("[ Next rule ]"));
    }

    #[derive(Default)]
    struct Recorder {
        switcher: Vec<(String, bool)>,
        select: Vec<(String, Severity)>,
        navigate: Vec<&'static str>,
    }

    impl RuleInfoHandler for Recorder {
        fn on_switcher_click(&mut self, name: &str, is_turned_on: bool) {
            self.switcher.push((name.to_string(), is_turned_on));
        }

        fn on_select_change(&mut self, name: &str, value: Severity) {
            self.select.push((name.to_string(), value));
        }

        fn on_previous_or_next_button_click(&mut self, direction: Direction) {
            self.navigate.push(direction.as_str());
        }
    }

    #[test]
    fn toggle_reports_negated_state() {
        let rule = make_rule();
        let mut recorder = Recorder::default();
        dispatch(&rule, RuleInfoEvent::ToggleSwitcher, &mut recorder);
        assert_eq!(recorder.switcher, vec![("no-var".to_string(), false)]);
    }

    #[test]
    fn select_reports_chosen_severity() {
        let rule = make_rule();
        let mut recorder = Recorder::default();
        dispatch(
            &rule,
            RuleInfoEvent::SelectSeverity(Severity::Warn),
            &mut recorder,
        );
        assert_eq!(recorder.select, vec![("no-var".to_string(), Severity::Warn)]);
    }

    #[test]
    fn navigation_reports_direction_strings() {
        let rule = make_rule();
        let mut recorder = Recorder::default();
        dispatch(
            &rule,
            RuleInfoEvent::Navigate(Direction::Previous),
            &mut recorder,
        );
        dispatch(&rule, RuleInfoEvent::Navigate(Direction::Next), &mut recorder);
        assert_eq!(recorder.navigate, vec!["previous", "next"]);
    }

    #[test]
    fn reset_reaches_no_callback() {
        let rule = make_rule();
        let mut recorder = Recorder::default();
        dispatch(&rule, RuleInfoEvent::ResetSettings, &mut recorder);
        assert!(recorder.switcher.is_empty());
        assert!(recorder.select.is_empty());
        assert!(recorder.navigate.is_empty());
    }
}
