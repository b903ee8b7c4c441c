use crate::config::{Rule, Severity};
use serde_json::json;

/// Print the rule table with ANSI colors.
pub fn print_pretty(rules: &[Rule], selected: Option<&str>) {
    for rule in rules {
        let switch = if rule.is_turned_on {
            "\x1b[32m on\x1b[0m"
        } else {
            "\x1b[90moff\x1b[0m"
        };
        let severity = match rule.value {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warn => "\x1b[33mwarn \x1b[0m",
        };

        let mut badges = String::new();
        if rule.is_recommended {
            badges.push_str(" \x1b[32m✓\x1b[0m");
        }
        if rule.is_fixable {
            badges.push_str(" \x1b[36m⚙\x1b[0m");
        }

        let cursor = if selected == Some(rule.name.as_str()) {
            "\x1b[1m>\x1b[0m"
        } else {
            " "
        };

        println!(
            "{} [{}] {} \x1b[1m{:<18}\x1b[0m {}{}",
            cursor, switch, severity, rule.name, rule.short_description, badges
        );
    }

    let on = rules.iter().filter(|r| r.is_turned_on).count();
    println!(
        "\n\x1b[1m{} rules ({} on, {} off)\x1b[0m",
        rules.len(),
        on,
        rules.len() - on
    );
}

/// Print the rule table as structured JSON.
pub fn print_json(rules: &[Rule], selected: Option<&str>) {
    let entries: Vec<_> = rules
        .iter()
        .map(|rule| {
            json!({
                "name": rule.name,
                "short_description": rule.short_description,
                "long_description": rule.long_description,
                "class_name": rule.class_name,
                "recommended": rule.is_recommended,
                "fixable": rule.is_fixable,
                "turned_on": rule.is_turned_on,
                "severity": rule.value.as_str(),
                "examples": {
                    "correct": rule.examples.correct,
                    "incorrect": rule.examples.incorrect,
                },
            })
        })
        .collect();

    let output = json!({
        "rules": entries,
        "selected": selected,
        "summary": {
            "total": rules.len(),
            "turned_on": rules.iter().filter(|r| r.is_turned_on).count(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
