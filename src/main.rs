use clap::Parser;
use regex::Regex;
use ruleboard::catalog;
use ruleboard::cli::{format, state, Cli, Commands, OutputFormat};
use std::path::Path;
use ruleboard::config::Severity;
use ruleboard::generate;
use ruleboard::registry::RuleRegistry;
use ruleboard::ui::rule_info;
use ruleboard::ui::{Direction, RuleInfoEvent};
use std::fmt;
use std::fs;
use std::process;

fn main() {
    let Cli { state, command } = Cli::parse();

    let mut registry = RuleRegistry::new(catalog::builtin_rules());
    let stored = match state::load(&state) {
        Ok(s) => s,
        Err(e) => fail(e),
    };
    state::apply(&stored, &mut registry);

    match command {
        Commands::List {
            filter,
            format: output_format,
        } => {
            let rules: Vec<_> = match filter {
                Some(ref pattern) => {
                    let re = match Regex::new(pattern) {
                        Ok(re) => re,
                        Err(e) => fail(format_args!("invalid filter: {}", e)),
                    };
                    registry
                        .rules()
                        .iter()
                        .filter(|r| re.is_match(&r.name) || re.is_match(&r.short_description))
                        .cloned()
                        .collect()
                }
                None => registry.rules().to_vec(),
            };

            match output_format {
                OutputFormat::Pretty => format::print_pretty(&rules, registry.selected_name()),
                OutputFormat::Json => format::print_json(&rules, registry.selected_name()),
            }
        }

        Commands::Show {
            rule,
            previous,
            next,
        } => {
            if let Some(ref name) = rule {
                if !registry.select(name) {
                    fail(format_args!("unknown rule '{}'", name));
                }
            } else if previous || next {
                let direction = if previous {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                if let Some(selected) = registry.selected().cloned() {
                    rule_info::dispatch(
                        &selected,
                        RuleInfoEvent::Navigate(direction),
                        &mut registry,
                    );
                }
            }

            match registry.selected() {
                Some(selected) => print!("{}", rule_info::render(selected)),
                None => fail("the rule catalog is empty"),
            }

            save(&state, &registry);
        }

        Commands::Toggle { rule } => {
            let target = match registry.find(&rule) {
                Some(r) => r.clone(),
                None => fail(format_args!("unknown rule '{}'", rule)),
            };
            rule_info::dispatch(&target, RuleInfoEvent::ToggleSwitcher, &mut registry);
            save(&state, &registry);

            if let Some(updated) = registry.find(&rule) {
                let switch = if updated.is_turned_on { "on" } else { "off" };
                println!("{} is now {} ({})", updated.name, switch, updated.value);
            }
        }

        Commands::Set { rule, severity } => {
            let value: Severity = match severity.parse() {
                Ok(v) => v,
                Err(e) => fail(e),
            };
            let target = match registry.find(&rule) {
                Some(r) => r.clone(),
                None => fail(format_args!("unknown rule '{}'", rule)),
            };
            rule_info::dispatch(&target, RuleInfoEvent::SelectSeverity(value), &mut registry);
            save(&state, &registry);
            println!("{} severity set to {}", rule, value);
        }

        Commands::Generate { output } => {
            let config = generate::generate_config(registry.rules());
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, &config) {
                        fail(format_args!("failed to write {}: {}", path.display(), e));
                    }
                    println!("wrote {}", path.display());
                }
                None => println!("{}", config),
            }
        }
    }
}

fn save(state: &Path, registry: &RuleRegistry) {
    if let Err(e) = state::save(state, &state::capture(registry)) {
        fail(e);
    }
}

fn fail(message: impl fmt::Display) -> ! {
    eprintln!("\x1b[31merror\x1b[0m: {}", message);
    process::exit(2);
}
