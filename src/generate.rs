use crate::config::Rule;

/// Render the turned-on subset of `rules` as an `.eslintrc`-style block:
///
/// ```text
/// {
///   "rules": {
///     "no-var": "error",
///     "semi": "warn"
///   }
/// }
/// ```
///
/// Rules keep their relative order. Names are emitted verbatim, without
/// escaping. With nothing turned on the `rules` body is an empty line —
/// that is the shape the web editor always produced and downstream
/// consumers accept it, so it stays.
pub fn generate_config(rules: &[Rule]) -> String {
    let lines: Vec<String> = rules
        .iter()
        .filter(|rule| rule.is_turned_on)
        .map(|rule| format!("    \"{}\": \"{}\"", rule.name, rule.value.as_str()))
        .collect();

    format!("{{\n  \"rules\": {{\n{}\n  }}\n}}", lines.join(",\n"))
}
