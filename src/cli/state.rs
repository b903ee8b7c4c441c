use crate::config::Severity;
use crate::registry::RuleRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Persisted editor state file (`ruleboard.toml`) structure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub editor: EditorSection,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleState>,
}

/// The `[editor]` section.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EditorSection {
    pub selected: Option<String>,
}

/// A single `[[rule]]` entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleState {
    pub name: String,
    #[serde(default)]
    pub turned_on: bool,
    #[serde(default = "default_severity")]
    pub severity: String,
}

fn default_severity() -> String {
    "warn".into()
}

impl RuleState {
    /// Convert the stored severity string to the core type.
    /// Anything that is not `error` reads as `warn`.
    pub fn severity(&self) -> Severity {
        match self.severity.to_lowercase().as_str() {
            "error" => Severity::Error,
            _ => Severity::Warn,
        }
    }
}

#[derive(Debug)]
pub enum StateError {
    Read(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Write(io::Error),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Read(e) => write!(f, "failed to read state file: {}", e),
            StateError::Parse(e) => write!(f, "failed to parse state file: {}", e),
            StateError::Serialize(e) => write!(f, "failed to serialize state: {}", e),
            StateError::Write(e) => write!(f, "failed to write state file: {}", e),
        }
    }
}

impl std::error::Error for StateError {}

/// Load the state file. A missing file is not an error: the caller keeps
/// catalog defaults.
pub fn load(path: &Path) -> Result<StateFile, StateError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StateFile::default()),
        Err(e) => return Err(StateError::Read(e)),
    };
    toml::from_str(&text).map_err(StateError::Parse)
}

/// Overlay stored per-rule state and the remembered selection onto the
/// registry. Entries naming unknown rules are skipped.
pub fn apply(state: &StateFile, registry: &mut RuleRegistry) {
    for rule in &state.rules {
        registry.set_turned_on(&rule.name, rule.turned_on);
        registry.set_severity(&rule.name, rule.severity());
    }
    if let Some(name) = &state.editor.selected {
        registry.select(name);
    }
}

/// Capture the registry back into a serializable state file.
pub fn capture(registry: &RuleRegistry) -> StateFile {
    StateFile {
        editor: EditorSection {
            selected: registry.selected_name().map(str::to_string),
        },
        rules: registry
            .rules()
            .iter()
            .map(|rule| RuleState {
                name: rule.name.clone(),
                turned_on: rule.is_turned_on,
                severity: rule.value.as_str().to_string(),
            })
            .collect(),
    }
}

pub fn save(path: &Path, state: &StateFile) -> Result<(), StateError> {
    let text = toml::to_string_pretty(state).map_err(StateError::Serialize)?;
    fs::write(path, text).map_err(StateError::Write)
}
