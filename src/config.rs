use std::fmt;
use std::str::FromStr;

/// Severity level ESLint applies when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

impl Severity {
    /// Canonical string emitted into generated configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Option label shown by the severity selector.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warn => "Show a warning",
            Severity::Error => "Throw an error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for severity strings that are neither `warn` nor `error`.
#[derive(Debug)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}' (expected 'warn' or 'error')", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Code samples demonstrating a rule in use.
#[derive(Debug, Clone, Default)]
pub struct RuleExamples {
    pub correct: Option<String>,
    pub incorrect: Option<String>,
}

/// One lint rule's metadata and current configuration.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// CSS hook consumed by the web front end; surfaced in JSON output.
    pub class_name: String,
    pub is_recommended: bool,
    pub is_fixable: bool,
    pub is_turned_on: bool,
    pub value: Severity,
    pub examples: RuleExamples,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            name: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            class_name: String::new(),
            is_recommended: false,
            is_fixable: false,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples::default(),
        }
    }
}
