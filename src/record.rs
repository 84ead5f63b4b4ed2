use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Minor,
    Medium,
    Major,
    Critical,
}

impl Severity {
    pub fn word(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Medium => "Medium",
            Severity::Major => "Major",
            Severity::Critical => "Critical",
        }
    }

    /// Exact, case-sensitive match on the keyword used in annotation comments.
    pub fn from_keyword(s: &str) -> Option<Severity> {
        match s {
            "Minor" => Some(Severity::Minor),
            "Medium" => Some(Severity::Medium),
            "Major" => Some(Severity::Major),
            "Critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

/// Renders the qualified C++ reference, e.g. `ViolationSeverity::Major`.
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViolationSeverity::{}", self.word())
    }
}

/// One `EPUBError` enumerator and the metadata gathered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub name: String,
    /// Qualified `EPUBSpec::...` reference, empty if none was seen yet.
    pub spec_reference: String,
    /// Dotted section number, empty if none was seen yet.
    pub section_reference: String,
    /// Raw bytes of the annotation text; not necessarily UTF-8.
    pub message: Vec<u8>,
    pub severity: Severity,
}
