//! Line scanner for the `EPUBError` enumeration in `error_handler.h`.
//!
//! The scanner ignores everything up to `enum class EPUBError`, then collects
//! records until the closing `};`. Inside the block it recognizes three
//! comment shapes:
//!
//! ```text
//!     // EPUBSpec::OpenContainerFormat          spec reference (sticky)
//!     // § 2.5.1                                section number (sticky)
//!     OCFNoContainerFile,   ///< Text. Critical. enumerator annotation
//! ```
//!
//! Spec and section values carry forward to every following enumerator until
//! another comment replaces them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use log::debug;
use regex::bytes::Regex;

use crate::record::{ErrorRecord, Severity};

// Patterns run over raw bytes with Unicode disabled: `\s`, `[[:alnum:]]` and
// digits are ASCII-only, `.` matches any byte but `\n`, and `\xC2\xA7` is `§`.
static START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^enum class EPUBError").unwrap());
static END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\};").unwrap());
static SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^\s+// (?P<spec>EPUBSpec::[[:alnum:]]+)").unwrap());
static SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^\s+// \xC2\xA7 (?P<section>[0-9.]+)").unwrap());
static INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)^\s+(?P<name>[[:alnum:]]+),\s*///<\s*(?P<message>.*)\s+(?P<severity>Minor|Medium|Major|Critical).\s*$",
    )
    .unwrap()
});

/// The spec/section values most recently seen inside the enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyRefs {
    pub spec: String,
    pub section: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Searching,
    Collecting,
    Done,
}

/// What a single line did to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Ignored,
    Start,
    End,
    Spec,
    Section,
    Record,
}

#[derive(Debug)]
pub struct Scanner {
    state: State,
    sticky: StickyRefs,
    records: Vec<ErrorRecord>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Captures matched by the ASCII-only groups above.
fn ascii(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Searching,
            sticky: StickyRefs::default(),
            records: Vec::new(),
        }
    }

    #[cfg(test)]
    fn sticky(&self) -> &StickyRefs {
        &self.sticky
    }

    #[cfg(test)]
    fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Process one line (without its line terminator).
    pub fn feed(&mut self, line: &[u8]) -> LineKind {
        match self.state {
            State::Done => LineKind::Ignored,
            State::Searching => {
                if START.is_match(line) {
                    debug!("found start of error enum: {}", String::from_utf8_lossy(line));
                    self.state = State::Collecting;
                    LineKind::Start
                } else {
                    LineKind::Ignored
                }
            }
            State::Collecting => self.collect(line),
        }
    }

    fn collect(&mut self, line: &[u8]) -> LineKind {
        let text = String::from_utf8_lossy(line);
        if END.is_match(line) {
            debug!("found end of error enum: {text}");
            self.state = State::Done;
            return LineKind::End;
        }
        if let Some(caps) = SPEC.captures(line) {
            self.sticky.spec = ascii(&caps["spec"]);
            debug!("found spec variable name '{}': {text}", self.sticky.spec);
            return LineKind::Spec;
        }
        if let Some(caps) = SECTION.captures(line) {
            self.sticky.section = ascii(&caps["section"]);
            debug!("found spec section number '{}': {text}", self.sticky.section);
            return LineKind::Section;
        }
        if let Some(caps) = INFO.captures(line) {
            // The pattern's alternation only admits the four keywords.
            let Some(severity) = Severity::from_keyword(&ascii(&caps["severity"])) else {
                return LineKind::Ignored;
            };
            let record = ErrorRecord {
                name: ascii(&caps["name"]),
                spec_reference: self.sticky.spec.clone(),
                section_reference: self.sticky.section.clone(),
                message: caps["message"].to_vec(),
                severity,
            };
            debug!(
                "found error info: {} / '{}' ({})",
                record.name,
                String::from_utf8_lossy(&record.message),
                record.severity
            );
            self.records.push(record);
            return LineKind::Record;
        }
        LineKind::Ignored
    }

    /// End the scan. Running out of input inside the enumeration is an error;
    /// never finding the enumeration just yields no records.
    pub fn finish(self) -> Result<Vec<ErrorRecord>> {
        if self.state == State::Collecting {
            bail!(
                "unterminated EPUBError enumeration: no closing `}};` after {} record(s)",
                self.records.len()
            );
        }
        Ok(self.records)
    }
}

/// Scan a reader line by line, stopping at the end of the enumeration.
///
/// Lines are raw bytes; the header does not have to be valid UTF-8.
pub fn scan_reader<R: BufRead>(mut reader: R) -> Result<Vec<ErrorRecord>> {
    let mut scanner = Scanner::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).context("failed to read line")? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if scanner.feed(line) == LineKind::End {
            break;
        }
    }
    scanner.finish()
}

pub fn scan_file(path: &Path) -> Result<Vec<ErrorRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    scan_reader(BufReader::new(file)).with_context(|| format!("while scanning {}", path.display()))
}
